//! Spatial-subsystem error type.

use thiserror::Error;

use flock_core::{AgentId, CellId};

/// Errors produced by `flock-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(String),

    #[error("{0} is not in any cell")]
    Missing(AgentId),

    #[error("{agent} is in both {first} and {second}")]
    Duplicate { agent: AgentId, first: CellId, second: CellId },

    #[error("{agent} is in {found} but its position maps to {expected}")]
    Misplaced { agent: AgentId, found: CellId, expected: CellId },

    #[error("{cell} holds {agent}, which has no position")]
    UnknownAgent { agent: AgentId, cell: CellId },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
