//! Typed indices for agents and grid cells.
//!
//! Both wrap a `u32` slot number.  `FlockConfig::validate` caps
//! `agent_count` at `u32::MAX`, so converting a buffer position back into an
//! `AgentId` never truncates once a simulation has been built.

use std::fmt;

/// Index of an agent in the SoA buffers.  Stable for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The id of the agent stored at buffer position `index`.
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "agent index {index} overflows u32");
        AgentId(index as u32)
    }

    /// Position of this agent in every per-agent `Vec`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Flattened index of a spatial-grid cell: `x + y*dims + z*dims²`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u32);

impl CellId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}
