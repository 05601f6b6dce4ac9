//! Read-only simulation state passed to every steering call.

use flock_agent::TickSnapshot;
use flock_core::{AgentId, DVec3};

use crate::SteeringParams;

/// A read-only view of the previous tick's positions and headings plus this
/// tick's parameters.
///
/// Built once per tick by the scheduler and shared (immutably) across all
/// agents during the compute phase.
#[derive(Copy, Clone)]
pub struct SteerContext<'a> {
    /// Snapshot positions, indexed by `AgentId`.
    pub positions: &'a [DVec3],
    /// Snapshot unit headings, indexed by `AgentId`.
    pub directions: &'a [DVec3],
    pub params: SteeringParams,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(positions: &'a [DVec3], directions: &'a [DVec3], params: SteeringParams) -> Self {
        debug_assert_eq!(positions.len(), directions.len());
        Self { positions, directions, params }
    }

    #[inline]
    pub fn from_snapshot(snapshot: &'a TickSnapshot, params: SteeringParams) -> Self {
        Self::new(&snapshot.positions, &snapshot.directions, params)
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> DVec3 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn direction(&self, agent: AgentId) -> DVec3 {
        self.directions[agent.index()]
    }
}
