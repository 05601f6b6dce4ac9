//! The previous-tick read buffer.

use flock_core::{AgentId, DVec3};

use crate::AgentBuffers;

/// Copy of every agent's position and heading taken at the start of a tick.
///
/// The compute phase reads only from here, never from [`AgentBuffers`], so
/// the order in which agents are processed cannot influence the result.
/// The allocation is reused across ticks.
#[derive(Clone, Debug, Default)]
pub struct TickSnapshot {
    pub positions: Vec<DVec3>,
    pub directions: Vec<DVec3>,
}

impl TickSnapshot {
    /// A snapshot sized for `count` agents: positions at the origin, headings
    /// along +X.
    pub fn with_count(count: usize) -> Self {
        Self {
            positions: vec![DVec3::ZERO; count],
            directions: vec![DVec3::X; count],
        }
    }

    /// Copy all of `agents` in one pass.
    pub fn capture(&mut self, agents: &AgentBuffers) {
        self.resize_for(agents);
        self.positions.copy_from_slice(&agents.positions);
        self.directions.copy_from_slice(&agents.directions);
    }

    /// Grow or shrink to `agents.count` without copying.  Parallel callers
    /// use this before filling the slots themselves.
    pub fn resize_for(&mut self, agents: &AgentBuffers) {
        self.positions.resize(agents.count, DVec3::ZERO);
        self.directions.resize(agents.count, DVec3::X);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
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
