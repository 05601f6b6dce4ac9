//! A steering model that never turns.

use flock_core::{AgentId, DVec3};

use crate::{SteerContext, SteeringModel};

/// A [`SteeringModel`] that returns each agent's snapshot heading unchanged.
///
/// Agents fly in straight lines, which makes movement and grid bookkeeping
/// easy to check in isolation.
pub struct NoopSteering;

impl SteeringModel for NoopSteering {
    fn steer(&self, agent: AgentId, _neighbors: &[AgentId], ctx: &SteerContext<'_>) -> DVec3 {
        ctx.direction(agent)
    }
}
