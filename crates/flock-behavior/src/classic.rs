//! The classic cohesion/avoidance/alignment flock with a spherical boundary.

use flock_core::math::safe_normal;
use flock_core::{AgentId, DVec3};

use crate::{SteerContext, SteeringModel, rules};

/// Runs [`cohere`](rules::cohere), [`avoid`](rules::avoid),
/// [`align`](rules::align) and [`constrain`](rules::constrain) in that order
/// on one working heading.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClassicFlocking;

impl SteeringModel for ClassicFlocking {
    fn steer(&self, agent: AgentId, neighbors: &[AgentId], ctx: &SteerContext<'_>) -> DVec3 {
        let previous = ctx.direction(agent);
        let mut direction = previous;

        rules::cohere(agent, &mut direction, neighbors, ctx);
        rules::avoid(agent, &mut direction, neighbors, ctx);
        rules::align(agent, &mut direction, neighbors, ctx);
        rules::constrain(agent, &mut direction, neighbors, ctx);

        safe_normal(direction).unwrap_or(previous)
    }
}
