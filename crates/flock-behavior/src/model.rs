//! The `SteeringModel` trait — the extension point for custom flocking.

use flock_core::{AgentId, DVec3};

use crate::SteerContext;

/// Pluggable per-agent steering.
///
/// `steer` receives the agent's field-of-view-filtered neighbours (never
/// including the agent itself) and a read-only [`SteerContext`] over the
/// previous tick's snapshot, and returns the agent's new unit heading.
///
/// # Thread safety
///
/// In parallel mode the scheduler calls `steer` for many agents at once from
/// Rayon workers, so implementations must be `Send + Sync`.  Anything that
/// varies per agent belongs in the agent buffers, not in the model.
///
/// # Example
///
/// ```rust
/// use flock_behavior::{SteerContext, SteeringModel};
/// use flock_core::{AgentId, DVec3};
///
/// /// Every agent heads for the origin.
/// struct Homing;
///
/// impl SteeringModel for Homing {
///     fn steer(&self, agent: AgentId, _neighbors: &[AgentId], ctx: &SteerContext<'_>) -> DVec3 {
///         (-ctx.position(agent)).try_normalize().unwrap_or(ctx.direction(agent))
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    /// New heading for `agent`.  Must be a finite unit vector.
    fn steer(&self, agent: AgentId, neighbors: &[AgentId], ctx: &SteerContext<'_>) -> DVec3;
}
