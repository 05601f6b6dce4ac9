//! Which nearby agents an agent reacts to.

use flock_core::math::safe_normal;
use flock_core::{AgentId, DVec3};
use flock_spatial::SpatialGrid;

use crate::SteerContext;
use crate::params::FIELD_OF_VIEW_DOT;

/// `true` if `candidate` is inside the field of view of an agent at
/// `position` heading along `direction`.
///
/// A candidate at the agent's own position has no bearing and counts as
/// visible.
#[inline]
pub fn is_relevant(position: DVec3, direction: DVec3, candidate: DVec3) -> bool {
    let bearing = safe_normal(candidate - position).unwrap_or(DVec3::ZERO);
    direction.dot(bearing) > FIELD_OF_VIEW_DOT
}

/// Fill `out` with every other agent within the search radius of `agent`
/// that passes the field-of-view filter, measured against the snapshot.
pub fn gather_relevant(
    agent: AgentId,
    grid:  &SpatialGrid,
    ctx:   &SteerContext<'_>,
    out:   &mut Vec<AgentId>,
) {
    out.clear();
    let position = ctx.position(agent);
    let direction = ctx.direction(agent);
    grid.for_each_within(position, ctx.params.search_radius, ctx.positions, |other, p| {
        if other != agent && is_relevant(position, direction, p) {
            out.push(other);
        }
    });
}
