//! The four flocking rules.
//!
//! Each rule takes the agent's working heading by `&mut` and leaves it a unit
//! vector.  Neighbour positions and headings come from the snapshot in `ctx`,
//! never from the working heading of another agent.

use flock_core::math::{KINDA_SMALL, lerp_normals, map_range_unclamped, rotate_about_axis, safe_normal};
use flock_core::{AgentId, DVec3};

use crate::SteerContext;
use crate::params::FULL_INFLUENCE_NEIGHBORS;

/// Turn toward the mean position of `neighbors`.
///
/// Influence grows linearly with the neighbour count up to
/// [`FULL_INFLUENCE_NEIGHBORS`].
pub fn cohere(agent: AgentId, direction: &mut DVec3, neighbors: &[AgentId], ctx: &SteerContext<'_>) {
    if neighbors.is_empty() {
        return;
    }
    let n = neighbors.len() as f64;
    let mean = neighbors.iter().map(|&o| ctx.position(o)).sum::<DVec3>() / n;
    let Some(to_mean) = safe_normal(mean - ctx.position(agent)) else {
        return;
    };
    let alpha = n.clamp(0.0, FULL_INFLUENCE_NEIGHBORS) / FULL_INFLUENCE_NEIGHBORS
        * ctx.params.cohesion_strength;
    *direction = lerp_normals(*direction, to_mean, alpha);
}

/// Push away from close neighbours, harder the closer they are.
///
/// Repulsion from a neighbour at distance `d` is `(1 - d / r) / d` along the
/// unit separation, so it vanishes at the search radius `r`.  Neighbours
/// closer than `sqrt(KINDA_SMALL)` have no usable separation and are skipped.
pub fn avoid(agent: AgentId, direction: &mut DVec3, neighbors: &[AgentId], ctx: &SteerContext<'_>) {
    let position = ctx.position(agent);
    let radius = ctx.params.search_radius;
    let strength = ctx.params.avoidance_strength;

    let mut push = DVec3::ZERO;
    for &other in neighbors {
        let disp = position - ctx.position(other);
        let dist_sq = disp.length_squared();
        if dist_sq < KINDA_SMALL {
            continue;
        }
        let dist = dist_sq.sqrt();
        push += disp * ((1.0 - dist / radius) / dist) * strength;
    }

    if let Some(steered) = safe_normal(*direction + push) {
        *direction = steered;
    }
}

/// Turn toward the average heading of `neighbors`.
pub fn align(_agent: AgentId, direction: &mut DVec3, neighbors: &[AgentId], ctx: &SteerContext<'_>) {
    if neighbors.is_empty() {
        return;
    }
    let n = neighbors.len() as f64;
    let sum = neighbors.iter().map(|&o| ctx.direction(o)).sum::<DVec3>();
    let Some(average) = safe_normal(sum) else {
        return;
    };
    let alpha = (n / FULL_INFLUENCE_NEIGHBORS).min(1.0) * ctx.params.alignment_strength;
    *direction = lerp_normals(*direction, average, alpha);
}

/// Bend agents in the boundary band back toward the interior.
///
/// Inactive while the agent is within `R - r - KINDA_SMALL` of the origin.
/// Inside the band the heading is blended toward a target tilted inward from
/// the tangent plane by the configured [`BoundaryTurn`](flock_core::BoundaryTurn)
/// angle, or straight inward when the heading is radial.  The blend factor
/// rises from 0 at the inner edge to 1 at the bounds radius and keeps growing
/// past it.
pub fn constrain(agent: AgentId, direction: &mut DVec3, _neighbors: &[AgentId], ctx: &SteerContext<'_>) {
    let position = ctx.position(agent);
    let inner = ctx.params.band_inner_radius();
    let dist_sq = position.length_squared();
    if dist_sq <= inner * inner || dist_sq < KINDA_SMALL {
        return;
    }
    let dist = dist_sq.sqrt();
    let outward = position / dist;

    let right = direction.cross(outward);
    let target = if right.length_squared() > KINDA_SMALL {
        let right = right.normalize();
        let tangent = rotate_about_axis(right, outward, std::f64::consts::FRAC_PI_2);
        rotate_about_axis(tangent, right, ctx.params.boundary_turn.angle())
    } else {
        -outward
    };

    let alpha = map_range_unclamped(dist, (inner, ctx.params.bounds_radius), (0.0, 1.0));
    *direction = lerp_normals(*direction, target, alpha);
}
