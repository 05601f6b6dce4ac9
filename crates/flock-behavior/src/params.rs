//! Per-tick steering parameters.

use flock_core::{BoundaryTurn, FlockConfig};

use crate::{BehaviorError, BehaviorResult};

/// Cosine threshold of the field of view: candidates whose direction from the
/// agent has a dot product with its heading of `-0.25` or less (roughly
/// 104.5° or more off the heading) are ignored.
pub const FIELD_OF_VIEW_DOT: f64 = -0.25;

/// Neighbour count at which cohesion and alignment reach full strength.
pub const FULL_INFLUENCE_NEIGHBORS: f64 = 15.0;

/// The subset of [`FlockConfig`] the steering rules read.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringParams {
    /// Neighbour search radius; repulsion fades to zero at this distance.
    pub search_radius: f64,
    /// Radius of the bounding sphere around the origin.
    pub bounds_radius: f64,
    pub cohesion_strength: f64,
    pub avoidance_strength: f64,
    pub alignment_strength: f64,
    pub boundary_turn: BoundaryTurn,
}

impl SteeringParams {
    /// Distance from the origin past which the boundary rule engages.
    #[inline]
    pub fn band_inner_radius(&self) -> f64 {
        self.bounds_radius - self.search_radius - flock_core::math::KINDA_SMALL
    }

    pub fn validate(&self) -> BehaviorResult<()> {
        if !(self.search_radius.is_finite() && self.search_radius > 0.0) {
            return Err(BehaviorError::Config(format!(
                "search radius must be positive, got {}", self.search_radius
            )));
        }
        if !(self.bounds_radius.is_finite() && self.band_inner_radius() > 0.0) {
            return Err(BehaviorError::Config(format!(
                "bounds radius {} leaves no interior inside the {} boundary band",
                self.bounds_radius, self.search_radius
            )));
        }
        for (name, v) in [
            ("cohesion", self.cohesion_strength),
            ("avoidance", self.avoidance_strength),
            ("alignment", self.alignment_strength),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(BehaviorError::Config(format!("{name} strength must be non-negative, got {v}")));
            }
        }
        Ok(())
    }
}

impl From<&FlockConfig> for SteeringParams {
    fn from(cfg: &FlockConfig) -> Self {
        Self {
            search_radius:      cfg.search_radius,
            bounds_radius:      cfg.bounds_radius,
            cohesion_strength:  cfg.cohesion_strength,
            avoidance_strength: cfg.avoidance_strength,
            alignment_strength: cfg.alignment_strength,
            boundary_turn:      cfg.boundary_turn,
        }
    }
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self::from(&FlockConfig::default())
    }
}
