//! Unit tests for flock-behavior.

#[cfg(test)]
mod helpers {
    use flock_core::DVec3;

    use crate::{SteerContext, SteeringParams};

    pub const EPS: f64 = 1e-9;

    pub fn ctx<'a>(positions: &'a [DVec3], directions: &'a [DVec3]) -> SteerContext<'a> {
        SteerContext::new(positions, directions, SteeringParams::default())
    }

    pub fn assert_unit(v: DVec3) {
        assert!(v.is_finite(), "{v} is not finite");
        assert!((v.length() - 1.0).abs() < EPS, "{v} is not unit length");
    }
}

// ── Params ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use flock_core::{BoundaryTurn, FlockConfig};

    use crate::SteeringParams;

    #[test]
    fn built_from_config() {
        let cfg = FlockConfig {
            search_radius: 40.0,
            cohesion_strength: 0.5,
            boundary_turn: BoundaryTurn::Radial,
            ..FlockConfig::default()
        };
        let p = SteeringParams::from(&cfg);
        assert_eq!(p.search_radius, 40.0);
        assert_eq!(p.bounds_radius, cfg.bounds_radius);
        assert_eq!(p.cohesion_strength, 0.5);
        assert_eq!(p.boundary_turn, BoundaryTurn::Radial);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn band_starts_inside_bounds() {
        let p = SteeringParams::default();
        let inner = p.band_inner_radius();
        assert!(inner < p.bounds_radius - p.search_radius);
        assert!(inner > p.bounds_radius - p.search_radius - 1e-3);
    }

    #[test]
    fn rejects_bad_values() {
        let base = SteeringParams::default();
        assert!(SteeringParams { search_radius: 0.0, ..base }.validate().is_err());
        assert!(SteeringParams { search_radius: 1000.0, ..base }.validate().is_err());
        assert!(SteeringParams { avoidance_strength: -0.1, ..base }.validate().is_err());
        assert!(SteeringParams { alignment_strength: f64::NAN, ..base }.validate().is_err());
    }
}

// ── Perception ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod perception {
    use flock_core::{AgentId, DVec3};
    use flock_spatial::{GridGeometry, SpatialGrid};

    use super::helpers::ctx;
    use crate::{gather_relevant, is_relevant};

    #[test]
    fn field_of_view() {
        let o = DVec3::ZERO;
        assert!(is_relevant(o, DVec3::X, DVec3::new(10.0, 0.0, 0.0)));
        assert!(is_relevant(o, DVec3::X, DVec3::new(0.0, 10.0, 0.0)));
        assert!(!is_relevant(o, DVec3::X, DVec3::new(-10.0, 0.0, 0.0)));
        // cos(110°) ≈ -0.34 is outside, cos(100°) ≈ -0.17 inside.
        let at = |deg: f64| DVec3::new(deg.to_radians().cos(), deg.to_radians().sin(), 0.0) * 10.0;
        assert!(is_relevant(o, DVec3::X, at(100.0)));
        assert!(!is_relevant(o, DVec3::X, at(110.0)));
    }

    #[test]
    fn coincident_candidate_is_relevant() {
        let p = DVec3::new(3.0, 4.0, 5.0);
        assert!(is_relevant(p, DVec3::X, p));
    }

    #[test]
    fn gather_filters_self_range_and_view() {
        let positions = vec![
            DVec3::ZERO,                  // 0: the agent
            DVec3::new(5.0, 0.0, 0.0),    // 1: ahead
            DVec3::new(-5.0, 0.0, 0.0),   // 2: behind
            DVec3::new(0.0, 5.0, 0.0),    // 3: beside
            DVec3::new(100.0, 0.0, 0.0),  // 4: out of range
            DVec3::new(0.0, 0.0, 25.0),   // 5: exactly at the radius
        ];
        let directions = vec![DVec3::X; positions.len()];
        let grid = SpatialGrid::new(GridGeometry::new(1000.0, 125.0).unwrap());
        grid.populate(&positions);

        let mut out = vec![AgentId(99)];
        gather_relevant(AgentId(0), &grid, &ctx(&positions, &directions), &mut out);
        out.sort();
        assert_eq!(out, vec![AgentId(1), AgentId(3), AgentId(5)]);
    }

    #[test]
    fn gather_sees_across_cell_faces() {
        // 62.5 is the face between the two central cells on X.
        let positions = vec![DVec3::new(60.0, 0.0, 0.0), DVec3::new(70.0, 0.0, 0.0)];
        let directions = vec![DVec3::X, DVec3::NEG_X];
        let grid = SpatialGrid::new(GridGeometry::new(1000.0, 125.0).unwrap());
        grid.populate(&positions);

        let mut out = Vec::new();
        gather_relevant(AgentId(0), &grid, &ctx(&positions, &directions), &mut out);
        assert_eq!(out, vec![AgentId(1)]);
        gather_relevant(AgentId(1), &grid, &ctx(&positions, &directions), &mut out);
        assert_eq!(out, vec![AgentId(0)]);
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rules {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    use flock_core::{AgentId, BoundaryTurn, DVec3};

    use super::helpers::{EPS, assert_unit, ctx};
    use crate::rules::{align, avoid, cohere, constrain};
    use crate::{SteerContext, SteeringParams};

    const A0: AgentId = AgentId(0);

    #[test]
    fn cohere_without_neighbours_is_noop() {
        let positions = [DVec3::ZERO];
        let directions = [DVec3::X];
        let mut d = DVec3::X;
        cohere(A0, &mut d, &[], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::X);
    }

    #[test]
    fn cohere_turns_toward_mean() {
        let positions = [DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)];
        let directions = [DVec3::X, DVec3::X];
        let mut d = DVec3::X;
        cohere(A0, &mut d, &[AgentId(1)], &ctx(&positions, &directions));
        assert_unit(d);
        // One neighbour: alpha = 1/15 * 0.75 of a quarter turn.
        let expected = FRAC_PI_2 * 0.75 / 15.0;
        assert!((d.dot(DVec3::X).acos() - expected).abs() < EPS);
        assert!(d.y > 0.0);
    }

    #[test]
    fn cohere_with_mean_on_agent_is_noop() {
        let positions = [DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0), DVec3::new(0.0, -10.0, 0.0)];
        let directions = [DVec3::X; 3];
        let mut d = DVec3::X;
        cohere(A0, &mut d, &[AgentId(1), AgentId(2)], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::X);
    }

    #[test]
    fn cohere_saturates_at_fifteen() {
        let mut positions = vec![DVec3::ZERO];
        positions.extend(std::iter::repeat_n(DVec3::new(0.0, 10.0, 0.0), 30));
        let directions = vec![DVec3::X; positions.len()];
        let neighbors: Vec<AgentId> = (1..=30).map(AgentId).collect();
        let mut d = DVec3::X;
        cohere(A0, &mut d, &neighbors, &ctx(&positions, &directions));
        assert!((d.dot(DVec3::X).acos() - FRAC_PI_2 * 0.75).abs() < EPS);
    }

    #[test]
    fn avoid_pushes_away() {
        let positions = [DVec3::ZERO, DVec3::new(5.0, 0.0, 0.0)];
        let directions = [DVec3::Y, DVec3::Y];
        let mut d = DVec3::Y;
        avoid(A0, &mut d, &[AgentId(1)], &ctx(&positions, &directions));
        assert_unit(d);
        // Push is (-5) * (1 - 5/25)/5 * 0.75 = -0.6 on X.
        let expected = DVec3::new(-0.6, 1.0, 0.0).normalize();
        assert!(d.distance(expected) < EPS);
        assert!(d.dot(DVec3::NEG_X) > 0.0);
    }

    #[test]
    fn avoid_skips_coincident_neighbours() {
        let positions = [DVec3::ZERO, DVec3::new(0.001, 0.0, 0.0)];
        let directions = [DVec3::Y, DVec3::Y];
        let mut d = DVec3::Y;
        avoid(A0, &mut d, &[AgentId(1)], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::Y);
    }

    #[test]
    fn avoid_keeps_heading_when_push_cancels_it() {
        // Push from a neighbour 4 ahead with r = 8 and strength 2 is exactly -X.
        let positions = [DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0)];
        let directions = [DVec3::X, DVec3::X];
        let params = SteeringParams { search_radius: 8.0, avoidance_strength: 2.0, ..SteeringParams::default() };
        let c = SteerContext::new(&positions, &directions, params);
        let mut d = DVec3::X;
        avoid(A0, &mut d, &[AgentId(1)], &c);
        assert_eq!(d, DVec3::X);
    }

    #[test]
    fn align_without_neighbours_is_noop() {
        let positions = [DVec3::ZERO];
        let directions = [DVec3::X];
        let mut d = DVec3::X;
        align(A0, &mut d, &[], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::X);
    }

    #[test]
    fn align_turns_toward_average_heading() {
        let positions = [DVec3::ZERO, DVec3::new(5.0, 0.0, 0.0)];
        let directions = [DVec3::X, DVec3::Z];
        let mut d = DVec3::X;
        align(A0, &mut d, &[AgentId(1)], &ctx(&positions, &directions));
        assert_unit(d);
        assert!(d.z > 0.0);
        assert!((d.dot(DVec3::X).acos() - FRAC_PI_2 * 0.75 / 15.0).abs() < EPS);
    }

    #[test]
    fn align_with_cancelling_headings_is_noop() {
        let positions = [DVec3::ZERO, DVec3::new(5.0, 0.0, 0.0), DVec3::new(5.0, 1.0, 0.0)];
        let directions = [DVec3::X, DVec3::Y, DVec3::NEG_Y];
        let mut d = DVec3::X;
        align(A0, &mut d, &[AgentId(1), AgentId(2)], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::X);
    }

    #[test]
    fn constrain_inactive_inside() {
        let positions = [DVec3::new(900.0, 0.0, 0.0)];
        let directions = [DVec3::X];
        let mut d = DVec3::X;
        constrain(A0, &mut d, &[], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::X);
    }

    #[test]
    fn constrain_turns_radial_heading_inward() {
        let positions = [DVec3::new(990.0, 0.0, 0.0)];
        let directions = [DVec3::X];
        let mut d = DVec3::X;
        constrain(A0, &mut d, &[], &ctx(&positions, &directions));
        assert_unit(d);
        assert!(d.dot(DVec3::X) < 0.0);
    }

    #[test]
    fn constrain_tangential_target_at_bounds() {
        let positions = [DVec3::new(1000.0, 0.0, 0.0)];
        let directions = [DVec3::Y];
        let mut d = DVec3::Y;
        constrain(A0, &mut d, &[], &ctx(&positions, &directions));
        // Full blend onto the tangent tilted 45° inward.
        let expected = DVec3::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0);
        assert!(d.distance(expected) < 1e-6, "{d}");
    }

    #[test]
    fn constrain_radial_target_at_bounds() {
        let positions = [DVec3::new(1000.0, 0.0, 0.0)];
        let directions = [DVec3::Y];
        let params = SteeringParams { boundary_turn: BoundaryTurn::Radial, ..SteeringParams::default() };
        let mut d = DVec3::Y;
        constrain(A0, &mut d, &[], &SteerContext::new(&positions, &directions, params));
        assert!(d.distance(DVec3::NEG_X) < 1e-6, "{d}");
    }

    #[test]
    fn constrain_partial_in_band() {
        let positions = [DVec3::new(0.0, 0.0, 985.0)];
        let directions = [DVec3::X];
        let mut d = DVec3::X;
        constrain(A0, &mut d, &[], &ctx(&positions, &directions));
        assert_unit(d);
        assert!(d.z < 0.0, "heading should gain an inward component: {d}");
        assert!(d.x > 0.0, "partial blend keeps some of the old heading: {d}");
    }
}

// ── Models ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod models {
    use flock_core::{AgentId, DVec3};

    use super::helpers::{assert_unit, ctx};
    use crate::{ClassicFlocking, NoopSteering, SteeringModel};

    #[test]
    fn classic_alone_in_interior_keeps_heading() {
        let positions = [DVec3::new(10.0, 20.0, 30.0)];
        let directions = [DVec3::Y];
        let d = ClassicFlocking.steer(AgentId(0), &[], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::Y);
    }

    #[test]
    fn classic_survives_coincident_neighbours() {
        let positions = [DVec3::ZERO; 4];
        let directions = [DVec3::X, DVec3::NEG_X, DVec3::Y, DVec3::NEG_Y];
        let neighbors = [AgentId(1), AgentId(2), AgentId(3)];
        let d = ClassicFlocking.steer(AgentId(0), &neighbors, &ctx(&positions, &directions));
        assert_unit(d);
    }

    #[test]
    fn classic_survives_antiparallel_neighbours() {
        let positions = [DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), DVec3::new(6.0, 0.0, 0.0)];
        let directions = [DVec3::X, DVec3::NEG_X, DVec3::NEG_X];
        let neighbors = [AgentId(1), AgentId(2)];
        let d = ClassicFlocking.steer(AgentId(0), &neighbors, &ctx(&positions, &directions));
        assert_unit(d);
    }

    #[test]
    fn classic_is_unit_in_the_band() {
        let positions = [DVec3::new(0.0, -995.0, 0.0), DVec3::new(0.0, -990.0, 1.0)];
        let directions = [DVec3::NEG_Y, DVec3::Z];
        let d = ClassicFlocking.steer(AgentId(0), &[AgentId(1)], &ctx(&positions, &directions));
        assert_unit(d);
        assert!(d.y > -1.0 + 1e-6);
    }

    #[test]
    fn noop_returns_snapshot_heading() {
        let positions = [DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0)];
        let directions = [DVec3::Z, DVec3::X];
        let d = NoopSteering.steer(AgentId(0), &[AgentId(1)], &ctx(&positions, &directions));
        assert_eq!(d, DVec3::Z);
    }
}
