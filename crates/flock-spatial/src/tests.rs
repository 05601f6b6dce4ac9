//! Unit tests for flock-spatial.
//!
//! All tests use the default flock geometry (R = 1000, C = 125 → 16³ cells)
//! unless stated otherwise.

#[cfg(test)]
mod helpers {
    use flock_core::{DVec3, SimRng};

    use crate::{GridGeometry, SpatialGrid};

    pub fn geometry() -> GridGeometry {
        GridGeometry::new(1000.0, 125.0).unwrap()
    }

    pub fn grid_with(positions: &[DVec3]) -> SpatialGrid {
        let grid = SpatialGrid::new(geometry());
        grid.populate(positions);
        grid
    }

    /// `n` positions inside the bounding sphere plus a few beyond it, so the
    /// clamped edge cells are exercised too.
    pub fn scattered(n: usize, seed: u64) -> Vec<DVec3> {
        let mut rng = SimRng::new(seed);
        let mut out: Vec<DVec3> = (0..n).map(|_| rng.point_in_sphere(1000.0)).collect();
        out.push(DVec3::new(999.0, 0.0, 0.0));
        out.push(DVec3::new(-999.0, -999.0, 0.0));
        out.push(DVec3::new(1500.0, 10.0, -3.0));
        out
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use flock_core::{CellId, DVec3, IVec3};

    use super::helpers::geometry;
    use crate::GridGeometry;

    #[test]
    fn dimensions_from_bounds() {
        let g = geometry();
        assert_eq!(g.half_dims(), 8);
        assert_eq!(g.dims(), 16);
        assert_eq!(g.cell_count(), 4096);

        // Non-multiple radius rounds the half extent up.
        let g = GridGeometry::new(1001.0, 125.0).unwrap();
        assert_eq!(g.dims(), 18);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(GridGeometry::new(0.0, 125.0).is_err());
        assert!(GridGeometry::new(1000.0, -1.0).is_err());
        assert!(GridGeometry::new(f64::INFINITY, 1.0).is_err());
        assert!(GridGeometry::new(1.0e9, 1.0).is_err(), "absurd cell count accepted");
    }

    #[test]
    fn axis_rounding_and_clamping() {
        let g = geometry();
        assert_eq!(g.axis_coord(0.0), 8);
        assert_eq!(g.axis_coord(62.4), 8);
        assert_eq!(g.axis_coord(62.5), 9);
        assert_eq!(g.axis_coord(-62.5), 8);
        assert_eq!(g.axis_coord(-62.6), 7);
        assert_eq!(g.axis_coord(5_000.0), 15);
        assert_eq!(g.axis_coord(-5_000.0), 0);
        assert_eq!(g.axis_coord(f64::NAN), 8);
    }

    #[test]
    fn index_flattening_roundtrip() {
        let g = geometry();
        let coords = IVec3::new(3, 7, 11);
        let id = g.cell_index(coords);
        assert_eq!(id, CellId(3 + 7 * 16 + 11 * 256));
        assert_eq!(g.coords_of(id), coords);
    }

    #[test]
    fn box_of_centre_cell() {
        let g = geometry();
        let (center, half) = g.cell_box_of(IVec3::splat(8));
        assert_eq!(center, DVec3::ZERO);
        assert_eq!(half, 62.5);
    }

    #[test]
    fn index_consistent_with_bounds() {
        let g = geometry();
        for p in super::helpers::scattered(2_000, 11) {
            let coords = g.cell_coords(p);
            assert!(g.cell_bounds(coords).contains(p), "{p} not inside bounds of {coords}");
        }
    }

    #[test]
    fn edge_cells_open_outward() {
        let g = geometry();
        let b = g.cell_bounds(IVec3::new(0, 8, 15));
        assert_eq!(b.min.x, f64::NEG_INFINITY);
        assert!(b.max.x.is_finite());
        assert!(b.min.y.is_finite() && b.max.y.is_finite());
        assert_eq!(b.max.z, f64::INFINITY);
    }

    #[test]
    fn coord_range_spans_radius() {
        let g = geometry();
        let (lo, hi) = g.coord_range(DVec3::ZERO, 100.0);
        assert_eq!(lo, IVec3::splat(7));
        assert_eq!(hi, IVec3::splat(9));
    }
}

// ── Membership ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod membership {
    use flock_core::{AgentId, DVec3};

    use super::helpers::{geometry, grid_with};
    use crate::{SpatialError, SpatialGrid};

    #[test]
    fn populate_places_every_agent() {
        let positions = super::helpers::scattered(500, 3);
        let grid = grid_with(&positions);
        assert_eq!(grid.len(), positions.len());
        grid.verify(&positions).unwrap();
    }

    #[test]
    fn insert_and_remove() {
        let grid = SpatialGrid::new(geometry());
        let p = DVec3::new(10.0, 20.0, 30.0);
        grid.insert(AgentId(4), p);
        let cell = grid.geometry().cell_index_of(p);
        assert_eq!(grid.members(cell), vec![AgentId(4)]);
        grid.remove(AgentId(4), p);
        assert_eq!(grid.cell_len(cell), 0);
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "is already in")]
    fn duplicate_insert_panics() {
        let grid = SpatialGrid::new(geometry());
        grid.insert(AgentId(0), DVec3::ZERO);
        grid.insert(AgentId(0), DVec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "is not in")]
    fn removing_absent_agent_panics() {
        let grid = SpatialGrid::new(geometry());
        grid.insert(AgentId(0), DVec3::ZERO);
        grid.remove(AgentId(1), DVec3::ZERO);
    }

    #[test]
    fn relocate_within_cell_is_noop() {
        let positions = vec![DVec3::ZERO];
        let grid = grid_with(&positions);
        assert!(!grid.relocate(AgentId(0), DVec3::ZERO, DVec3::new(10.0, -10.0, 5.0)));
        grid.verify(&[DVec3::new(10.0, -10.0, 5.0)]).unwrap();
    }

    #[test]
    fn relocate_across_cells() {
        let old = DVec3::new(60.0, 0.0, 0.0);
        let new = DVec3::new(70.0, 0.0, 0.0);
        let grid = grid_with(&[old]);
        assert!(grid.relocate(AgentId(0), old, new));
        let g = grid.geometry();
        assert_eq!(grid.cell_len(g.cell_index_of(old)), 0);
        assert_eq!(grid.members(g.cell_index_of(new)), vec![AgentId(0)]);
        grid.verify(&[new]).unwrap();
    }

    #[test]
    fn verify_reports_missing() {
        let positions = vec![DVec3::ZERO, DVec3::ONE];
        let grid = grid_with(&positions);
        grid.remove(AgentId(1), DVec3::ONE);
        assert!(matches!(grid.verify(&positions), Err(SpatialError::Missing(AgentId(1)))));
    }

    #[test]
    fn verify_reports_misplaced() {
        let mut positions = vec![DVec3::ZERO];
        let grid = grid_with(&positions);
        positions[0] = DVec3::new(500.0, 0.0, 0.0);
        assert!(matches!(grid.verify(&positions), Err(SpatialError::Misplaced { .. })));
    }

    #[test]
    fn verify_reports_duplicate() {
        let grid = SpatialGrid::new(geometry());
        grid.insert(AgentId(0), DVec3::ZERO);
        grid.insert(AgentId(0), DVec3::new(500.0, 0.0, 0.0));
        assert!(matches!(
            grid.verify(&[DVec3::ZERO]),
            Err(SpatialError::Duplicate { agent: AgentId(0), .. })
        ));
    }

    #[test]
    fn verify_reports_unknown_agent() {
        let grid = SpatialGrid::new(geometry());
        grid.insert(AgentId(5), DVec3::ZERO);
        assert!(matches!(grid.verify(&[DVec3::ZERO]), Err(SpatialError::UnknownAgent { .. })));
    }
}

// ── Neighbour queries ─────────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use flock_core::{AgentId, DVec3, SimRng};

    use super::helpers::{grid_with, scattered};

    fn brute_force(origin: DVec3, radius: f64, positions: &[DVec3]) -> Vec<AgentId> {
        positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.distance_squared(origin) <= radius * radius)
            .map(|(i, _)| AgentId(i as u32))
            .collect()
    }

    #[test]
    fn matches_brute_force() {
        let positions = scattered(3_000, 21);
        let grid = grid_with(&positions);
        let mut rng = SimRng::new(99);
        let mut found = Vec::new();

        for radius in [25.0, 80.0, 200.0] {
            for _ in 0..200 {
                let origin = rng.point_in_sphere(1050.0);
                grid.neighbors_within(origin, radius, &positions, &mut found);
                found.sort();
                assert_eq!(found, brute_force(origin, radius, &positions), "origin {origin} r {radius}");
            }
        }
    }

    #[test]
    fn queries_from_agent_positions_match() {
        let positions = scattered(1_000, 5);
        let grid = grid_with(&positions);
        let mut found = Vec::new();
        for &origin in &positions {
            grid.neighbors_within(origin, 25.0, &positions, &mut found);
            found.sort();
            assert_eq!(found, brute_force(origin, 25.0, &positions));
        }
    }

    #[test]
    fn includes_self_and_boundary_distance() {
        let positions = vec![DVec3::ZERO, DVec3::new(25.0, 0.0, 0.0), DVec3::new(25.001, 0.0, 0.0)];
        let grid = grid_with(&positions);
        let mut found = Vec::new();
        grid.neighbors_within(DVec3::ZERO, 25.0, &positions, &mut found);
        found.sort();
        assert_eq!(found, vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn finds_agents_clamped_into_edge_cells() {
        // x = 990 lies beyond the last cell's geometric box (ends at 937.5).
        let positions = vec![DVec3::new(990.0, 0.0, 0.0), DVec3::new(1_200.0, 0.0, 0.0)];
        let grid = grid_with(&positions);
        let mut found = Vec::new();
        grid.neighbors_within(DVec3::new(975.0, 0.0, 0.0), 25.0, &positions, &mut found);
        assert_eq!(found, vec![AgentId(0)]);
        grid.neighbors_within(DVec3::new(1_190.0, 0.0, 0.0), 25.0, &positions, &mut found);
        assert_eq!(found, vec![AgentId(1)]);
    }

    #[test]
    fn reuses_output_buffer() {
        let positions = vec![DVec3::ZERO];
        let grid = grid_with(&positions);
        let mut found = vec![AgentId(42)];
        grid.neighbors_within(DVec3::new(500.0, 500.0, 500.0), 10.0, &positions, &mut found);
        assert!(found.is_empty());
    }
}

// ── Concurrent relocation ─────────────────────────────────────────────────────

#[cfg(test)]
mod concurrency {
    use std::thread;

    use flock_core::{AgentId, DVec3, SimRng};

    use super::helpers::grid_with;

    #[test]
    fn parallel_relocations_keep_grid_consistent() {
        // Dense population in a small region so many relocations hit the
        // same handful of cells from different threads.
        let mut rng = SimRng::new(17);
        let old: Vec<DVec3> = (0..4_000).map(|_| rng.point_in_sphere(300.0)).collect();
        let new: Vec<DVec3> = (0..4_000).map(|_| rng.point_in_sphere(300.0)).collect();
        let grid = grid_with(&old);

        let chunk = 500;
        thread::scope(|s| {
            for start in (0..old.len()).step_by(chunk) {
                let grid = &grid;
                let (old, new) = (&old, &new);
                s.spawn(move || {
                    for i in start..(start + chunk).min(old.len()) {
                        grid.relocate(AgentId(i as u32), old[i], new[i]);
                    }
                });
            }
        });

        assert_eq!(grid.len(), new.len());
        grid.verify(&new).unwrap();
    }
}
