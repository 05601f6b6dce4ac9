//! Radius-bounded neighbour enumeration.

use flock_core::{AgentId, DVec3, IVec3};

use crate::SpatialGrid;

impl SpatialGrid {
    /// Call `f(agent, position)` for every agent whose position in
    /// `positions` lies within `radius` of `origin` (inclusive).
    ///
    /// Only cells in the clamped coordinate range of `origin ± radius` are
    /// visited, and of those only cells whose bounds touch the query sphere
    /// are scanned.  Membership comes from the grid; distances are measured
    /// against `positions`, indexed by `AgentId`.  The querying agent is not
    /// excluded.
    ///
    /// Each cell's lock is held while its members are visited, so `f` must
    /// not mutate the grid.
    pub fn for_each_within(
        &self,
        origin: DVec3,
        radius: f64,
        positions: &[DVec3],
        mut f: impl FnMut(AgentId, DVec3),
    ) {
        let geometry = self.geometry();
        let radius_sq = radius * radius;
        let (lo, hi) = geometry.coord_range(origin, radius);

        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    let coords = IVec3::new(x, y, z);
                    if !geometry.cell_bounds(coords).intersects_sphere(origin, radius_sq) {
                        continue;
                    }
                    let members = self.lock(geometry.cell_index(coords));
                    for &agent in members.iter() {
                        let p = positions[agent.index()];
                        if p.distance_squared(origin) <= radius_sq {
                            f(agent, p);
                        }
                    }
                }
            }
        }
    }

    /// Collect every agent within `radius` of `origin` into `out`, clearing
    /// it first.  Keeps `out`'s allocation across calls.
    pub fn neighbors_within(
        &self,
        origin: DVec3,
        radius: f64,
        positions: &[DVec3],
        out: &mut Vec<AgentId>,
    ) {
        out.clear();
        self.for_each_within(origin, radius, positions, |agent, _| out.push(agent));
    }
}
