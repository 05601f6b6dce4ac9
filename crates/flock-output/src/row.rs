//! Plain data row types written by output backends.

use flock_core::{AgentId, Tick};
use flock_sim::{Placement, TickStats};

/// One agent's position and orientation at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub z:        f64,
    pub qx:       f64,
    pub qy:       f64,
    pub qz:       f64,
    pub qw:       f64,
}

impl PlacementRow {
    pub fn new(agent: AgentId, tick: Tick, placement: &Placement) -> Self {
        let p = placement.position;
        let q = placement.orientation;
        Self {
            agent_id: agent.0,
            tick:     tick.0,
            x: p.x, y: p.y, z: p.z,
            qx: q.x, qy: q.y, qz: q.z, qw: q.w,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:               u64,
    pub elapsed_secs:       f64,
    pub relocations:        u64,
    pub relevant_neighbors: u64,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, stats: &TickStats) -> Self {
        Self {
            tick:               tick.0,
            elapsed_secs:       stats.elapsed_secs,
            relocations:        stats.relocations as u64,
            relevant_neighbors: stats.relevant_neighbors as u64,
        }
    }
}
