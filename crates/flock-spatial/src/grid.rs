//! The bucket grid itself.

use std::sync::{Mutex, MutexGuard, PoisonError};

use flock_core::{AgentId, CellId, DVec3};

use crate::{GridGeometry, SpatialError, SpatialResult};

/// Typical agents per occupied cell; buckets start with this capacity.
const BUCKET_CAPACITY: usize = 4;

/// Uniform 3D grid of agent buckets, one lock per cell.
///
/// All mutating operations take `&self`: the grid is `Sync`, and many
/// threads may insert, remove and relocate agents at once as long as each
/// thread works on different agents.  The bucket array is allocated once at
/// construction and never resized.
pub struct SpatialGrid {
    geometry: GridGeometry,
    cells: Vec<Mutex<Vec<AgentId>>>,
}

impl SpatialGrid {
    /// An empty grid with one bucket per cell of `geometry`.
    pub fn new(geometry: GridGeometry) -> Self {
        let cells = (0..geometry.cell_count())
            .map(|_| Mutex::new(Vec::with_capacity(BUCKET_CAPACITY)))
            .collect();
        Self { geometry, cells }
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Insert agent `i` at `positions[i]` for every agent.
    pub fn populate(&self, positions: &[DVec3]) {
        for (i, &p) in positions.iter().enumerate() {
            self.insert(AgentId::from_index(i), p);
        }
    }

    /// Add `agent` to the cell containing `position`.
    ///
    /// # Panics
    /// Panics if the agent is already in that cell.
    pub fn insert(&self, agent: AgentId, position: DVec3) {
        self.insert_into(self.geometry.cell_index_of(position), agent);
    }

    /// Remove `agent` from the cell containing `position`.
    ///
    /// # Panics
    /// Panics if the agent is not in that cell.
    pub fn remove(&self, agent: AgentId, position: DVec3) {
        self.remove_from(self.geometry.cell_index_of(position), agent);
    }

    /// Move `agent` from the cell of `old` to the cell of `new`.
    ///
    /// Returns `false` without locking anything when both positions map to
    /// the same cell.  Otherwise the old cell is locked, the agent removed,
    /// the lock released, and only then is the new cell locked for the
    /// insert.
    pub fn relocate(&self, agent: AgentId, old: DVec3, new: DVec3) -> bool {
        let from = self.geometry.cell_index_of(old);
        let to = self.geometry.cell_index_of(new);
        if from == to {
            return false;
        }
        self.remove_from(from, agent);
        self.insert_into(to, agent);
        true
    }

    /// Number of agents currently in `cell`.
    pub fn cell_len(&self, cell: CellId) -> usize {
        self.lock(cell).len()
    }

    /// Copy of the agents currently in `cell`.
    pub fn members(&self, cell: CellId) -> Vec<AgentId> {
        self.lock(cell).clone()
    }

    /// Total number of memberships across all cells.
    pub fn len(&self) -> usize {
        self.cells.iter().map(|c| lock_bucket(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every agent `i` is in exactly one cell and that the cell is
    /// the one containing `positions[i]`.
    ///
    /// Only meaningful between ticks; during a concurrent relocation pass an
    /// agent may briefly be in no cell.
    pub fn verify(&self, positions: &[DVec3]) -> SpatialResult<()> {
        let mut seen: Vec<Option<CellId>> = vec![None; positions.len()];

        for (i, bucket) in self.cells.iter().enumerate() {
            let cell = CellId(i as u32);
            for &agent in lock_bucket(bucket).iter() {
                let Some(slot) = seen.get_mut(agent.index()) else {
                    return Err(SpatialError::UnknownAgent { agent, cell });
                };
                if let Some(first) = *slot {
                    return Err(SpatialError::Duplicate { agent, first, second: cell });
                }
                *slot = Some(cell);

                let expected = self.geometry.cell_index_of(positions[agent.index()]);
                if expected != cell {
                    return Err(SpatialError::Misplaced { agent, found: cell, expected });
                }
            }
        }

        match seen.iter().position(Option::is_none) {
            Some(i) => Err(SpatialError::Missing(AgentId::from_index(i))),
            None => Ok(()),
        }
    }

    // ── Locked bucket access ──────────────────────────────────────────────

    #[inline]
    pub(crate) fn lock(&self, cell: CellId) -> MutexGuard<'_, Vec<AgentId>> {
        lock_bucket(&self.cells[cell.index()])
    }

    fn insert_into(&self, cell: CellId, agent: AgentId) {
        let mut members = self.lock(cell);
        assert!(!members.contains(&agent), "{agent} is already in {cell}");
        members.push(agent);
    }

    fn remove_from(&self, cell: CellId, agent: AgentId) {
        let mut members = self.lock(cell);
        match members.iter().position(|&a| a == agent) {
            Some(slot) => {
                members.swap_remove(slot);
            }
            None => panic!("{agent} is not in {cell}"),
        }
    }
}

/// A poisoned bucket means another thread already panicked on a contract
/// violation; the bucket contents are still structurally valid.
#[inline]
fn lock_bucket(bucket: &Mutex<Vec<AgentId>>) -> MutexGuard<'_, Vec<AgentId>> {
    bucket.lock().unwrap_or_else(PoisonError::into_inner)
}
