//! `flock-spatial` — uniform grid spatial index and radius queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`geometry`] | `GridGeometry` — point ↔ cell mapping, cell boxes, ranges    |
//! | [`grid`]     | `SpatialGrid` — one `Mutex<Vec<AgentId>>` bucket per cell     |
//! | [`query`]    | `for_each_within` / `neighbors_within` radius enumeration    |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Locking
//!
//! Every cell has its own lock, so agents relocating between unrelated cells
//! never contend.  [`SpatialGrid::relocate`] takes the old cell's lock and
//! releases it before taking the new cell's lock; two locks are never held
//! at once, so concurrent relocations cannot deadlock.  Between the two
//! critical sections the agent is in no cell at all.
//!
//! # Contract violations
//!
//! Inserting an agent into a cell that already holds it, or removing an agent
//! from a cell that does not, is a bug in the caller and panics.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod query;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use geometry::GridGeometry;
pub use grid::SpatialGrid;
