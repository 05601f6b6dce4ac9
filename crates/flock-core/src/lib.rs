//! `flock-core` — foundational types for the `flock` simulation workspace.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and few external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `CellId`                                        |
//! | [`math`]   | `DVec3`/`DQuat` re-exports, `lerp_normals`, orientation    |
//! | [`time`]   | `Tick`, `SimClock`                                         |
//! | [`rng`]    | `SimRng` (seeded, used by host-side spawn adapters)        |
//! | [`config`] | `FlockConfig`, `ExecutionMode`, `BoundaryTurn`             |
//! | [`error`]  | `FlockError`, `FlockResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types; needed to load config |

pub mod config;
pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoundaryTurn, ExecutionMode, FlockConfig};
pub use error::{FlockError, FlockResult};
pub use ids::{AgentId, CellId};
pub use math::{DQuat, DVec3, IVec3};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
