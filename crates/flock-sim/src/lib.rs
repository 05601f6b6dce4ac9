//! `flock-sim` — tick scheduler for the flock simulation.
//!
//! # Three-phase tick
//!
//! ```text
//! for each tick:
//!   ① Snapshot — copy every position and heading into the TickSnapshot.
//!   ② Compute  — per agent: gather field-of-view neighbours from the grid,
//!                call SteeringModel::steer, write the agent's own heading
//!                slot.  Reads only the snapshot.
//!   ③ Apply    — per agent: advance the position along the new heading,
//!                emit a Placement, move the agent between grid cells.
//! ```
//!
//! Each phase finishes for every agent before the next one starts.  Both
//! execution modes run the same per-agent functions; `Parallel` fans each
//! phase out over Rayon, `Serial` walks agents in id order.
//!
//! # Quick-start
//!
//! ```rust,no_run
//! use flock_agent::AgentBuffersBuilder;
//! use flock_behavior::ClassicFlocking;
//! use flock_core::FlockConfig;
//! use flock_sim::{NoopObserver, SimBuilder};
//!
//! # fn main() -> flock_sim::SimResult<()> {
//! let config = FlockConfig::default();
//! let agents = AgentBuffersBuilder::new(config.agent_count)
//!     .scatter_in_sphere(config.bounds_radius * 0.5, config.seed)
//!     .build();
//! let mut sim = SimBuilder::new(config, agents, ClassicFlocking).build()?;
//! sim.run(&mut NoopObserver)?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, Placement, SimObserver, TickStats};
pub use sim::Sim;
