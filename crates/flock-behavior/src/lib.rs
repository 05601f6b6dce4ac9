//! `flock-behavior` — how agents choose their next heading.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`params`]     | `SteeringParams` — radii and rule strengths for one tick    |
//! | [`context`]    | `SteerContext<'a>` — read-only previous-tick snapshot        |
//! | [`perception`] | field-of-view filter, `gather_relevant` neighbour lookup    |
//! | [`rules`]      | `cohere`, `avoid`, `align`, `constrain`                     |
//! | [`model`]      | `SteeringModel` trait                                       |
//! | [`classic`]    | `ClassicFlocking` — the four rules in order                 |
//! | [`noop`]       | `NoopSteering` — agents keep their heading                  |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                        |
//!
//! # Design notes
//!
//! Every rule mutates a per-agent working heading in place and reads all
//! other state (positions, neighbour headings) from the [`SteerContext`],
//! which borrows the previous tick's snapshot.  Steering one agent therefore
//! never observes another agent's new heading, and the scheduler is free to
//! steer agents in any order or in parallel.

pub mod classic;
pub mod context;
pub mod error;
pub mod model;
pub mod noop;
pub mod params;
pub mod perception;
pub mod rules;

#[cfg(test)]
mod tests;

pub use classic::ClassicFlocking;
pub use context::SteerContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::SteeringModel;
pub use noop::NoopSteering;
pub use params::SteeringParams;
pub use perception::{gather_relevant, is_relevant};
