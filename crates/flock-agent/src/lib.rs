//! `flock-agent` — Structure-of-Arrays agent storage for the `flock` workspace.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`buffers`]  | `AgentBuffers` — authoritative positions and headings      |
//! | [`snapshot`] | `TickSnapshot` — previous-tick copy read by steering       |
//! | [`builder`]  | `AgentBuffersBuilder` (fluent construction, spawn adapter) |
//!
//! # Double buffering
//!
//! Every tick reads from a [`TickSnapshot`] and writes into [`AgentBuffers`].
//! The two are distinct allocations, so an agent computing its new heading can
//! only ever see other agents' *previous* headings.  The borrow checker
//! enforces this: the compute phase holds `&TickSnapshot` and
//! `&mut [DVec3]` at the same time.

pub mod buffers;
pub mod builder;
pub mod snapshot;


pub use buffers::AgentBuffers;
pub use builder::AgentBuffersBuilder;
pub use snapshot::TickSnapshot;
