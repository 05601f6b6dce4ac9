//! Simulation observer trait for progress reporting and data collection.

use flock_core::{DQuat, DVec3, Tick};

/// Where an agent ended up after a tick, and which way it faces.
///
/// `orientation` rotates the local forward axis (`+X`) onto the agent's
/// heading using yaw and pitch only.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub position:    DVec3,
    pub orientation: DQuat,
}

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    /// Agents stepped this tick.
    pub agents: usize,
    /// Agents whose grid cell changed during the apply phase.
    pub relocations: usize,
    /// Sum over all agents of the field-of-view neighbour count.
    pub relevant_neighbors: usize,
    /// Simulated seconds elapsed once this tick completes.
    pub elapsed_secs: f64,
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust
/// use flock_core::Tick;
/// use flock_sim::{SimObserver, TickStats};
///
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} relocations", stats.relocations);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the snapshot.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the apply phase with every agent's new placement,
    /// indexed by `AgentId`.
    fn on_placements(&mut self, _tick: Tick, _placements: &[Placement]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called once after [`Sim::run`][crate::Sim::run] finishes its last tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
