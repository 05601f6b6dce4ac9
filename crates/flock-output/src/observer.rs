//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_core::{AgentId, Tick};
use flock_sim::{Placement, SimObserver, TickStats};

use crate::row::{PlacementRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes placements and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Placements are recorded every `placement_interval` ticks (tick 0
/// included); an interval of 0 disables them.  Tick summaries are written
/// every tick.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    placement_interval: u64,
    rows:               Vec<PlacementRow>,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, placement_interval: u64) -> Self {
        Self {
            writer,
            placement_interval,
            rows:       Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn records(&self, tick: Tick) -> bool {
        self.placement_interval > 0 && tick.0.is_multiple_of(self.placement_interval)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_placements(&mut self, tick: Tick, placements: &[Placement]) {
        if placements.is_empty() || !self.records(tick) {
            return;
        }
        self.rows.clear();
        self.rows.extend(
            placements
                .iter()
                .enumerate()
                .map(|(i, p)| PlacementRow::new(AgentId::from_index(i), tick, p)),
        );
        let result = self.writer.write_placements(&self.rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::new(tick, stats));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
