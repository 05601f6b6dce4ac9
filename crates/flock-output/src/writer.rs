//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PlacementRow, TickSummaryRow};

/// A sink for per-agent placements and per-tick summaries.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of placements, all from the same tick.
    fn write_placements(&mut self, rows: &[PlacementRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
