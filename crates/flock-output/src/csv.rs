//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_placements.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PlacementRow, TickSummaryRow};

pub const PLACEMENTS_FILE: &str = "agent_placements.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    placements: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut placements = Writer::from_path(dir.join(PLACEMENTS_FILE))?;
        placements.write_record(["agent_id", "tick", "x", "y", "z", "qx", "qy", "qz", "qw"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["tick", "elapsed_secs", "relocations", "relevant_neighbors"])?;

        Ok(Self { placements, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_placements(&mut self, rows: &[PlacementRow]) -> OutputResult<()> {
        for row in rows {
            self.placements.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.qx.to_string(),
                row.qy.to_string(),
                row.qz.to_string(),
                row.qw.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.relocations.to_string(),
            row.relevant_neighbors.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.placements.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
