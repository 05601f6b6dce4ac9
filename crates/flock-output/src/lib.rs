//! `flock-output` — simulation output writers.
//!
//! The CSV backend creates two files:
//!
//! | File                   | One row per                      |
//! |------------------------|----------------------------------|
//! | `agent_placements.csv` | agent per recorded tick          |
//! | `tick_summaries.csv`   | tick                             |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, 10);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PlacementRow, TickSummaryRow};
pub use writer::OutputWriter;
