//! `atc-output` — end-of-run report and per-tick output for rust_atc.
//!
//! | Item                  | Produces                                           |
//! |-----------------------|----------------------------------------------------|
//! | [`RunReport`]         | max/min/mean summary; `Display` and `Serialize`    |
//! | [`CsvWriter`]         | `plane_snapshots.csv`, `tick_summaries.csv`        |
//! | [`SimOutputObserver`] | drives any [`OutputWriter`] from the tick loop     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use atc_output::{CsvWriter, RunReport, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! println!("{}", RunReport::from_sim(&sim));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use report::{AirportReport, DeclaredStats, QValue, RunReport, Stats};
pub use row::{PlaneSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
