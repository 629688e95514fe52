//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `plane_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PlaneSnapshotRow, TickSummaryRow};

pub const SNAPSHOTS_FILE: &str = "plane_snapshots.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record([
            "plane_id", "tick", "state", "x", "y", "origin", "destination", "runway",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "tick",
            "transitions",
            "waiting",
            "taking_off",
            "flying",
            "landing",
            "wait_after_landing",
            "runways_in_use",
        ])?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PlaneSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.plane_id.to_string(),
                row.tick.to_string(),
                row.state.as_str().to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.runway.map(|r| r.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.transitions.to_string(),
            row.waiting.to_string(),
            row.taking_off.to_string(),
            row.flying.to_string(),
            row.landing.to_string(),
            row.wait_after_landing.to_string(),
            row.runways_in_use.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
