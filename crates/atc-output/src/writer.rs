//! The `OutputWriter` trait implemented by output backends.

use crate::{OutputResult, PlaneSnapshotRow, TickSummaryRow};

/// Sink for per-tick output.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// since observer hooks cannot return them.
pub trait OutputWriter {
    /// Write a batch of plane snapshots.
    fn write_snapshots(&mut self, rows: &[PlaneSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
