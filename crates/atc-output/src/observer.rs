//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use atc_airport::AirportRegistry;
use atc_core::Tick;
use atc_plane::Plane;
use atc_sim::{SimObserver, TickStats};

use crate::row::{PlaneSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes plane snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
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
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow {
            tick:               tick.0,
            transitions:        stats.transitions as u64,
            waiting:            stats.waiting as u64,
            taking_off:         stats.taking_off as u64,
            flying:             stats.flying as u64,
            landing:            stats.landing as u64,
            wait_after_landing: stats.wait_after_landing as u64,
            runways_in_use:     stats.runways_in_use as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, planes: &[Plane], _airports: &AirportRegistry) {
        let rows: Vec<PlaneSnapshotRow> = planes
            .iter()
            .map(|p| {
                let pos = p.position();
                PlaneSnapshotRow {
                    plane_id:    p.id.0,
                    tick:        tick.0,
                    state:       p.state(),
                    x:           pos.x,
                    y:           pos.y,
                    origin:      p.origin().0,
                    destination: p.destination().0,
                    runway:      p.runway().map(|r| r.0),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
