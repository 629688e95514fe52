//! Simulation observer trait for progress reporting and data collection.

use atc_airport::AirportRegistry;
use atc_core::{PlaneId, Tick};
use atc_plane::{Plane, PlaneState};

/// Per-tick aggregate handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Planes that changed state this tick.
    pub transitions:        usize,
    pub waiting:            usize,
    pub taking_off:         usize,
    pub flying:             usize,
    pub landing:            usize,
    pub wait_after_landing: usize,
    /// Runways held across all airports after the tick.
    pub runways_in_use:     usize,
}

impl TickStats {
    pub(crate) fn count(&mut self, state: PlaneState) {
        match state {
            PlaneState::Waiting          => self.waiting += 1,
            PlaneState::TakingOff        => self.taking_off += 1,
            PlaneState::Flying           => self.flying += 1,
            PlaneState::Landing          => self.landing += 1,
            PlaneState::WaitAfterLanding => self.wait_after_landing += 1,
        }
    }

    /// Sum of the per-state counts.
    pub fn planes(&self) -> usize {
        self.waiting + self.taking_off + self.flying + self.landing + self.wait_after_landing
    }
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} runways busy", stats.runways_in_use);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any plane steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called right after a plane changes state, in processing order.
    fn on_transition(&mut self, _tick: Tick, _plane: PlaneId, _from: PlaneState, _to: PlaneState) {}

    /// Called after every plane has stepped.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Read-only access to the fleet and the airports, so output writers can
    /// record state without the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _planes: &[Plane], _airports: &AirportRegistry) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
