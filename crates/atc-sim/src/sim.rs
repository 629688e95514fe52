//! The `Sim` struct and its tick loop.

use atc_airport::AirportRegistry;
use atc_core::{SimClock, SimConfig, Tick, WorldConfig};
use atc_plane::Plane;
use tracing::{debug, error, info};

use crate::{SimObserver, SimResult, TickStats};

/// The main simulation runner.
///
/// Each tick steps every plane once, in fleet order.  A plane's runway
/// request sees every grant and release made by the planes before it in the
/// same tick, so fleet order is the tie-break for same-tick contention.
///
/// Create via [`SimBuilder`][crate::SimBuilder], or assemble by hand with
/// [`Sim::from_parts`].
pub struct Sim {
    /// Run length, seed, and snapshot cadence.
    pub config: SimConfig,

    /// World parameters the fleet and airports were built from.
    pub world: WorldConfig,

    /// `true` when airports and fleet were drawn from `world`.  A supplied
    /// scenario only takes spacing, wait ticks and admission from it; its
    /// grid and parameter means do not describe the fleet.
    pub generated: bool,

    /// Simulation clock.  One tick is one simulated minute.
    pub clock: SimClock,

    /// Every airport, keyed by id.
    pub airports: AirportRegistry,

    /// The fleet, in processing order.
    pub planes: Vec<Plane>,
}

impl Sim {
    /// Assemble a sim from already-built parts.  No cross-checks are made;
    /// a plane pointing at a missing airport fails on its first step.
    /// The result counts as a supplied (not generated) world.
    pub fn from_parts(
        config:   SimConfig,
        world:    WorldConfig,
        airports: AirportRegistry,
        planes:   Vec<Plane>,
    ) -> Self {
        Self { clock: config.make_clock(), config, world, generated: false, airports, planes }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// # Errors
    ///
    /// [`SimError::ConfigViolation`][crate::SimError::ConfigViolation] if a
    /// plane references an airport that does not exist.  The run halts at
    /// that tick; `on_sim_end` is not called.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            airports = self.airports.len(),
            planes   = self.planes.len(),
            ticks    = self.config.total_ticks,
            "simulation started"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(final_tick = %self.clock.current_tick, "simulation finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;

        observer.on_tick_start(now);
        let stats = self.process_tick(now, observer)?;
        observer.on_tick_end(now, &stats);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.planes, &self.airports);
        }

        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickStats> {
        let mut stats = TickStats::default();

        for plane in &mut self.planes {
            let step = plane.step(&mut self.airports, now).inspect_err(|e| {
                error!(%now, plane = %plane.id, error = %e, "run halted");
            })?;
            if let Some(t) = step {
                debug!(%now, plane = %plane.id, from = %t.from, to = %t.to, "transition");
                observer.on_transition(now, plane.id, t.from, t.to);
                stats.transitions += 1;
            }
            stats.count(plane.state());
        }

        stats.runways_in_use = self.airports.iter().map(|a| a.runways().in_use()).sum();
        Ok(stats)
    }
}
