//! Fluent builder for constructing a [`Sim`].

use atc_airport::{AdmissionPolicy, Airport, AirportRegistry, LearnedGate, RunwayBank};
use atc_core::{AdmissionKind, EntityRng, SimConfig, SimRng, WorldConfig};
use atc_plane::{Plane, PlaneParams};
use atc_scenario::{AirportSpec, Scenario, generate_scenario};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, snapshot interval
/// - [`WorldConfig`] — runway spacing, wait ticks, admission policy, and
///   (for generated worlds) grid, counts and parameter means
///
/// # Optional inputs
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.scenario(s)`  | Generated from `WorldConfig` with `config.seed`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), WorldConfig::default())
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    world:    WorldConfig,
    scenario: Option<Scenario>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, world: WorldConfig) -> Self {
        Self { config, world, scenario: None }
    }

    /// Use a fixed scenario instead of generating one.
    ///
    /// The world's grid, count, and mean fields are then ignored; spacing,
    /// wait ticks, and the admission policy still apply.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Validate inputs, build airports and planes, and return a ready-to-run
    /// [`Sim`].
    pub fn build(mut self) -> SimResult<Sim> {
        let generated = self.scenario.is_none();
        let scenario = match self.scenario.take() {
            Some(s) => {
                self.world.learning.validate()?;
                s.validate()?;
                s
            }
            None => generate_scenario(&self.world, &mut SimRng::new(self.config.seed))?,
        };

        // ── Airports ──────────────────────────────────────────────────────
        let mut airports = AirportRegistry::new();
        for spec in &scenario.airports {
            airports.insert(self.airport(spec))?;
        }

        // ── Planes, parked at their origin ────────────────────────────────
        let mut planes = Vec::with_capacity(scenario.planes.len());
        for spec in &scenario.planes {
            let params = PlaneParams {
                speed:         spec.speed,
                takeoff_ticks: spec.takeoff_ticks,
                landing_ticks: spec.landing_ticks,
                wait_ticks:    self.world.wait_ticks,
            };
            params.validate().map_err(|e| SimError::Config(e.to_string()))?;
            let home = airports.position(spec.origin).ok_or_else(|| {
                SimError::Config(format!("{} starts at unknown {}", spec.id, spec.origin))
            })?;
            planes.push(Plane::new(spec.id, spec.origin, spec.destination, home, params));
        }

        info!(
            airports  = airports.len(),
            planes    = planes.len(),
            admission = ?self.world.admission,
            "simulation built"
        );
        let mut sim = Sim::from_parts(self.config, self.world, airports, planes);
        sim.generated = generated;
        Ok(sim)
    }

    fn airport(&self, spec: &AirportSpec) -> Airport {
        let policy = match self.world.admission {
            AdmissionKind::FirstAvailable => AdmissionPolicy::FirstAvailable,
            AdmissionKind::Learned => AdmissionPolicy::Learned(LearnedGate::new(
                self.world.learning,
                EntityRng::new(self.config.seed, spec.id.0),
            )),
        };
        Airport::new(
            spec.id,
            spec.position,
            RunwayBank::new(spec.runways, self.world.runway_spacing),
            policy,
        )
    }
}
