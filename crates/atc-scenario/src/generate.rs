//! Random world generation from a [`WorldConfig`].

use std::collections::HashSet;

use atc_core::{AirportId, GridPos, PlaneId, SimRng, WorldConfig};
use tracing::debug;

use crate::dispersion::{DEFAULT_SPREAD, dispersed_values};
use crate::{AirportSpec, PlaneSpec, Scenario, ScenarioResult};

/// Draw a world: airports on distinct cells with `1..=max_runways` runways,
/// then a fleet with dispersed parameters and random two-airport routes.
///
/// Ids are 1-based.  The draw order is fixed, so the same `rng` seed always
/// yields the same scenario.
pub fn generate_scenario(world: &WorldConfig, rng: &mut SimRng) -> ScenarioResult<Scenario> {
    world.validate()?;

    let positions = distinct_positions(world, rng);
    let airports: Vec<AirportSpec> = positions
        .into_iter()
        .enumerate()
        .map(|(i, position)| AirportSpec {
            id: AirportId(i as u32 + 1),
            position,
            runways: rng.gen_range(1..=world.max_runways),
        })
        .collect();

    let n = world.plane_count;
    let speeds = dispersed_values(n, world.mean_speed, DEFAULT_SPREAD, rng);
    let takeoffs = dispersed_values(n, world.mean_takeoff_ticks, DEFAULT_SPREAD, rng);
    let landings = dispersed_values(n, world.mean_landing_ticks, DEFAULT_SPREAD, rng);

    let ids: Vec<AirportId> = airports.iter().map(|a| a.id).collect();
    let mut planes = Vec::with_capacity(n);
    for i in 0..n {
        // `validate` guarantees at least two airports.
        let route = rng.sample(&ids, 2);
        planes.push(PlaneSpec {
            id:            PlaneId(i as u32 + 1),
            origin:        route[0],
            destination:   route[1],
            speed:         speeds[i] as f64,
            takeoff_ticks: takeoffs[i],
            landing_ticks: landings[i],
        });
    }

    debug!(airports = airports.len(), planes = planes.len(), "scenario generated");
    Ok(Scenario { airports, planes })
}

fn distinct_positions(world: &WorldConfig, rng: &mut SimRng) -> Vec<GridPos> {
    // `validate` keeps both sides within `i32`.
    let w = world.grid_width as i32;
    let h = world.grid_height as i32;
    let mut seen = HashSet::with_capacity(world.airport_count);
    let mut out = Vec::with_capacity(world.airport_count);
    while out.len() < world.airport_count {
        let p = GridPos::new(rng.gen_range(0..w), rng.gen_range(0..h));
        if seen.insert(p) {
            out.push(p);
        }
    }
    out
}
