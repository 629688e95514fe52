//! CSV scenario loader.
//!
//! # CSV format
//!
//! Two files, one row per airport and one row per plane.
//!
//! ```csv
//! airport_id,x,y,runways
//! 1,0,0,2
//! 2,12,7,1
//! ```
//!
//! ```csv
//! plane_id,origin,destination,speed,takeoff_ticks,landing_ticks
//! 1,1,2,5,2,3
//! 2,2,1,4.5,3,3
//! ```
//!
//! Rows keep file order; ids need not be contiguous.  The loaded scenario is
//! validated before it is returned.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use atc_core::{AirportId, GridPos, PlaneId};

use crate::{AirportSpec, PlaneSpec, Scenario, ScenarioError, ScenarioResult};

/// File name expected for the airport table by [`load_scenario_dir`].
pub const AIRPORTS_FILE: &str = "airports.csv";
/// File name expected for the fleet table by [`load_scenario_dir`].
pub const FLEET_FILE: &str = "fleet.csv";

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AirportRecord {
    airport_id: u32,
    x:          i32,
    y:          i32,
    runways:    u16,
}

#[derive(Deserialize)]
struct PlaneRecord {
    plane_id:      u32,
    origin:        u32,
    destination:   u32,
    speed:         f64,
    takeoff_ticks: u32,
    landing_ticks: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `airports.csv` and `fleet.csv` from `dir`.
pub fn load_scenario_dir(dir: &Path) -> ScenarioResult<Scenario> {
    let airports = std::fs::File::open(dir.join(AIRPORTS_FILE)).map_err(ScenarioError::Io)?;
    let fleet = std::fs::File::open(dir.join(FLEET_FILE)).map_err(ScenarioError::Io)?;
    load_scenario_reader(airports, fleet)
}

/// Like [`load_scenario_dir`] but accepts any two `Read` sources.
pub fn load_scenario_reader<A: Read, F: Read>(airports: A, fleet: F) -> ScenarioResult<Scenario> {
    let scenario = Scenario {
        airports: load_airports_reader(airports)?,
        planes:   load_fleet_reader(fleet)?,
    };
    scenario.validate()?;
    Ok(scenario)
}

/// Parse the airport table only.  No cross-row validation.
pub fn load_airports_reader<R: Read>(reader: R) -> ScenarioResult<Vec<AirportSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<AirportRecord>()
        .map(|row| {
            let r = row.map_err(|e| ScenarioError::Parse(e.to_string()))?;
            Ok(AirportSpec {
                id:       AirportId(r.airport_id),
                position: GridPos::new(r.x, r.y),
                runways:  r.runways,
            })
        })
        .collect()
}

/// Parse the fleet table only.  No cross-row validation.
pub fn load_fleet_reader<R: Read>(reader: R) -> ScenarioResult<Vec<PlaneSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<PlaneRecord>()
        .map(|row| {
            let r = row.map_err(|e| ScenarioError::Parse(e.to_string()))?;
            if !r.speed.is_finite() || r.speed < 0.0 {
                return Err(ScenarioError::Parse(format!(
                    "plane {}: invalid speed {}",
                    r.plane_id, r.speed
                )));
            }
            Ok(PlaneSpec {
                id:            PlaneId(r.plane_id),
                origin:        AirportId(r.origin),
                destination:   AirportId(r.destination),
                speed:         r.speed,
                takeoff_ticks: r.takeoff_ticks,
                landing_ticks: r.landing_ticks,
            })
        })
        .collect()
}
