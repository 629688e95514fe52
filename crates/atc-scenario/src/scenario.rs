//! Plain-data description of a world, before any runtime state exists.

use std::collections::HashSet;

use atc_core::{AirportId, GridPos, PlaneId};

use crate::{ScenarioError, ScenarioResult};

/// One airport to build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirportSpec {
    pub id:       AirportId,
    pub position: GridPos,
    pub runways:  u16,
}

/// One plane to build.  It starts parked at `origin`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneSpec {
    pub id:            PlaneId,
    pub origin:        AirportId,
    pub destination:   AirportId,
    pub speed:         f64,
    pub takeoff_ticks: u32,
    pub landing_ticks: u32,
}

/// Airports and fleet, either generated or loaded from CSV.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub airports: Vec<AirportSpec>,
    pub planes:   Vec<PlaneSpec>,
}

impl Scenario {
    pub fn airport(&self, id: AirportId) -> Option<&AirportSpec> {
        self.airports.iter().find(|a| a.id == id)
    }

    /// Declared speeds in fleet order.
    pub fn speeds(&self) -> Vec<f64> {
        self.planes.iter().map(|p| p.speed).collect()
    }

    pub fn takeoff_ticks(&self) -> Vec<u32> {
        self.planes.iter().map(|p| p.takeoff_ticks).collect()
    }

    pub fn landing_ticks(&self) -> Vec<u32> {
        self.planes.iter().map(|p| p.landing_ticks).collect()
    }

    /// Structural checks: unique ids and cells, at least one runway per
    /// airport, and every route joining two distinct known airports.
    pub fn validate(&self) -> ScenarioResult<()> {
        let mut ids = HashSet::with_capacity(self.airports.len());
        let mut cells = HashSet::with_capacity(self.airports.len());
        for a in &self.airports {
            if !ids.insert(a.id) {
                return Err(ScenarioError::DuplicateAirport(a.id));
            }
            if !cells.insert(a.position) {
                return Err(ScenarioError::SharedPosition(a.position));
            }
            if a.runways == 0 {
                return Err(ScenarioError::NoRunways(a.id));
            }
        }

        let mut planes = HashSet::with_capacity(self.planes.len());
        for p in &self.planes {
            if !planes.insert(p.id) {
                return Err(ScenarioError::DuplicatePlane(p.id));
            }
            for airport in [p.origin, p.destination] {
                if !ids.contains(&airport) {
                    return Err(ScenarioError::UnknownAirport { plane: p.id, airport });
                }
            }
            if p.origin == p.destination {
                return Err(ScenarioError::SameEndpoints(p.id));
            }
        }
        Ok(())
    }
}
