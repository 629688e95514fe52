//! The airport registry shared by the scheduler and every plane.

use std::collections::BTreeMap;

use atc_core::{AirportId, GridPos};

use crate::{Airport, AirportError, AirportResult};

/// `AirportId → Airport`, iterated in ascending id order.
#[derive(Clone, Debug, Default)]
pub struct AirportRegistry {
    airports: BTreeMap<AirportId, Airport>,
}

impl AirportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `airport`.  Ids must be unique and every airport needs a runway.
    pub fn insert(&mut self, airport: Airport) -> AirportResult<()> {
        if airport.runway_count() == 0 {
            return Err(AirportError::NoRunways(airport.id));
        }
        if self.airports.contains_key(&airport.id) {
            return Err(AirportError::Duplicate(airport.id));
        }
        self.airports.insert(airport.id, airport);
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AirportId) -> Option<&mut Airport> {
        self.airports.get_mut(&id)
    }

    pub fn contains(&self, id: AirportId) -> bool {
        self.airports.contains_key(&id)
    }

    pub fn position(&self, id: AirportId) -> Option<GridPos> {
        self.get(id).map(|a| a.position)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = AirportId> + '_ {
        self.airports.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }
}

impl FromIterator<Airport> for AirportRegistry {
    /// Later duplicates replace earlier ones; use [`AirportRegistry::insert`]
    /// when duplicates must be rejected.
    fn from_iter<I: IntoIterator<Item = Airport>>(iter: I) -> Self {
        Self {
            airports: iter.into_iter().map(|a| (a.id, a)).collect(),
        }
    }
}
