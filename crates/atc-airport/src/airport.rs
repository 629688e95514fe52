//! The `Airport` — a grid position, a runway bank, and an admission policy.

use atc_core::{AirportId, GridPos, RunwayIndex, Tick};
use tracing::debug;

use crate::{Action, AdmissionPolicy, RunwayBank, StateKey};

/// One airport.  Planes only ever touch it through
/// [`request_runway`][Self::request_runway] and
/// [`release_runway`][Self::release_runway].
#[derive(Clone, Debug)]
pub struct Airport {
    pub id:       AirportId,
    pub name:     String,
    pub position: GridPos,
    runways:      RunwayBank,
    policy:       AdmissionPolicy,
}

impl Airport {
    pub fn new(
        id:       AirportId,
        position: GridPos,
        runways:  RunwayBank,
        policy:   AdmissionPolicy,
    ) -> Self {
        Self { id, name: id.to_string(), position, runways, policy }
    }

    /// Ask for a runway at `tick`.  `None` means "try again next tick".
    pub fn request_runway(&mut self, tick: Tick) -> Option<RunwayIndex> {
        let granted = self.policy.admit(&mut self.runways, tick);
        match granted {
            Some(runway) => debug!(airport = %self.id, %tick, %runway, "runway granted"),
            None         => debug!(airport = %self.id, %tick, "runway request denied"),
        }
        granted
    }

    /// Hand `runway` back.  Unknown indices are ignored.
    pub fn release_runway(&mut self, runway: RunwayIndex) {
        self.runways.release(runway);
        debug!(airport = %self.id, %runway, "runway released");
    }

    pub fn runway_count(&self) -> usize {
        self.runways.len()
    }

    pub fn runways(&self) -> &RunwayBank {
        &self.runways
    }

    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    pub fn is_learning(&self) -> bool {
        self.policy.is_learned()
    }

    /// Learned estimate for `(eligible, action)`; `None` for non-learning airports.
    pub fn q_value(&self, eligible: u16, action: Action) -> Option<f64> {
        self.policy
            .as_learned()
            .map(|gate| gate.table().get(StateKey(eligible), action))
    }
}
