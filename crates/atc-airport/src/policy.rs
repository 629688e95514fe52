//! Admission policies — who decides whether an eligible runway is granted.
//!
//! Both variants share [`RunwayBank::request`] for the actual grant, so the
//! "first eligible runway" choice is identical; the learned gate only decides
//! *whether* to act on it.

use atc_core::{EntityRng, LearningParams, RunwayIndex, Tick};
use tracing::trace;

use crate::{Action, QTable, RunwayBank, StateKey};

/// Reward for granting a runway when one was eligible.
pub const GRANT_REWARD: f64 = 1.0;
/// Reward for every other outcome (declined, or nothing eligible).
pub const DENY_REWARD: f64 = -1.0;

/// Decision layer in front of an airport's runway bank.
#[derive(Clone, Debug)]
pub enum AdmissionPolicy {
    /// Always grant the first eligible runway.
    FirstAvailable,
    /// Epsilon-greedy Q-learning gate.
    Learned(LearnedGate),
}

impl AdmissionPolicy {
    /// Decide on one request at `tick`, mutating `bank` if a runway is granted.
    pub fn admit(&mut self, bank: &mut RunwayBank, tick: Tick) -> Option<RunwayIndex> {
        match self {
            AdmissionPolicy::FirstAvailable => bank.request(tick),
            AdmissionPolicy::Learned(gate)  => gate.admit(bank, tick),
        }
    }

    pub fn is_learned(&self) -> bool {
        matches!(self, AdmissionPolicy::Learned(_))
    }

    pub fn as_learned(&self) -> Option<&LearnedGate> {
        match self {
            AdmissionPolicy::Learned(gate) => Some(gate),
            AdmissionPolicy::FirstAvailable => None,
        }
    }
}

/// Running totals of the gate's decisions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateStats {
    pub decisions:    u64,
    pub explorations: u64,
    pub grants:       u64,
    /// Grant chosen but no runway was eligible.
    pub empty_grants: u64,
    pub declines:     u64,
}

/// Tabular Q-learning admission gate owned by one airport.
///
/// State is the number of eligible runways, the action is
/// [`Action::Decline`] or [`Action::Grant`], and the reward is
/// [`GRANT_REWARD`] when a runway was handed out, [`DENY_REWARD`] otherwise.
#[derive(Clone, Debug)]
pub struct LearnedGate {
    params: LearningParams,
    table:  QTable,
    rng:    EntityRng,
    stats:  GateStats,
}

impl LearnedGate {
    pub fn new(params: LearningParams, rng: EntityRng) -> Self {
        Self {
            params,
            table: QTable::new(),
            rng,
            stats: GateStats::default(),
        }
    }

    pub fn params(&self) -> &LearningParams {
        &self.params
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn stats(&self) -> GateStats {
        self.stats
    }

    /// Epsilon-greedy choice for `state`.
    pub fn select_action(&mut self, state: StateKey) -> Action {
        if self.rng.gen_bool(self.params.epsilon) {
            self.stats.explorations += 1;
            Action::ALL[self.rng.gen_range(0..Action::ALL.len())]
        } else {
            self.table.best_action(state)
        }
    }

    /// Choose, grant (or not), and learn from one request.
    pub fn admit(&mut self, bank: &mut RunwayBank, tick: Tick) -> Option<RunwayIndex> {
        let state = StateKey::observe(bank, tick);
        let action = self.select_action(state);

        // Observed before the grant below takes effect, so it almost always
        // equals `state`.  Not a textbook post-transition state; the update
        // degenerates toward a per-state bandit.
        let next_state = StateKey::observe(bank, tick);

        let granted = match action {
            Action::Grant   => bank.request(tick),
            Action::Decline => None,
        };
        let reward = if granted.is_some() { GRANT_REWARD } else { DENY_REWARD };

        let updated = self.table.update(
            state,
            action,
            reward,
            next_state,
            self.params.alpha,
            self.params.gamma,
        );
        trace!(%tick, state = state.0, %action, reward, q = updated, "admission estimate updated");

        self.stats.decisions += 1;
        match (action, granted) {
            (Action::Grant, Some(_)) => self.stats.grants += 1,
            (Action::Grant, None)    => self.stats.empty_grants += 1,
            (Action::Decline, _)     => self.stats.declines += 1,
        }
        granted
    }
}
