//! Tabular action-value store for the learned admission gate.

use std::fmt;

use crate::RunwayBank;
use atc_core::Tick;

#[cfg(not(feature = "fx-hash"))]
type EstimateMap = std::collections::HashMap<(StateKey, Action), f64>;
#[cfg(feature = "fx-hash")]
type EstimateMap = rustc_hash::FxHashMap<(StateKey, Action), f64>;

/// State signature: how many runways are eligible right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateKey(pub u16);

impl StateKey {
    /// Observe `bank` at `tick`.
    pub fn observe(bank: &RunwayBank, tick: Tick) -> StateKey {
        StateKey(bank.eligible_count(tick) as u16)
    }
}

/// The two admission actions, in enumeration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Let the opportunity pass; grant nothing.
    Decline = 0,
    /// Grant the first eligible runway, if there is one.
    Grant = 1,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Decline, Action::Grant];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Decline => "decline",
            Action::Grant   => "grant",
        })
    }
}

/// `(StateKey, Action) → estimate`, with unseen pairs reading as `0.0`.
#[derive(Clone, Debug, Default)]
pub struct QTable {
    estimates: EstimateMap,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, state: StateKey, action: Action) -> f64 {
        self.estimates.get(&(state, action)).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, state: StateKey, action: Action, value: f64) {
        self.estimates.insert((state, action), value);
    }

    /// Highest-valued action for `state`; ties go to the earlier action.
    pub fn best_action(&self, state: StateKey) -> Action {
        let mut best = Action::ALL[0];
        for action in Action::ALL.into_iter().skip(1) {
            if self.get(state, action) > self.get(state, best) {
                best = action;
            }
        }
        best
    }

    /// `max_a Q(state, a)`.
    pub fn max_value(&self, state: StateKey) -> f64 {
        Action::ALL
            .into_iter()
            .map(|a| self.get(state, a))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// One temporal-difference step:
    /// `Q(s,a) += alpha * (reward + gamma * max_a' Q(s',a') - Q(s,a))`.
    ///
    /// Returns the new estimate.
    pub fn update(
        &mut self,
        state:      StateKey,
        action:     Action,
        reward:     f64,
        next_state: StateKey,
        alpha:      f64,
        gamma:      f64,
    ) -> f64 {
        let old = self.get(state, action);
        let target = reward + gamma * self.max_value(next_state);
        let new = old + alpha * (target - old);
        self.set(state, action, new);
        new
    }

    /// Number of `(state, action)` pairs visited so far.
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Visited entries sorted by `(state, action)`.
    pub fn entries(&self) -> Vec<(StateKey, Action, f64)> {
        let mut out: Vec<_> = self.estimates.iter().map(|(&(s, a), &v)| (s, a, v)).collect();
        out.sort_by_key(|&(s, a, _)| (s, a));
        out
    }
}
