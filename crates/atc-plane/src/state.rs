//! Lifecycle states, per-plane parameters, and cumulative counters.

use std::fmt;

use crate::{PlaneError, PlaneResult};

/// Where a plane is in its cycle.
///
/// ```text
/// Waiting → TakingOff → Flying → Landing → WaitAfterLanding → Waiting …
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneState {
    /// At the origin gate: holding, then polling for a departure runway.
    #[default]
    Waiting,
    /// Holding a runway at the origin while the takeoff countdown runs.
    TakingOff,
    /// En route, or arrived and polling for a landing runway.
    Flying,
    /// Holding a runway at the destination while the landing countdown runs.
    Landing,
    /// Post-landing hold before the return leg.
    WaitAfterLanding,
}

impl PlaneState {
    /// `true` in the two states that hold a runway.
    #[inline]
    pub fn holds_runway(self) -> bool {
        matches!(self, PlaneState::TakingOff | PlaneState::Landing)
    }

    /// The state the cycle moves to from `self`.
    pub fn successor(self) -> PlaneState {
        match self {
            PlaneState::Waiting          => PlaneState::TakingOff,
            PlaneState::TakingOff        => PlaneState::Flying,
            PlaneState::Flying           => PlaneState::Landing,
            PlaneState::Landing          => PlaneState::WaitAfterLanding,
            PlaneState::WaitAfterLanding => PlaneState::Waiting,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaneState::Waiting          => "waiting",
            PlaneState::TakingOff        => "taking_off",
            PlaneState::Flying           => "flying",
            PlaneState::Landing          => "landing",
            PlaneState::WaitAfterLanding => "wait_after_landing",
        }
    }
}

impl fmt::Display for PlaneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state change produced by one [`Plane::step`][crate::Plane::step].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: PlaneState,
    pub to:   PlaneState,
}

/// Per-plane performance figures, fixed for the whole run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneParams {
    /// Grid cells per tick.  Only `speed.round()` matters for movement.
    pub speed: f64,
    pub takeoff_ticks: u32,
    pub landing_ticks: u32,
    /// Gate hold before the first departure and after every landing.
    pub wait_ticks: u32,
}

impl PlaneParams {
    /// Unit steps taken per tick while flying.
    #[inline]
    pub fn steps_per_tick(&self) -> u32 {
        self.speed.round() as u32
    }

    /// A plane that rounds its speed to zero would never arrive.
    pub fn validate(&self) -> PlaneResult<()> {
        if !self.speed.is_finite() || self.steps_per_tick() == 0 {
            return Err(PlaneError::InvalidParams(format!(
                "speed {} rounds to zero cells per tick",
                self.speed
            )));
        }
        Ok(())
    }
}

/// Cumulative counters read by reporting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneCounters {
    pub takeoffs: u64,
    pub landings: u64,
    /// Ticks spent polling for a departure runway.
    pub takeoff_delay_ticks: u64,
    /// Ticks spent over the destination polling for a landing runway.
    pub landing_delay_ticks: u64,
}
