//! World parameters: grid, fleet, runways, and the admission policy.
//!
//! Defaults reproduce the reference scenario: a 50×50 grid, 4 airports with
//! 1–4 runways each, 8 planes, a 2-tick runway turnaround, and every airport
//! running the learned admission gate.

use crate::{CoreError, CoreResult};

/// Largest grid side whose cells all have `i32` coordinates.
pub const MAX_GRID_SIDE: u32 = i32::MAX as u32;

/// Which admission policy airports are built with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdmissionKind {
    /// Grant the first eligible runway whenever one exists.
    FirstAvailable,
    /// Tabular Q-learning gate in front of the first-eligible scan.
    #[default]
    Learned,
}

/// Hyperparameters of the Q-learning admission gate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LearningParams {
    /// Exploration rate ε: probability of picking a uniformly random action.
    pub epsilon: f64,
    /// Learning rate α.
    pub alpha: f64,
    /// Discount factor γ applied to the bootstrapped next-state value.
    pub gamma: f64,
}

impl Default for LearningParams {
    fn default() -> Self {
        Self { epsilon: 0.1, alpha: 0.2, gamma: 0.95 }
    }
}

impl LearningParams {
    pub fn validate(&self) -> CoreResult<()> {
        check_unit("learning.epsilon", self.epsilon)?;
        check_unit("learning.alpha", self.alpha)?;
        check_unit("learning.gamma", self.gamma)?;
        Ok(())
    }
}

/// Everything needed to generate (or validate) a world before the run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub grid_width:  u32,
    pub grid_height: u32,

    pub airport_count: usize,
    pub plane_count:   usize,

    /// Upper bound of the per-airport runway count (drawn from `1..=max`).
    pub max_runways: u16,

    /// Minimum ticks between two grants of the same runway.
    pub runway_spacing: u64,

    /// Target means fed to the dispersion supplier.
    pub mean_speed:         u32,
    pub mean_takeoff_ticks: u32,
    pub mean_landing_ticks: u32,

    /// Hold at the gate before the first request and after every landing.
    pub wait_ticks: u32,

    pub admission: AdmissionKind,
    pub learning:  LearningParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_width:         50,
            grid_height:        50,
            airport_count:      4,
            plane_count:        8,
            max_runways:        4,
            runway_spacing:     2,
            mean_speed:         5,
            mean_takeoff_ticks: 2,
            mean_landing_ticks: 3,
            wait_ticks:         2,
            admission:          AdmissionKind::Learned,
            learning:           LearningParams::default(),
        }
    }
}

impl WorldConfig {
    /// Reject configurations the scenario generator cannot satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CoreError::Config("grid must be at least 1×1".into()));
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(CoreError::Config(format!(
                "grid {}×{} exceeds the {MAX_GRID_SIDE}-cell coordinate range",
                self.grid_width, self.grid_height
            )));
        }
        if self.airport_count < 2 {
            return Err(CoreError::Config(format!(
                "need at least 2 airports for a route, got {}",
                self.airport_count
            )));
        }
        let cells = self.grid_width as u64 * self.grid_height as u64;
        if self.airport_count as u64 > cells {
            return Err(CoreError::Config(format!(
                "{} airports do not fit on a {}×{} grid",
                self.airport_count, self.grid_width, self.grid_height
            )));
        }
        if self.max_runways == 0 {
            return Err(CoreError::Config("max_runways must be at least 1".into()));
        }
        if self.mean_speed == 0 || self.mean_takeoff_ticks == 0 || self.mean_landing_ticks == 0 {
            return Err(CoreError::Config(
                "mean speed, takeoff and landing times must be positive".into(),
            ));
        }
        self.learning.validate()
    }
}

fn check_unit(field: &'static str, v: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(CoreError::OutOfRange { field, min: 0.0, max: 1.0, got: v })
    }
}
