use atc_airport::AirportError;
use atc_core::CoreError;
use atc_plane::PlaneError;
use atc_scenario::ScenarioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// A plane hit a setup bug mid-run.  The run stops at that tick.
    #[error("configuration violation during run: {0}")]
    ConfigViolation(#[from] PlaneError),

    #[error("airport setup error: {0}")]
    Airport(#[from] AirportError),

    #[error("scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
