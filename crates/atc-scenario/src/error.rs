use atc_core::{AirportId, CoreError, GridPos, PlaneId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("world configuration: {0}")]
    Config(#[from] CoreError),

    #[error("{0} is defined more than once")]
    DuplicateAirport(AirportId),

    #[error("{0} is defined more than once")]
    DuplicatePlane(PlaneId),

    #[error("two airports share grid cell {0}")]
    SharedPosition(GridPos),

    #[error("{0} has no runways")]
    NoRunways(AirportId),

    #[error("{plane} references unknown {airport}")]
    UnknownAirport { plane: PlaneId, airport: AirportId },

    #[error("{0} has the same origin and destination")]
    SameEndpoints(PlaneId),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
