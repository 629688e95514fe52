use atc_core::{AirportId, PlaneId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaneError {
    /// The plane's origin or destination is not in the registry.
    #[error("{plane} refers to {airport}, which is not registered")]
    UnknownAirport {
        plane:   PlaneId,
        airport: AirportId,
    },

    #[error("invalid plane parameters: {0}")]
    InvalidParams(String),
}

pub type PlaneResult<T> = Result<T, PlaneError>;
