use atc_core::AirportId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirportError {
    #[error("{0} is already registered")]
    Duplicate(AirportId),

    #[error("{0} has no runways")]
    NoRunways(AirportId),
}

pub type AirportResult<T> = Result<T, AirportError>;
