//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a
//! configuration problem bubbles up from here.

use thiserror::Error;

/// Errors raised while validating core configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{field} must be in [{min}, {max}], got {got}")]
    OutOfRange {
        field: &'static str,
        min:   f64,
        max:   f64,
        got:   f64,
    },
}

/// Shorthand result type for `atc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
