//! Core error type.
//!
//! Sub-crates define their own error enums for assembly and model failures
//! and wrap `CoreError` where input validation surfaces through them.

use thiserror::Error;

/// Errors raised by `lr-core` input validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: lat {lat}, lon {lon}")]
    CoordinateRange { lat: f64, lon: f64 },

    #[error("unknown member role: {0:?}")]
    UnknownRole(String),
}

/// Shorthand result type for `lr-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
