//! Error type shared by the aviation-core modules.

use thiserror::Error;

/// Errors raised by aviation-core operations.
///
/// Most lookups in this crate degrade gracefully (unknown airports yield
/// `None`, unknown aircraft fall back to the default profile), so only
/// argument validation, table validation and file I/O end up here.
#[derive(Debug, Error)]
pub enum AviationError {
    #[error("speed must be greater than zero, got {0}")]
    InvalidSpeed(f64),
    #[error("aircraft table has no `default` profile")]
    MissingDefaultProfile,
    #[error("aircraft profile `{key}` is invalid: {reason}")]
    InvalidProfile { key: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AviationError>;
