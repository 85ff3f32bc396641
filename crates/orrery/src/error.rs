//! Construction-time errors.
//!
//! Every runtime operation on a built `World` is total; only turning a
//! configuration into a world can fail.

use thiserror::Error;

/// Result type for configuration and registry construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a configuration is rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("body name must not be empty")]
    EmptyName,

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{name}: orbital period must be positive, got {period}")]
    NonPositivePeriod { name: String, period: f64 },

    #[error("{name}: {field} must be finite")]
    NonFinite { name: String, field: &'static str },

    #[error("{name}: {field} must not be negative, got {value}")]
    NegativeSize {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("{field} must be positive, got {value}")]
    InvalidTiming { field: &'static str, value: f64 },

    #[error("world must have positive size, got {width}x{height}")]
    InvalidWorld { width: f64, height: f64 },

    #[error("pause key must be a letter, got {0:?}")]
    InvalidPauseKey(char),
}
