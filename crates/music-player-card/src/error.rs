//! Error types for card configuration

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A timing value that must be positive is zero
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    /// A numeric value outside its allowed range
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
