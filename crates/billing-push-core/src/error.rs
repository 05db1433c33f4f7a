//! Core error types for billing push handling
//!
//! Event handling raises exactly one domain error, `PushError::PayloadFormat`.
//! The remaining variants describe the surroundings: display outcomes carried
//! by the wait-until obligation, host refusals, and brand configuration.

use thiserror::Error;

/// Top-level error type for push handling
#[derive(Debug, Error)]
pub enum PushError {
    /// The push payload could not be parsed as JSON
    ///
    /// No notification is shown for the event. Not retried.
    #[error("Payload format error: {message}")]
    PayloadFormat { message: String },

    /// The platform rejected the display request
    ///
    /// Only ever observed through the event's wait-until obligation.
    #[error("Notification surface error: {0}")]
    Surface(#[from] crate::surface::SurfaceError),

    /// The host refused to extend the event's lifetime
    #[error("Lifetime extension refused: {message}")]
    LifetimeExtension { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PushError {
    /// Whether this error was caused by the payload itself
    pub fn is_payload_format(&self) -> bool {
        matches!(self, PushError::PayloadFormat { .. })
    }
}

impl From<serde_json::Error> for PushError {
    fn from(e: serde_json::Error) -> Self {
        PushError::PayloadFormat {
            message: e.to_string(),
        }
    }
}

/// Brand configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },
}

/// Convenience type alias for push handling results
pub type PushResult<T> = Result<T, PushError>;
