//! Error type for horus_viz
//!
//! Conversions themselves never fail; invalid records are dropped. Errors only
//! come from loading configuration and from decoding routed messages.

use thiserror::Error;

/// Main error type for visualization operations
#[derive(Debug, Error)]
pub enum VizError {
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing or validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No converter is registered for the source schema
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),
}

/// Convenience type alias for Results using VizError
pub type VizResult<T> = std::result::Result<T, VizError>;

// ============================================
// From implementations for common error types
// ============================================

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        VizError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for VizError {
    fn from(err: serde_yaml::Error) -> Self {
        VizError::Config(format!("YAML parse error: {}", err))
    }
}
