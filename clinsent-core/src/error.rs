//! Error types for configuration and construction

use thiserror::Error;

/// Error type for classifier construction
///
/// Classification itself never fails; every variant here originates from
/// building or loading a configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TOML document could not be parsed into a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Infrastructure error (I/O, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for construction operations
pub type Result<T> = std::result::Result<T, Error>;
