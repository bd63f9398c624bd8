//! Error types for the control system
use thiserror::Error;

/// Control system errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// Invalid sender configuration, raised before any packet is sent
    #[error("Config error: {0}")]
    ConfigError(String),

    /// The UDP write failed or was truncated
    #[error("Transport error: {0}")]
    TransportError(#[source] std::io::Error),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
