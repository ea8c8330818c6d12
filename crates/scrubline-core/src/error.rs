//! Error types for Scrubline Core

use thiserror::Error;

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Transport controller error types
///
/// Almost every controller operation treats an unmet precondition as a
/// silent no-op. Only host programming mistakes and bad configuration
/// surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("A media element is already attached to the transport controls")]
    AlreadyAttached,

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Returns true if the error indicates a mistake by the embedding host
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::AlreadyAttached)
    }

    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::AlreadyAttached => "ALREADY_ATTACHED",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::ConfigParse(_) => "CONFIG_PARSE",
        }
    }
}
