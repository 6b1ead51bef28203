//! Error types for the causal discovery toolkit.

use thiserror::Error;

/// Result type alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the toolkit.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid FDR policy: {0}")]
    InvalidPolicy(String),

    // Argument and identity errors (20-29)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed fact: {0}")]
    MalformedFact(String),

    // Numerical errors (30-39)
    #[error("multiple testing correction failed: {0}")]
    MultipleTesting(String),

    // Runtime setup errors (50-59)
    #[error("logging setup failed: {0}")]
    Logging(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidPolicy(_) => 11,
            Error::InvalidArgument(_) => 20,
            Error::MalformedFact(_) => 21,
            Error::MultipleTesting(_) => 30,
            Error::Logging(_) => 50,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
