//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// No file matched the given patterns
    #[error("No files found matching: {0}")]
    NoInputs(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Reading a line failed
    #[error("Read error in {path}: {reason}")]
    ReadError {
        /// Input being read
        path: String,
        /// Underlying failure
        reason: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
