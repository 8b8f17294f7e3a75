//! Error types for the Bandolier library.
//!
//! Most helpers in this crate are infallible by contract (`words_to_number`,
//! `env`, `to_float`). The few that can reject their input return
//! [`BandolierError`] through the crate-wide [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use bandolier::error::{BandolierError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BandolierError::invalid_argument("Needle must be one or more characters"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Bandolier operations.
#[derive(Error, Debug)]
pub enum BandolierError {
    /// I/O errors (reading config files, probing marker files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller passed an argument the helper cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BandolierError.
pub type Result<T> = std::result::Result<T, BandolierError>;

impl BandolierError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BandolierError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BandolierError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BandolierError::invalid_argument("empty needle");
        assert_eq!(error.to_string(), "Invalid argument: empty needle");

        let error = BandolierError::config("bad file");
        assert_eq!(error.to_string(), "Configuration error: bad file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BandolierError::from(io_error);

        match error {
            BandolierError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
