//! Core error types for the dividend tracker.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! errors (filesystem, serde) are converted to these types by the storage
//! layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for holding store operations.
///
/// This enum uses `String` for all error details, allowing store
/// implementations to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading from or writing to the backing store failed.
    #[error("Store I/O failed: {0}")]
    Io(String),

    /// The holding set could not be serialized.
    #[error("Failed to serialize holdings: {0}")]
    Serialization(String),

    /// Stored data could not be decoded into holdings.
    #[error("Failed to deserialize holdings: {0}")]
    Deserialization(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
