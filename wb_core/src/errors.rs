//! # Error Types
//!
//! Structured error types for wb_core.
//!
//! The arithmetic pipeline itself never fails: malformed numbers degrade to
//! zero and divisions by zero degrade to an undetermined value. Errors only
//! come from the outer surfaces, i.e. resolving field names, reading a
//! worksheet input file, and writing an exported sheet.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::errors::{CalcError, CalcResult};
//!
//! fn require_known(name: &str) -> CalcResult<()> {
//!     if name != "basic.weight" {
//!         return Err(CalcError::unknown_field(name));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_known("basic.weight").is_ok());
//! assert_eq!(require_known("nose.weight").unwrap_err().error_code(), "UNKNOWN_FIELD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wb_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for worksheet operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be used
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A field name did not match any worksheet input
    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        CalcError::UnknownField { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
