//! # Error Types
//!
//! Structured error types for garden_core. Every failure the planner can hit
//! carries enough context (line number, offending text, file path) for the
//! caller to report it without re-reading the input.
//!
//! ## Example
//!
//! ```rust
//! use garden_core::errors::{GardenError, GardenResult};
//!
//! fn check_price(price: f64) -> GardenResult<()> {
//!     if price < 0.0 {
//!         return Err(GardenError::invalid_input(
//!             "wall_per_metre",
//!             price.to_string(),
//!             "Price cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for garden_core operations
pub type GardenResult<T> = Result<T, GardenError>;

/// Structured error type for planner operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GardenError {
    /// A non-blank, non-comment design line that is not `rectangle W H`
    #[error("illegal garden bed: {line}")]
    MalformedLine { line_number: usize, line: String },

    /// A width or height token that is not a finite number
    #[error("Invalid {field} on line {line_number}: '{value}' - {reason}")]
    InvalidDimension {
        line_number: usize,
        field: String,
        value: String,
        reason: String,
    },

    /// A setting value is invalid (negative price, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl GardenError {
    /// Create a MalformedLine error
    pub fn malformed_line(line_number: usize, line: impl Into<String>) -> Self {
        GardenError::MalformedLine {
            line_number,
            line: line.into(),
        }
    }

    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        line_number: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GardenError::InvalidDimension {
            line_number,
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GardenError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        GardenError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Line number (1-based) of the design line that caused the error, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            GardenError::MalformedLine { line_number, .. }
            | GardenError::InvalidDimension { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GardenError::MalformedLine { .. } => "MALFORMED_LINE",
            GardenError::InvalidDimension { .. } => "INVALID_DIMENSION",
            GardenError::InvalidInput { .. } => "INVALID_INPUT",
            GardenError::FileError { .. } => "FILE_ERROR",
            GardenError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
