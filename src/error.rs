//! Error types for the End-of-Service Gratuity Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`EngineError`] covers faults in loading or interpreting the accrual policy,
//! while [`ValidationError`] is the taxonomy of user-input problems reported
//! through [`ValidationResult`](crate::models::ValidationResult).

use serde::Serialize;
use thiserror::Error;

use crate::models::InputField;

/// The main error type for the End-of-Service Gratuity Engine.
///
/// The calculation itself has no error path once its inputs have been
/// validated; these errors come from loading the accrual policy.
///
/// # Example
///
/// ```
/// use eosg_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The accrual policy parsed but is not internally consistent.
    #[error("Invalid gratuity policy '{policy}': {message}")]
    InvalidPolicy {
        /// The name of the offending policy.
        policy: String,
        /// A description of what made the policy invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A user-input validation failure.
///
/// Each variant belongs to exactly one [`InputField`]; the `Display` output is
/// the message shown next to that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    /// The salary was absent, non-numeric, or not a positive number.
    #[error("Basic Salary must be a valid number.")]
    InvalidSalary,
    /// The start date was absent or not a calendar date.
    #[error("Starting Date is required.")]
    MissingStartDate,
    /// The end date was absent or not a calendar date.
    #[error("Finishing Date is required.")]
    MissingEndDate,
}

impl ValidationError {
    /// Returns the input field this error is reported against.
    pub fn field(self) -> InputField {
        match self {
            ValidationError::InvalidSalary => InputField::Salary,
            ValidationError::MissingStartDate => InputField::StartDate,
            ValidationError::MissingEndDate => InputField::EndDate,
        }
    }

    /// Returns a stable machine-readable code for this error.
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::InvalidSalary => "INVALID_SALARY",
            ValidationError::MissingStartDate => "MISSING_START_DATE",
            ValidationError::MissingEndDate => "MISSING_END_DATE",
        }
    }
}
