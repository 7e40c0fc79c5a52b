//! Validation result model.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::InputField;
use crate::error::ValidationError;

/// The outcome of validating raw gratuity input.
///
/// `valid` is true exactly when no field produced an error. Serializes as
/// `{"valid": bool, "fieldErrors": {"salary": "<message>", ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    valid: bool,
    #[serde(serialize_with = "serialize_messages")]
    field_errors: BTreeMap<InputField, ValidationError>,
}

impl ValidationResult {
    /// Builds a result from the errors found, keyed by their field.
    ///
    /// # Examples
    ///
    /// ```
    /// use eosg_engine::error::ValidationError;
    /// use eosg_engine::models::{InputField, ValidationResult};
    ///
    /// let result = ValidationResult::from_errors([ValidationError::MissingEndDate]);
    /// assert!(!result.is_valid());
    /// assert_eq!(result.error_for(InputField::EndDate), Some(ValidationError::MissingEndDate));
    /// ```
    pub fn from_errors(errors: impl IntoIterator<Item = ValidationError>) -> Self {
        let field_errors: BTreeMap<InputField, ValidationError> = errors
            .into_iter()
            .map(|error| (error.field(), error))
            .collect();
        Self {
            valid: field_errors.is_empty(),
            field_errors,
        }
    }

    /// Returns true if every field passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the error reported for a field, if any.
    pub fn error_for(&self, field: InputField) -> Option<ValidationError> {
        self.field_errors.get(&field).copied()
    }

    /// Returns the user-facing message for a field, if it failed.
    pub fn message_for(&self, field: InputField) -> Option<String> {
        self.error_for(field).map(|error| error.to_string())
    }

    /// Returns all reported errors, keyed by field.
    pub fn field_errors(&self) -> &BTreeMap<InputField, ValidationError> {
        &self.field_errors
    }
}

fn serialize_messages<S: Serializer>(
    errors: &BTreeMap<InputField, ValidationError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(errors.iter().map(|(field, error)| (field, error.to_string())))
}
