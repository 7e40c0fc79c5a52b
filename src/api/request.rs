//! Request types for the End-of-Service Gratuity Engine API.
//!
//! This module defines the JSON request body shared by the `/validate` and
//! `/calculate` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::RawGratuityInput;

/// Request body for the `/validate` and `/calculate` endpoints.
///
/// All fields are optional at the JSON level so that missing or malformed
/// values reach the validator and come back as field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The monthly basic salary, as a JSON number or a numeric string.
    #[serde(default)]
    pub salary: Option<Value>,
    /// The service start date (`YYYY-MM-DD`).
    #[serde(default)]
    pub start_date: Option<String>,
    /// The service end date (`YYYY-MM-DD`).
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<CalculationRequest> for RawGratuityInput {
    fn from(req: CalculationRequest) -> Self {
        Self {
            salary: req.salary.and_then(salary_text),
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

fn salary_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
