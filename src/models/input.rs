//! Input models for a gratuity calculation.
//!
//! Raw input arrives as optional text, exactly as a form or request body
//! supplies it. Only the validator turns it into a typed [`GratuityInput`].

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one of the three user-supplied inputs.
///
/// Serializes as `"salary"`, `"startDate"` or `"endDate"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    /// The monthly basic salary.
    Salary,
    /// The service start date.
    StartDate,
    /// The service end date.
    EndDate,
}

impl InputField {
    /// Returns the wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            InputField::Salary => "salary",
            InputField::StartDate => "startDate",
            InputField::EndDate => "endDate",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated input as supplied by the caller.
///
/// Every field is optional so that absence can be reported by the validator
/// rather than rejected by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGratuityInput {
    /// The monthly basic salary, as text.
    #[serde(default)]
    pub salary: Option<String>,
    /// The service start date, expected as `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// The service end date, expected as `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl RawGratuityInput {
    /// Creates raw input from string slices.
    ///
    /// # Examples
    ///
    /// ```
    /// use eosg_engine::models::RawGratuityInput;
    ///
    /// let raw = RawGratuityInput::new(Some("3000"), Some("2015-01-01"), None);
    /// assert_eq!(raw.salary.as_deref(), Some("3000"));
    /// assert!(raw.end_date.is_none());
    /// ```
    pub fn new(salary: Option<&str>, start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            salary: salary.map(str::to_string),
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
        }
    }
}

/// Validated, typed input for the gratuity calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratuityInput {
    /// The monthly basic salary. Always positive once validated.
    pub salary: Decimal,
    /// The first day of service.
    pub start_date: NaiveDate,
    /// The last day of service.
    pub end_date: NaiveDate,
}

impl GratuityInput {
    /// Creates a typed input from already-parsed values.
    pub fn new(salary: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            salary,
            start_date,
            end_date,
        }
    }

    /// Returns true if the end date precedes the start date.
    pub fn is_reversed(&self) -> bool {
        self.end_date < self.start_date
    }
}
