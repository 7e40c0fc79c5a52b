//! Input validation for gratuity calculations.
//!
//! Every field is checked independently and all failures are reported in a
//! single pass. A reversed date range is not a validation failure; it is
//! flagged in the calculation's audit trace instead.

use crate::error::ValidationError;
use crate::models::{GratuityInput, RawGratuityInput, ValidationResult};

use super::parsers::{parse_date, parse_salary};

/// Validates raw salary and date text.
///
/// # Arguments
///
/// * `salary` - The monthly basic salary
/// * `start_date` - The service start date as `YYYY-MM-DD`
/// * `end_date` - The service end date as `YYYY-MM-DD`
///
/// # Returns
///
/// A [`ValidationResult`] holding one error per offending field:
/// - `InvalidSalary` if the salary is absent, non-numeric or not positive
/// - `MissingStartDate` if the start date is absent or not a calendar date
/// - `MissingEndDate` if the end date is absent or not a calendar date
///
/// # Examples
///
/// ```
/// use eosg_engine::validate;
/// use eosg_engine::error::ValidationError;
/// use eosg_engine::models::InputField;
///
/// let result = validate(Some("abc"), None, Some("2022-01-01"));
/// assert!(!result.is_valid());
/// assert_eq!(result.error_for(InputField::Salary), Some(ValidationError::InvalidSalary));
/// assert_eq!(result.error_for(InputField::StartDate), Some(ValidationError::MissingStartDate));
/// assert_eq!(result.error_for(InputField::EndDate), None);
/// ```
pub fn validate(
    salary: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> ValidationResult {
    match check(salary, start_date, end_date) {
        Ok(_) => ValidationResult::from_errors([]),
        Err(result) => result,
    }
}

/// Validates a [`RawGratuityInput`].
pub fn validate_input(raw: &RawGratuityInput) -> ValidationResult {
    validate(
        raw.salary.as_deref(),
        raw.start_date.as_deref(),
        raw.end_date.as_deref(),
    )
}

/// Validates raw input and, when every field passes, returns it typed.
///
/// # Examples
///
/// ```
/// use eosg_engine::parse_input;
/// use eosg_engine::models::RawGratuityInput;
///
/// let raw = RawGratuityInput::new(Some("3000"), Some("2015-01-01"), Some("2022-01-01"));
/// let input = parse_input(&raw).unwrap();
/// assert_eq!(input.salary.to_string(), "3000");
/// ```
pub fn parse_input(raw: &RawGratuityInput) -> Result<GratuityInput, ValidationResult> {
    check(
        raw.salary.as_deref(),
        raw.start_date.as_deref(),
        raw.end_date.as_deref(),
    )
}

fn check(
    salary: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<GratuityInput, ValidationResult> {
    let salary = parse_salary(salary);
    let start_date = parse_date(start_date);
    let end_date = parse_date(end_date);

    match (salary, start_date, end_date) {
        (Some(salary), Some(start_date), Some(end_date)) => {
            Ok(GratuityInput::new(salary, start_date, end_date))
        }
        _ => {
            let errors = [
                salary.is_none().then_some(ValidationError::InvalidSalary),
                start_date
                    .is_none()
                    .then_some(ValidationError::MissingStartDate),
                end_date.is_none().then_some(ValidationError::MissingEndDate),
            ];
            Err(ValidationResult::from_errors(errors.into_iter().flatten()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputField;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn test_valid_input_passes() {
        let result = validate(Some("3000"), Some("2015-01-01"), Some("2022-01-01"));
        assert!(result.is_valid());
        assert!(result.field_errors().is_empty());
    }

    #[test]
    fn test_all_fields_missing_reports_all_three() {
        let result = validate(None, None, None);
        assert!(!result.is_valid());
        assert_eq!(
            result.error_for(InputField::Salary),
            Some(ValidationError::InvalidSalary)
        );
        assert_eq!(
            result.error_for(InputField::StartDate),
            Some(ValidationError::MissingStartDate)
        );
        assert_eq!(
            result.error_for(InputField::EndDate),
            Some(ValidationError::MissingEndDate)
        );
    }

    #[test]
    fn test_errors_are_not_short_circuited() {
        let result = validate(Some("-1"), Some("2015-01-01"), Some("not a date"));
        assert_eq!(result.field_errors().len(), 2);
        assert!(result.error_for(InputField::StartDate).is_none());
    }

    #[test]
    fn test_zero_salary_is_invalid() {
        let result = validate(Some("0"), Some("2015-01-01"), Some("2022-01-01"));
        assert_eq!(
            result.error_for(InputField::Salary),
            Some(ValidationError::InvalidSalary)
        );
        assert_eq!(result.field_errors().len(), 1);
    }

    #[test]
    fn test_unparseable_start_date_reports_missing_start_date() {
        let result = validate(Some("3000"), Some("2015-02-30"), Some("2022-01-01"));
        assert_eq!(
            result.error_for(InputField::StartDate),
            Some(ValidationError::MissingStartDate)
        );
    }

    #[test]
    fn test_reversed_range_is_not_a_validation_error() {
        let result = validate(Some("3000"), Some("2022-01-01"), Some("2015-01-01"));
        assert!(result.is_valid());
    }

    #[test]
    fn test_parse_input_returns_typed_values() {
        let raw = RawGratuityInput::new(Some("6000"), Some("2020-06-01"), Some("2023-06-01"));
        let input = parse_input(&raw).unwrap();
        assert_eq!(input.salary, rust_decimal::Decimal::from(6000));
        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        assert_eq!(input.end_date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_input_returns_validation_result_on_failure() {
        let raw = RawGratuityInput::new(Some("3000"), None, Some("2023-06-01"));
        let result = parse_input(&raw).unwrap_err();
        assert_eq!(result, validate_input(&raw));
        assert_eq!(
            result.message_for(InputField::StartDate).as_deref(),
            Some("Starting Date is required.")
        );
    }

    proptest! {
        #[test]
        fn prop_non_numeric_salary_is_invalid(text in "[a-zA-Z_ ]{0,12}") {
            let result = validate(Some(text.as_str()), Some("2015-01-01"), Some("2022-01-01"));
            prop_assert!(!result.is_valid());
            prop_assert_eq!(
                result.error_for(InputField::Salary),
                Some(ValidationError::InvalidSalary)
            );
        }

        #[test]
        fn prop_digit_separated_salary_is_invalid(whole in 1u32..100_000, fraction in 0u32..1000) {
            let text = format!("{}_{:03}", whole, fraction);
            let result = validate(Some(text.as_str()), Some("2015-01-01"), Some("2022-01-01"));
            prop_assert_eq!(
                result.error_for(InputField::Salary),
                Some(ValidationError::InvalidSalary)
            );
        }

        #[test]
        fn prop_non_positive_salary_is_invalid(value in -1_000_000i64..=0) {
            let text = value.to_string();
            let result = validate(Some(text.as_str()), Some("2015-01-01"), Some("2022-01-01"));
            prop_assert_eq!(
                result.error_for(InputField::Salary),
                Some(ValidationError::InvalidSalary)
            );
        }

        #[test]
        fn prop_missing_dates_are_reported(start_missing: bool, end_missing: bool) {
            let start = (!start_missing).then_some("2015-01-01");
            let end = (!end_missing).then_some("2022-01-01");
            let result = validate(Some("3000"), start, end);
            prop_assert_eq!(result.is_valid(), !start_missing && !end_missing);
            prop_assert_eq!(
                result.error_for(InputField::StartDate).is_some(),
                start_missing
            );
            prop_assert_eq!(
                result.error_for(InputField::EndDate).is_some(),
                end_missing
            );
        }
    }
}
