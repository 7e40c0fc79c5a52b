//! Gratuity calculation.
//!
//! Combines the service duration, eligibility, tiered day accrual and daily
//! rate into a [`GratuityResult`]. These functions are total: any validated
//! input produces a result.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::GratuityPolicy;
use crate::models::{GratuityInput, GratuityResult};

use super::amount::{calculate_daily_rate, calculate_gratuity_amount};
use super::gratuity_days::{calculate_gratuity_days, is_eligible};
use super::service_duration::calculate_service_duration;

/// Calculates the gratuity under the built-in policy.
///
/// The inputs are expected to have passed [`validate`](crate::validate):
/// a positive salary and two calendar dates.
///
/// # Examples
///
/// ```
/// use eosg_engine::calculate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = calculate(
///     Decimal::from(3000),
///     NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
/// );
/// assert!(result.eligible);
/// assert_eq!(result.duration_years, 7);
/// assert_eq!(result.gratuity_days, 165);
/// assert_eq!(result.amount, Decimal::from(16500));
/// ```
pub fn calculate(salary: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> GratuityResult {
    calculate_with_policy(
        &GratuityInput::new(salary, start_date, end_date),
        &GratuityPolicy::default(),
    )
}

/// Calculates the gratuity under a given policy.
///
/// Service below the policy minimum is not eligible: the duration and daily
/// rate are still reported, while `gratuity_days` and `amount` are zero.
pub fn calculate_with_policy(input: &GratuityInput, policy: &GratuityPolicy) -> GratuityResult {
    let duration =
        calculate_service_duration(input.start_date, input.end_date, policy.duration_convention);
    let daily_rate = calculate_daily_rate(input.salary, policy.days_per_month);
    let eligible = is_eligible(duration.years, policy);

    let (gratuity_days, amount) = if eligible {
        let days = calculate_gratuity_days(duration.years, policy);
        (days, calculate_gratuity_amount(daily_rate, days))
    } else {
        (0, Decimal::ZERO)
    };

    GratuityResult {
        duration_years: duration.years,
        duration_months: duration.months,
        gratuity_days,
        daily_rate,
        amount,
        eligible,
    }
}
