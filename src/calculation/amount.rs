//! Daily rate and gratuity amount calculation.

use rust_decimal::Decimal;

/// Calculates the daily rate from a monthly salary.
///
/// Uses a fixed month length regardless of the real number of days in any
/// calendar month. A non-positive month length yields zero.
///
/// # Examples
///
/// ```
/// use eosg_engine::calculation::calculate_daily_rate;
/// use rust_decimal::Decimal;
///
/// let rate = calculate_daily_rate(Decimal::from(3000), Decimal::from(30));
/// assert_eq!(rate, Decimal::from(100));
/// ```
pub fn calculate_daily_rate(salary: Decimal, days_per_month: Decimal) -> Decimal {
    if days_per_month <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    salary.checked_div(days_per_month).unwrap_or(Decimal::MAX)
}

/// Calculates the gratuity amount as `daily_rate * gratuity_days`.
///
/// The result is not rounded. It saturates at [`Decimal::MAX`] rather than
/// overflowing.
pub fn calculate_gratuity_amount(daily_rate: Decimal, gratuity_days: u32) -> Decimal {
    daily_rate
        .checked_mul(Decimal::from(gratuity_days))
        .unwrap_or(Decimal::MAX)
}
