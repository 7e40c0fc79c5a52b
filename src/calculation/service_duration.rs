//! Service duration calculation.
//!
//! Decomposes the interval between the service start and end dates into
//! whole years and a month remainder, under one of two conventions.

use chrono::{Datelike, NaiveDate};

use crate::config::DurationConvention;
use crate::models::ServiceDuration;

/// Calculates the service duration between two dates.
///
/// # Arguments
///
/// * `start_date` - The first day of service
/// * `end_date` - The last day of service
/// * `convention` - How the interval is decomposed
///
/// # Conventions
///
/// [`DurationConvention::MonthIndex`] subtracts calendar years and month
/// numbers, ignoring the day of month. When the month difference is negative
/// one year is deducted, but the negative month difference itself is reported
/// unchanged.
///
/// [`DurationConvention::ElapsedMonths`] counts whole elapsed months (a month
/// is only complete once the end day reaches the start day) and splits them
/// into years and a `0..=11` month remainder.
///
/// # Examples
///
/// ```
/// use eosg_engine::calculation::calculate_service_duration;
/// use eosg_engine::config::DurationConvention;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 11, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
///
/// let literal = calculate_service_duration(start, end, DurationConvention::MonthIndex);
/// assert_eq!((literal.years, literal.months), (2, -2));
///
/// let elapsed = calculate_service_duration(start, end, DurationConvention::ElapsedMonths);
/// assert_eq!((elapsed.years, elapsed.months), (2, 10));
/// ```
pub fn calculate_service_duration(
    start_date: NaiveDate,
    end_date: NaiveDate,
    convention: DurationConvention,
) -> ServiceDuration {
    match convention {
        DurationConvention::MonthIndex => month_index_duration(start_date, end_date),
        DurationConvention::ElapsedMonths => elapsed_months_duration(start_date, end_date),
    }
}

fn month_index_duration(start_date: NaiveDate, end_date: NaiveDate) -> ServiceDuration {
    let mut years = end_date.year() - start_date.year();
    let months = end_date.month() as i32 - start_date.month() as i32;

    if months < 0 {
        years -= 1;
    }

    ServiceDuration::new(years, months)
}

fn elapsed_months_duration(start_date: NaiveDate, end_date: NaiveDate) -> ServiceDuration {
    let mut total_months = (end_date.year() - start_date.year()) * 12
        + (end_date.month() as i32 - start_date.month() as i32);

    // The last month only counts once its day-of-month has been reached.
    if end_date.day() < start_date.day() {
        total_months -= 1;
    }

    ServiceDuration::new(total_months.div_euclid(12), total_months.rem_euclid(12))
}
