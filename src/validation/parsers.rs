//! Parsers for raw salary and date text.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a monthly salary.
///
/// Accepts an optionally signed decimal (`"3000"`, `"4250.50"`) with an
/// optional exponent (`"1.5e3"`). Digit separators, hex and other notations
/// are rejected. Returns `None` when the text is absent, blank, non-numeric,
/// or not strictly positive.
///
/// Values must fit a [`Decimal`]: magnitudes up to `Decimal::MAX`
/// (about 7.9e28) with at most 28 fractional digits. A positive salary
/// outside that range, such as `"1e30"` or `"1e-30"`, is rejected like any
/// other unusable salary.
///
/// # Examples
///
/// ```
/// use eosg_engine::validation::parse_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_salary(Some(" 3000 ")), Some(Decimal::from(3000)));
/// assert_eq!(parse_salary(Some("0")), None);
/// assert_eq!(parse_salary(Some("NaN")), None);
/// assert_eq!(parse_salary(Some("3_000")), None);
/// ```
pub fn parse_salary(raw: Option<&str>) -> Option<Decimal> {
    let text = raw?.trim();
    if !is_decimal_literal(text) {
        return None;
    }

    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()?;

    (value > Decimal::ZERO).then_some(value)
}

/// Checks for `[+-]digits[.digits][(e|E)[+-]digits]` with at least one
/// mantissa digit.
fn is_decimal_literal(text: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };

    let mantissa = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = !(whole.is_empty() && fraction.is_empty())
        && all_digits(whole)
        && all_digits(fraction);

    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// Returns `None` when the text is absent, blank, or does not name a real
/// calendar day.
///
/// # Examples
///
/// ```
/// use eosg_engine::validation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date(Some("2020-06-01")), NaiveDate::from_ymd_opt(2020, 6, 1));
/// assert_eq!(parse_date(Some("2023-02-30")), None);
/// ```
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}
