//! Service duration model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Elapsed service expressed as whole years plus a month remainder.
///
/// Under the default month-index convention `months` is the raw difference
/// of calendar month numbers and can be negative when the end month falls
/// before the start month. Use [`ServiceDuration::normalized_months`] when a
/// value in `0..=11` is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDuration {
    /// Whole years of service.
    pub years: i32,
    /// Remainder months as reported by the duration convention.
    pub months: i32,
}

impl ServiceDuration {
    /// Creates a new duration.
    pub fn new(years: i32, months: i32) -> Self {
        Self { years, months }
    }

    /// Returns the month remainder folded into `0..=11`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eosg_engine::models::ServiceDuration;
    ///
    /// let duration = ServiceDuration::new(0, -2);
    /// assert_eq!(duration.normalized_months(), 10);
    /// ```
    pub fn normalized_months(&self) -> i32 {
        self.months.rem_euclid(12)
    }

    /// Returns true if the reported month remainder is already in `0..=11`.
    pub fn is_month_remainder_normalized(&self) -> bool {
        (0..12).contains(&self.months)
    }
}

impl fmt::Display for ServiceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years and {} months", self.years, self.months)
    }
}
