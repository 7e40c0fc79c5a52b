//! Configuration types for gratuity calculation.
//!
//! This module contains the strongly-typed accrual policy structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How elapsed service is decomposed into years and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationConvention {
    /// Year and month-number differences only; the day of month is ignored
    /// and a negative month difference is reported as-is.
    #[default]
    MonthIndex,
    /// Whole elapsed months, borrowing a month when the end day falls before
    /// the start day. The month remainder is always in `0..=11`.
    ElapsedMonths,
}

/// A band of service years that accrues a fixed number of days per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualTier {
    /// First service year in the band (1-based, inclusive).
    pub from_year: u32,
    /// Last service year in the band (inclusive). `None` means open-ended.
    #[serde(default)]
    pub to_year: Option<u32>,
    /// Days of basic salary accrued for each year in the band.
    pub days_per_year: u32,
}

impl AccrualTier {
    /// Returns how many of the first `years` service years fall in this band.
    ///
    /// # Examples
    ///
    /// ```
    /// use eosg_engine::config::AccrualTier;
    ///
    /// let tier = AccrualTier { from_year: 6, to_year: None, days_per_year: 30 };
    /// assert_eq!(tier.years_covered(5), 0);
    /// assert_eq!(tier.years_covered(7), 2);
    /// ```
    pub fn years_covered(&self, years: u32) -> u32 {
        let upper = self.to_year.map_or(years, |to_year| to_year.min(years));
        if upper < self.from_year {
            0
        } else {
            upper - self.from_year + 1
        }
    }
}

/// The accrual policy applied by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityPolicy {
    /// Human-readable policy name.
    pub name: String,
    /// Currency unit for salary and amount (e.g., "AED").
    pub currency: String,
    /// Legal provision the policy implements.
    #[serde(default)]
    pub reference: String,
    /// Fixed number of days in a month used to derive the daily rate.
    pub days_per_month: Decimal,
    /// Minimum whole years of service before any gratuity is due.
    pub minimum_service_years: u32,
    /// How service duration is measured.
    #[serde(default)]
    pub duration_convention: DurationConvention,
    /// Accrual bands, ordered by `from_year`.
    pub tiers: Vec<AccrualTier>,
}

impl Default for GratuityPolicy {
    /// 21 days per year for the first five years, 30 days per year after,
    /// on a 30-day month.
    fn default() -> Self {
        Self {
            name: "UAE Labour Law".to_string(),
            currency: "AED".to_string(),
            reference: "Federal Decree-Law No. 33 of 2021, Art. 51".to_string(),
            days_per_month: Decimal::from(30),
            minimum_service_years: 1,
            duration_convention: DurationConvention::MonthIndex,
            tiers: vec![
                AccrualTier {
                    from_year: 1,
                    to_year: Some(5),
                    days_per_year: 21,
                },
                AccrualTier {
                    from_year: 6,
                    to_year: None,
                    days_per_year: 30,
                },
            ],
        }
    }
}

impl GratuityPolicy {
    /// Returns a copy of this policy using a different duration convention.
    pub fn with_duration_convention(mut self, convention: DurationConvention) -> Self {
        self.duration_convention = convention;
        self
    }

    /// Returns the tier that covers a given 1-based service year.
    pub fn tier_for_year(&self, year: u32) -> Option<&AccrualTier> {
        self.tiers.iter().find(|tier| {
            year >= tier.from_year && tier.to_year.is_none_or(|to_year| year <= to_year)
        })
    }

    /// Checks that the policy is internally consistent.
    ///
    /// Tiers must start at year 1, be contiguous, and only the last tier may
    /// be open-ended. The month length must be positive and at least one year
    /// of service must be required.
    pub fn validate(&self) -> EngineResult<()> {
        if self.days_per_month <= Decimal::ZERO {
            return Err(self.invalid("days_per_month must be positive"));
        }
        if self.minimum_service_years == 0 {
            return Err(self.invalid("minimum_service_years must be at least 1"));
        }

        let Some(first) = self.tiers.first() else {
            return Err(self.invalid("tiers must not be empty"));
        };
        if first.from_year != 1 {
            return Err(self.invalid("the first tier must start at year 1"));
        }

        let mut next_year = 1;
        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.from_year != next_year {
                return Err(self.invalid(&format!(
                    "tier {} starts at year {} but year {} was expected",
                    index + 1,
                    tier.from_year,
                    next_year
                )));
            }
            match tier.to_year {
                Some(to_year) if to_year < tier.from_year => {
                    return Err(self.invalid(&format!(
                        "tier {} ends before it starts",
                        index + 1
                    )));
                }
                Some(to_year) => next_year = to_year + 1,
                None if index + 1 < self.tiers.len() => {
                    return Err(self.invalid("only the last tier may be open-ended"));
                }
                None => {}
            }
        }

        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidPolicy {
            policy: self.name.clone(),
            message: message.to_string(),
        }
    }
}
