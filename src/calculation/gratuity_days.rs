//! Gratuity day accrual and eligibility.
//!
//! Days of basic salary accrue per whole year of service, at the rate of the
//! tier each year falls in. Tiers are cumulative: the years in an earlier
//! tier keep their rate once service crosses into a later one.

use serde::Serialize;

use crate::config::GratuityPolicy;

/// Days accrued within a single tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierAccrual {
    /// First service year of the tier.
    pub from_year: u32,
    /// Last service year of the tier, if bounded.
    pub to_year: Option<u32>,
    /// Service years that fall in the tier.
    pub years: u32,
    /// Days accrued per year in the tier.
    pub days_per_year: u32,
    /// `years * days_per_year`.
    pub days: u32,
}

/// Returns true if `years` of service meets the policy's minimum.
///
/// # Examples
///
/// ```
/// use eosg_engine::calculation::is_eligible;
/// use eosg_engine::config::GratuityPolicy;
///
/// let policy = GratuityPolicy::default();
/// assert!(!is_eligible(0, &policy));
/// assert!(is_eligible(1, &policy));
/// ```
pub fn is_eligible(years: i32, policy: &GratuityPolicy) -> bool {
    u32::try_from(years).is_ok_and(|years| years >= policy.minimum_service_years)
}

/// Splits `years` of service across the policy tiers.
///
/// Tiers the service does not reach are omitted. Negative years accrue
/// nothing.
pub fn accrue_by_tier(years: i32, policy: &GratuityPolicy) -> Vec<TierAccrual> {
    let Ok(years) = u32::try_from(years) else {
        return Vec::new();
    };

    policy
        .tiers
        .iter()
        .filter_map(|tier| {
            let covered = tier.years_covered(years);
            (covered > 0).then(|| TierAccrual {
                from_year: tier.from_year,
                to_year: tier.to_year,
                years: covered,
                days_per_year: tier.days_per_year,
                days: covered.saturating_mul(tier.days_per_year),
            })
        })
        .collect()
}

/// Calculates the total gratuity days for `years` of service.
///
/// With the default policy this is `21 * years` up to five years and
/// `105 + 30 * (years - 5)` beyond.
///
/// # Examples
///
/// ```
/// use eosg_engine::calculation::calculate_gratuity_days;
/// use eosg_engine::config::GratuityPolicy;
///
/// let policy = GratuityPolicy::default();
/// assert_eq!(calculate_gratuity_days(5, &policy), 105);
/// assert_eq!(calculate_gratuity_days(7, &policy), 165);
/// ```
pub fn calculate_gratuity_days(years: i32, policy: &GratuityPolicy) -> u32 {
    accrue_by_tier(years, policy)
        .iter()
        .fold(0u32, |total, accrual| total.saturating_add(accrual.days))
}
