//! Calculation logic for the End-of-Service Gratuity Engine.
//!
//! This module contains the calculation functions for the gratuity payout:
//! service duration decomposition, the minimum-service eligibility check,
//! tiered gratuity day accrual, the fixed-month daily rate, the resulting
//! amount, and an audited evaluation that records every step.

mod amount;
mod audit;
mod gratuity;
mod gratuity_days;
mod service_duration;

pub use amount::{calculate_daily_rate, calculate_gratuity_amount};
pub use audit::{END_BEFORE_START, NEGATIVE_REMAINDER_MONTHS, evaluate};
pub use gratuity::{calculate, calculate_with_policy};
pub use gratuity_days::{TierAccrual, accrue_by_tier, calculate_gratuity_days, is_eligible};
pub use service_duration::calculate_service_duration;
