//! Audited gratuity evaluation.
//!
//! [`evaluate`] runs the same calculation as
//! [`calculate_with_policy`](super::calculate_with_policy) and records each
//! decision as an [`AuditStep`], together with warnings for input that is
//! accepted but suspicious.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::{DurationConvention, GratuityPolicy};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, GratuityCalculation, GratuityInput, GratuityResult,
};

use super::gratuity::calculate_with_policy;
use super::gratuity_days::accrue_by_tier;

/// Warning code for an end date earlier than the start date.
pub const END_BEFORE_START: &str = "END_BEFORE_START";

/// Warning code for a negative month remainder in the reported duration.
pub const NEGATIVE_REMAINDER_MONTHS: &str = "NEGATIVE_REMAINDER_MONTHS";

/// Calculates the gratuity and records an audit trace of how it was reached.
///
/// # Examples
///
/// ```
/// use eosg_engine::evaluate;
/// use eosg_engine::config::GratuityPolicy;
/// use eosg_engine::models::GratuityInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = GratuityInput::new(
///     Decimal::from(6000),
///     NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
/// );
/// let calculation = evaluate(&input, &GratuityPolicy::default());
/// assert_eq!(calculation.result.amount, Decimal::from(12600));
/// assert_eq!(calculation.audit_trace.steps.len(), 5);
/// assert!(calculation.advisory.is_none());
/// ```
pub fn evaluate(input: &GratuityInput, policy: &GratuityPolicy) -> GratuityCalculation {
    let started = Instant::now();

    let result = calculate_with_policy(input, policy);
    let steps = audit_steps(input, policy, &result);
    let warnings = audit_warnings(input, &result);
    let advisory = result.advisory();

    GratuityCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        policy_name: policy.name.clone(),
        currency: policy.currency.clone(),
        input: *input,
        result,
        advisory,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        },
    }
}

fn audit_steps(
    input: &GratuityInput,
    policy: &GratuityPolicy,
    result: &GratuityResult,
) -> Vec<AuditStep> {
    let mut steps = vec![
        duration_step(input, policy, result),
        eligibility_step(policy, result),
    ];
    if result.eligible {
        steps.push(gratuity_days_step(policy, result));
    }
    steps.push(daily_rate_step(input, policy, result));
    steps.push(amount_step(result));

    for (index, step) in steps.iter_mut().enumerate() {
        step.step_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        step.clause_ref.clone_from(&policy.reference);
    }
    steps
}

fn step(
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number: 0,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        clause_ref: String::new(),
        input,
        output,
        reasoning,
    }
}

fn duration_step(
    input: &GratuityInput,
    policy: &GratuityPolicy,
    result: &GratuityResult,
) -> AuditStep {
    let convention = match policy.duration_convention {
        DurationConvention::MonthIndex => "month_index",
        DurationConvention::ElapsedMonths => "elapsed_months",
    };
    let duration = result.duration();

    let reasoning = match policy.duration_convention {
        DurationConvention::MonthIndex if duration.months < 0 => format!(
            "Month {} is before month {}: one year deducted, {} reported",
            input.end_date.format("%m"),
            input.start_date.format("%m"),
            duration
        ),
        DurationConvention::MonthIndex => {
            format!("Calendar year and month differences give {duration}")
        }
        DurationConvention::ElapsedMonths => format!("Whole elapsed months give {duration}"),
    };

    step(
        "service_duration",
        "Service Duration",
        serde_json::json!({
            "start_date": input.start_date.to_string(),
            "end_date": input.end_date.to_string(),
            "convention": convention
        }),
        serde_json::json!({
            "years": duration.years,
            "months": duration.months
        }),
        reasoning,
    )
}

fn eligibility_step(policy: &GratuityPolicy, result: &GratuityResult) -> AuditStep {
    let reasoning = if result.eligible {
        format!(
            "{} years of service meets the {} year minimum",
            result.duration_years, policy.minimum_service_years
        )
    } else {
        format!(
            "{} years of service is below the {} year minimum - no gratuity due",
            result.duration_years, policy.minimum_service_years
        )
    };

    step(
        "eligibility",
        "Minimum Service",
        serde_json::json!({
            "years": result.duration_years,
            "minimum_service_years": policy.minimum_service_years
        }),
        serde_json::json!({ "eligible": result.eligible }),
        reasoning,
    )
}

fn gratuity_days_step(policy: &GratuityPolicy, result: &GratuityResult) -> AuditStep {
    let breakdown = accrue_by_tier(result.duration_years, policy);
    let terms: Vec<String> = breakdown
        .iter()
        .map(|accrual| format!("{} x {}", accrual.years, accrual.days_per_year))
        .collect();

    step(
        "gratuity_days",
        "Tiered Gratuity Days",
        serde_json::json!({
            "years": result.duration_years,
            "tiers": policy.tiers
        }),
        serde_json::json!({
            "gratuity_days": result.gratuity_days,
            "breakdown": breakdown
        }),
        format!("{} = {} days", terms.join(" + "), result.gratuity_days),
    )
}

fn daily_rate_step(
    input: &GratuityInput,
    policy: &GratuityPolicy,
    result: &GratuityResult,
) -> AuditStep {
    step(
        "daily_rate",
        "Daily Rate",
        serde_json::json!({
            "salary": input.salary.normalize().to_string(),
            "days_per_month": policy.days_per_month.normalize().to_string()
        }),
        serde_json::json!({ "daily_rate": result.daily_rate.normalize().to_string() }),
        format!(
            "{} {} / {} = {}",
            policy.currency,
            input.salary.normalize(),
            policy.days_per_month.normalize(),
            result.daily_rate.normalize()
        ),
    )
}

fn amount_step(result: &GratuityResult) -> AuditStep {
    let reasoning = if result.eligible {
        format!(
            "{} x {} days = {}",
            result.daily_rate.normalize(),
            result.gratuity_days,
            result.amount.normalize()
        )
    } else {
        "Not eligible - amount is 0".to_string()
    };

    step(
        "gratuity_amount",
        "Gratuity Amount",
        serde_json::json!({
            "daily_rate": result.daily_rate.normalize().to_string(),
            "gratuity_days": result.gratuity_days
        }),
        serde_json::json!({ "amount": result.amount.normalize().to_string() }),
        reasoning,
    )
}

fn audit_warnings(input: &GratuityInput, result: &GratuityResult) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if input.is_reversed() {
        warnings.push(AuditWarning {
            code: END_BEFORE_START.to_string(),
            message: format!(
                "End date {} is before start date {}",
                input.end_date, input.start_date
            ),
            severity: "high".to_string(),
        });
    }

    if result.duration_months < 0 {
        warnings.push(AuditWarning {
            code: NEGATIVE_REMAINDER_MONTHS.to_string(),
            message: format!(
                "Remainder months reported as {} ({} once normalized)",
                result.duration_months,
                result.duration().normalized_months()
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
