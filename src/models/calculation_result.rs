//! Calculation result models for the End-of-Service Gratuity Engine.
//!
//! This module contains the [`GratuityResult`] returned by the calculator and
//! the [`GratuityCalculation`] envelope that adds an advisory and a complete
//! audit trace of the decisions taken.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GratuityInput, ServiceDuration};

/// The outcome of a gratuity calculation.
///
/// # Example
///
/// ```
/// use eosg_engine::models::GratuityResult;
/// use rust_decimal::Decimal;
///
/// let result = GratuityResult {
///     duration_years: 3,
///     duration_months: 0,
///     gratuity_days: 63,
///     daily_rate: Decimal::new(200, 0),
///     amount: Decimal::new(12600, 0),
///     eligible: true,
/// };
/// assert_eq!(result.rounded_amount().to_string(), "12600.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratuityResult {
    /// Whole years of service.
    pub duration_years: i32,
    /// Remainder months of service (see [`ServiceDuration`]).
    pub duration_months: i32,
    /// Days of basic salary accrued. Zero when not eligible.
    pub gratuity_days: u32,
    /// Basic salary per day under the fixed-month convention.
    pub daily_rate: Decimal,
    /// The unrounded gratuity amount. Zero when not eligible.
    pub amount: Decimal,
    /// Whether the service length qualifies for a gratuity.
    pub eligible: bool,
}

impl GratuityResult {
    /// Returns the service duration this result was computed from.
    pub fn duration(&self) -> ServiceDuration {
        ServiceDuration::new(self.duration_years, self.duration_months)
    }

    /// Returns the amount rounded to two decimal places for display.
    pub fn rounded_amount(&self) -> Decimal {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded
    }

    /// Returns the advisory to show alongside this result, if any.
    pub fn advisory(&self) -> Option<Advisory> {
        (!self.eligible).then(Advisory::no_gratuity_due)
    }
}

/// A user-facing notice that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// A code identifying the advisory.
    pub code: String,
    /// The message to show the user.
    pub message: String,
}

impl Advisory {
    /// Code used when the service is too short to earn a gratuity.
    pub const NO_GRATUITY_DUE: &'static str = "NO_GRATUITY_DUE";

    /// Creates the advisory for service shorter than the minimum.
    pub fn no_gratuity_due() -> Self {
        Self {
            code: Self::NO_GRATUITY_DUE.to_string(),
            message: "You do not deserve End-of-Service Gratuity (EOSG) as you have less than one year of service.".to_string(),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal provision behind this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag suspicious input that does not prevent calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// ```
/// use eosg_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A gratuity result together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratuityCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The name of the accrual policy applied.
    pub policy_name: String,
    /// The currency unit the salary and amount are expressed in.
    pub currency: String,
    /// The validated input.
    pub input: GratuityInput,
    /// The calculation outcome.
    pub result: GratuityResult,
    /// Advisory for the caller to surface, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
