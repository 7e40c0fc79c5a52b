//! Core data models for the End-of-Service Gratuity Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod input;
mod service_duration;
mod validation_result;

pub use calculation_result::{
    Advisory, AuditStep, AuditTrace, AuditWarning, GratuityCalculation, GratuityResult,
};
pub use input::{GratuityInput, InputField, RawGratuityInput};
pub use service_duration::ServiceDuration;
pub use validation_result::ValidationResult;
