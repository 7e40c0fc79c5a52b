//! End-of-Service Gratuity Engine
//!
//! This crate computes an End-of-Service Gratuity (EOSG) payout from a monthly
//! basic salary and a service start/end date, along with the input validation
//! rules that gate the calculation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use calculation::{calculate, calculate_with_policy, evaluate};
pub use validation::{parse_input, validate};
