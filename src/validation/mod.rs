//! Validation of raw user input.
//!
//! The validator is the gate in front of the calculator: callers validate
//! first and only calculate when the result is valid. [`parse_input`] does
//! both at once and hands back a typed [`GratuityInput`](crate::models::GratuityInput).

mod parsers;
mod validator;

pub use parsers::{DATE_FORMAT, parse_date, parse_salary};
pub use validator::{parse_input, validate, validate_input};
