//! HTTP API module for the End-of-Service Gratuity Engine.
//!
//! This module exposes the validator and the calculator as REST endpoints.
//! It only consumes the core's inputs and outputs; rendering and currency
//! formatting are left to the client.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
