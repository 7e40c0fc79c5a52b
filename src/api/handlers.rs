//! HTTP request handlers for the End-of-Service Gratuity Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::evaluate;
use crate::models::RawGratuityInput;
use crate::validation::{parse_input, validate_input};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /validate endpoint.
///
/// Always answers `200 OK` with a `ValidationResult` for well-formed JSON.
async fn validate_handler(payload: Result<Json<CalculationRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let raw: RawGratuityInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = validate_input(&raw);
    info!(
        correlation_id = %correlation_id,
        valid = result.is_valid(),
        invalid_fields = result.field_errors().len(),
        "Validation completed"
    );
    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Validates the input first and only calculates when every field passed.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let raw: RawGratuityInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = match parse_input(&raw) {
        Ok(input) => input,
        Err(validation) => {
            let fields: Vec<&str> = validation
                .field_errors()
                .keys()
                .map(|field| field.as_str())
                .collect();
            warn!(
                correlation_id = %correlation_id,
                fields = ?fields,
                "Input validation failed"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_failed(&validation))
                .into_response();
        }
    };

    let calculation = evaluate(&input, state.policy());

    for warning in &calculation.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Calculation warning"
        );
    }
    info!(
        correlation_id = %correlation_id,
        calculation_id = %calculation.calculation_id,
        years = calculation.result.duration_years,
        months = calculation.result.duration_months,
        eligible = calculation.result.eligible,
        amount = %calculation.result.amount,
        duration_us = calculation.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (StatusCode::OK, Json(calculation)).into_response()
}

/// Maps a JSON extraction failure to a `400 Bad Request`.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::with_details(
                "MALFORMED_JSON",
                "Request body does not match the expected shape",
                body_text,
            )
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::with_details("MALFORMED_JSON", "Invalid JSON syntax", err.body_text())
        }
        JsonRejection::MissingJsonContentType(err) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::with_details(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
                err.body_text(),
            )
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
