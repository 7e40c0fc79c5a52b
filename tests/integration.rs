//! Integration tests for the End-of-Service Gratuity Engine.
//!
//! This test suite covers:
//! - The library surface (`validate`, `parse_input`, `calculate`, `evaluate`)
//! - The reference gratuity scenarios and tier boundaries
//! - The shipped policy configuration
//! - The HTTP endpoints, including validation and malformed-request errors

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use eosg_engine::api::{AppState, create_router};
use eosg_engine::config::{ConfigLoader, DurationConvention};
use eosg_engine::error::ValidationError;
use eosg_engine::models::{InputField, RawGratuityInput};
use eosg_engine::{calculate, evaluate, parse_input, validate};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/uae").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate", body.to_string()).await
}

async fn post_validate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/validate", body.to_string()).await
}

fn assert_amount(result: &Value, expected: &str) {
    let actual = result["result"]["amount"].as_str().unwrap();
    assert_eq!(
        decimal(actual).normalize(),
        decimal(expected).normalize(),
        "Expected amount {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Library: reference scenarios
// =============================================================================

#[test]
fn test_scenario_seven_years() {
    let result = calculate(decimal("3000"), date("2015-01-01"), date("2022-01-01"));
    assert_eq!(result.duration_years, 7);
    assert_eq!(result.duration_months, 0);
    assert_eq!(result.gratuity_days, 105 + 30 * 2);
    assert_eq!(result.daily_rate, decimal("100"));
    assert_eq!(result.rounded_amount().to_string(), "16500.00");
    assert!(result.eligible);
}

#[test]
fn test_scenario_three_years() {
    let result = calculate(decimal("6000"), date("2020-06-01"), date("2023-06-01"));
    assert_eq!(result.duration_years, 3);
    assert_eq!(result.gratuity_days, 63);
    assert_eq!(result.daily_rate, decimal("200"));
    assert_eq!(result.rounded_amount().to_string(), "12600.00");
}

#[test]
fn test_scenario_same_month_next_year_literal_and_elapsed() {
    // Month-index convention ignores the day of month.
    let literal = calculate(decimal("3000"), date("2018-01-15"), date("2019-01-10"));
    assert_eq!(literal.duration_years, 1);
    assert!(literal.eligible);

    // Counting whole elapsed months, the year is not complete.
    let policy = ConfigLoader::load("./config/uae")
        .unwrap()
        .policy()
        .clone()
        .with_duration_convention(DurationConvention::ElapsedMonths);
    let input = parse_input(&RawGratuityInput::new(
        Some("3000"),
        Some("2018-01-15"),
        Some("2019-01-10"),
    ))
    .unwrap();
    let calculation = evaluate(&input, &policy);
    assert_eq!(calculation.result.duration_years, 0);
    assert_eq!(calculation.result.duration_months, 11);
    assert!(!calculation.result.eligible);
    assert_eq!(calculation.result.amount, Decimal::ZERO);
    assert!(calculation.advisory.is_some());
}

#[test]
fn test_tier_boundaries() {
    let one = calculate(decimal("3000"), date("2020-01-01"), date("2021-01-01"));
    assert!(one.eligible);
    assert_eq!(one.gratuity_days, 21);

    let five = calculate(decimal("3000"), date("2016-01-01"), date("2021-01-01"));
    assert_eq!(five.gratuity_days, 105);

    let six = calculate(decimal("3000"), date("2015-01-01"), date("2021-01-01"));
    assert_eq!(six.gratuity_days, 135);
}

#[test]
fn test_validate_then_calculate_flow() {
    let validation = validate(Some("3000"), Some("2015-01-01"), Some("2022-01-01"));
    assert!(validation.is_valid());

    let raw = RawGratuityInput::new(Some("3000"), Some("2015-01-01"), Some("2022-01-01"));
    let input = parse_input(&raw).unwrap();
    let result = calculate(input.salary, input.start_date, input.end_date);
    assert_eq!(result.amount, decimal("16500"));
}

#[test]
fn test_validation_reports_every_field() {
    let validation = validate(Some("not a number"), None, Some(""));
    assert!(!validation.is_valid());
    assert_eq!(
        validation.error_for(InputField::Salary),
        Some(ValidationError::InvalidSalary)
    );
    assert_eq!(
        validation.error_for(InputField::StartDate),
        Some(ValidationError::MissingStartDate)
    );
    assert_eq!(
        validation.error_for(InputField::EndDate),
        Some(ValidationError::MissingEndDate)
    );
}

#[test]
fn test_advisory_is_not_a_field_error() {
    let raw = RawGratuityInput::new(Some("3000"), Some("2022-03-01"), Some("2022-11-01"));
    assert!(validate(Some("3000"), Some("2022-03-01"), Some("2022-11-01")).is_valid());

    let calculation = evaluate(
        &parse_input(&raw).unwrap(),
        ConfigLoader::default().policy(),
    );
    assert!(!calculation.result.eligible);
    assert_eq!(
        calculation.advisory.unwrap().message,
        "You do not deserve End-of-Service Gratuity (EOSG) as you have less than one year of service."
    );
}

// =============================================================================
// HTTP: /calculate
// =============================================================================

#[tokio::test]
async fn test_calculate_seven_years() {
    let (status, body) = post_calculate(json!({
        "salary": 3000,
        "startDate": "2015-01-01",
        "endDate": "2022-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["durationYears"], 7);
    assert_eq!(body["result"]["durationMonths"], 0);
    assert_eq!(body["result"]["gratuityDays"], 165);
    assert_eq!(body["result"]["eligible"], true);
    assert_amount(&body, "16500");
    assert_eq!(body["currency"], "AED");
    assert!(body.get("advisory").is_none());
    assert_eq!(body["auditTrace"]["steps"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_calculate_accepts_string_salary() {
    let (status, body) = post_calculate(json!({
        "salary": "6000",
        "startDate": "2020-06-01",
        "endDate": "2023-06-01"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["gratuityDays"], 63);
    assert_amount(&body, "12600");
}

#[tokio::test]
async fn test_calculate_under_one_year_returns_advisory() {
    let (status, body) = post_calculate(json!({
        "salary": 3000,
        "startDate": "2021-11-01",
        "endDate": "2022-09-01"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["eligible"], false);
    assert_eq!(body["result"]["durationYears"], 0);
    assert_eq!(body["result"]["durationMonths"], -2);
    assert_amount(&body, "0");
    assert_eq!(body["advisory"]["code"], "NO_GRATUITY_DUE");

    let warnings = body["auditTrace"]["warnings"].as_array().unwrap();
    assert!(
        warnings
            .iter()
            .any(|w| w["code"] == "NEGATIVE_REMAINDER_MONTHS")
    );
}

#[tokio::test]
async fn test_calculate_reversed_range_warns_but_succeeds() {
    let (status, body) = post_calculate(json!({
        "salary": 3000,
        "startDate": "2022-01-01",
        "endDate": "2015-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["eligible"], false);
    let warnings = body["auditTrace"]["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == "END_BEFORE_START"));
}

#[tokio::test]
async fn test_calculate_invalid_input_returns_field_errors() {
    let (status, body) = post_calculate(json!({
        "salary": "abc",
        "endDate": "2022-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["fieldErrors"]["salary"],
        "Basic Salary must be a valid number."
    );
    assert_eq!(body["fieldErrors"]["startDate"], "Starting Date is required.");
    assert!(body["fieldErrors"].get("endDate").is_none());
}

#[tokio::test]
async fn test_calculate_zero_salary_is_rejected() {
    let (status, body) = post_calculate(json!({
        "salary": 0,
        "startDate": "2015-01-01",
        "endDate": "2022-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fieldErrors"].get("salary").is_some());
}

#[tokio::test]
async fn test_calculate_malformed_json() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        "{\"salary\": 3000,".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
    assert_eq!(body["message"], "Invalid JSON syntax");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_calculate_wrong_field_type_is_malformed() {
    let (status, body) = post_calculate(json!({
        "salary": 3000,
        "startDate": 20150101,
        "endDate": "2022-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
    assert!(body["details"].as_str().unwrap().contains("startDate"));
    assert!(body.get("fieldErrors").is_none());
}

#[tokio::test]
async fn test_calculate_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .body(Body::from(json!({"salary": 3000}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
    assert!(body["details"].is_string());
}

// =============================================================================
// HTTP: /validate
// =============================================================================

#[tokio::test]
async fn test_validate_valid_input() {
    let (status, body) = post_validate(json!({
        "salary": 3000,
        "startDate": "2015-01-01",
        "endDate": "2022-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"valid": true, "fieldErrors": {}}));
}

#[tokio::test]
async fn test_validate_empty_body_reports_all_fields() {
    let (status, body) = post_validate(json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["fieldErrors"],
        json!({
            "salary": "Basic Salary must be a valid number.",
            "startDate": "Starting Date is required.",
            "endDate": "Finishing Date is required."
        })
    );
}

#[tokio::test]
async fn test_validate_rejects_unusable_salaries() {
    for salary in [json!("3_000"), json!("1e-30"), json!(1e30)] {
        let (status, body) = post_validate(json!({
            "salary": salary,
            "startDate": "2015-01-01",
            "endDate": "2022-01-01"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false, "salary {} should be rejected", salary);
        assert_eq!(
            body["fieldErrors"]["salary"],
            "Basic Salary must be a valid number."
        );
    }
}

#[tokio::test]
async fn test_validate_impossible_date() {
    let (status, body) = post_validate(json!({
        "salary": 3000,
        "startDate": "2015-02-30",
        "endDate": "2022-01-01"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["fieldErrors"]["startDate"], "Starting Date is required.");
}
