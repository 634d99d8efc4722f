//! HTTP request handlers for the Tax Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_cit, compute_pit};
use crate::error::EngineError;
use crate::models::{CitInput, PitInput};

use super::request::{CitRequest, PitRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate_pit", post(calculate_pit_handler))
        .route("/api/calculate_cit", post(calculate_cit_handler))
        .with_state(state)
}

/// Handler for POST /api/calculate_pit endpoint.
///
/// Accepts an individual's declared income and deductions and returns the
/// Personal Income Tax result with its band breakdown.
async fn calculate_pit_handler(
    State(state): State<AppState>,
    payload: Result<Json<PitRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing PIT calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = match PitInput::try_from(request) {
        Ok(input) => input,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let start_time = Instant::now();
    let result = compute_pit(&input, state.config().pit());
    info!(
        correlation_id = %correlation_id,
        chargeable_income = %result.chargeable_income,
        tax_payable = %result.tax_payable,
        bands = result.tax_breakdown.len(),
        duration_us = start_time.elapsed().as_micros(),
        "PIT calculation completed successfully"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /api/calculate_cit endpoint.
///
/// Accepts a company's declared figures and returns its classification,
/// Company Income Tax and development levy.
async fn calculate_cit_handler(
    State(state): State<AppState>,
    payload: Result<Json<CitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CIT calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = match CitInput::try_from(request) {
        Ok(input) => input,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let start_time = Instant::now();
    let result = compute_cit(&input, state.config().cit());
    info!(
        correlation_id = %correlation_id,
        company_type = result.company_type.label(),
        total_tax_payable = %result.total_tax_payable,
        duration_us = start_time.elapsed().as_micros(),
        "CIT calculation completed successfully"
    );

    json_response(StatusCode::OK, result)
}

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the offending field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::invalid_input(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
