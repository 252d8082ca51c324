//! HTTP request handlers for the compensation decision engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! The handlers are the orchestrating caller the engine contract talks
//! about: they look records up in the store, run the pure evaluation,
//! and persist approved salary changes back.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_bonus, classify_status, department_rollup, evaluate_raise};
use crate::error::EngineError;
use crate::models::{AuditTrace, EmployeeRecord, RaiseResult};
use crate::store::EmployeeStore;

use super::request::{
    BonusRequest, EmployeeUpsertRequest, RaiseRequest, RollupRequest, StatusRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, BonusResponse, RaiseResponse, RollupResponse, StatusResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(upsert_employee_handler))
        .route("/raise", post(raise_handler))
        .route("/bonus", post(bonus_handler))
        .route("/status", post(status_handler))
        .route("/rollup", post(rollup_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error response body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /employees endpoint.
///
/// Inserts or replaces an employee record in the store.
async fn upsert_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeUpsertRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    if request.salary < Decimal::ZERO {
        let api_error: ApiErrorResponse = EngineError::InvalidArgument {
            field: "salary".to_string(),
            message: format!("must not be negative, got {}", request.salary),
        }
        .into();
        return api_error.into_response();
    }
    if request.years_of_service < 0 {
        let api_error: ApiErrorResponse = EngineError::InvalidArgument {
            field: "years_of_service".to_string(),
            message: format!("must not be negative, got {}", request.years_of_service),
        }
        .into();
        return api_error.into_response();
    }

    let employee: EmployeeRecord = request.into();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        department = %employee.department,
        "Storing employee record"
    );
    state.store().write().await.insert(employee.clone());

    (StatusCode::CREATED, Json(employee)).into_response()
}

/// Handler for the POST /raise endpoint.
///
/// Looks the employee up, evaluates the proposed raise, and persists an
/// approved salary back to the store. A missing employee yields a 200
/// response with a `not_found` status, not an error.
async fn raise_handler(
    State(state): State<AppState>,
    payload: Result<Json<RaiseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing raise evaluation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let start_time = Instant::now();
    let employee = state.store().read().await.find(&request.employee_id);

    let evaluation = match evaluate_raise(
        employee.as_ref(),
        request.requested_percentage,
        state.policy().policy(),
        1,
    ) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Raise evaluation failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    // Persist the approved salary; the engine itself never writes.
    let mut persisted = false;
    if let RaiseResult::Approved { new_salary, .. } = &evaluation.result {
        if let Err(err) = state
            .store()
            .write()
            .await
            .update_salary(&request.employee_id, *new_salary)
        {
            warn!(correlation_id = %correlation_id, error = %err, "Persisting raise failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
        persisted = true;
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        approved = evaluation.result.is_approved(),
        persisted,
        "Raise evaluation completed"
    );

    let response = RaiseResponse {
        evaluation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        result: evaluation.result,
        persisted,
        audit_trace: AuditTrace {
            steps: vec![evaluation.audit_step],
            warnings: evaluation.warning.into_iter().collect(),
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for the POST /bonus endpoint.
async fn bonus_handler(
    State(state): State<AppState>,
    payload: Result<Json<BonusRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let start_time = Instant::now();
    match calculate_bonus(request.salary, request.rating, state.policy().policy(), 1) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                amount = %calculation.amount,
                "Bonus calculation completed"
            );
            let response = BonusResponse {
                evaluation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                amount: calculation.amount,
                percentage: calculation.percentage,
                audit_trace: AuditTrace {
                    steps: vec![calculation.audit_step],
                    warnings: vec![],
                    duration_us: start_time.elapsed().as_micros() as u64,
                },
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Bonus calculation failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /status endpoint.
async fn status_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing status classification");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let start_time = Instant::now();
    match classify_status(
        request.rating,
        request.years_of_service,
        state.policy().policy(),
        1,
    ) {
        Ok(classification) => {
            info!(
                correlation_id = %correlation_id,
                label = %classification.label,
                "Status classification completed"
            );
            let response = StatusResponse {
                evaluation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                label: classification.label,
                audit_trace: AuditTrace {
                    steps: vec![classification.audit_step],
                    warnings: vec![],
                    duration_us: start_time.elapsed().as_micros() as u64,
                },
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Status classification failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /rollup endpoint.
///
/// Aggregates over a snapshot of the store taken at request time.
async fn rollup_handler(
    State(state): State<AppState>,
    payload: Result<Json<RollupRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing department rollup");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let start_time = Instant::now();
    let snapshot = state.store().read().await.all();

    match department_rollup(&snapshot, &request.department, 1) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                department = %request.department,
                count = result.rollup.count,
                "Department rollup completed"
            );
            let response = RollupResponse {
                evaluation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                rollup: result.rollup,
                audit_trace: AuditTrace {
                    steps: vec![result.audit_step],
                    warnings: vec![],
                    duration_us: start_time.elapsed().as_micros() as u64,
                },
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Department rollup failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
