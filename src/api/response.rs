//! Response types for the compensation decision engine API.
//!
//! This module defines the evaluation envelopes returned by the endpoints
//! and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, DepartmentRollup, RaiseResult};

/// Response body for the `POST /raise` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseResponse {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The identifier the evaluation was requested for.
    pub employee_id: String,
    /// The tagged raise outcome.
    #[serde(flatten)]
    pub result: RaiseResult,
    /// Whether an approved salary was written back to the store.
    pub persisted: bool,
    /// Complete audit trace of the evaluation.
    pub audit_trace: AuditTrace,
}

/// Response body for the `POST /bonus` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusResponse {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The bonus amount.
    pub amount: Decimal,
    /// The schedule percentage that was applied.
    pub percentage: Decimal,
    /// Complete audit trace of the evaluation.
    pub audit_trace: AuditTrace,
}

/// Response body for the `POST /status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The classified status label.
    pub label: String,
    /// Complete audit trace of the evaluation.
    pub audit_trace: AuditTrace,
}

/// Response body for the `POST /rollup` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupResponse {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The department aggregate.
    pub rollup: DepartmentRollup,
    /// Complete audit trace of the evaluation.
    pub audit_trace: AuditTrace,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Policy file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_POLICY",
                    "Policy validation failed",
                    message,
                ),
            },
            EngineError::InvalidArgument { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    format!("Invalid argument '{}': {}", field, message),
                    "The request contains malformed numeric input",
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", id),
                    "No employee record exists for the given identifier",
                ),
            },
        }
    }
}
