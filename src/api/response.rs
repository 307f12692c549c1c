//! Response types for the analytics API.
//!
//! This module defines the error response structure and how engine errors
//! map onto HTTP status codes.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl ApiErrorResponse {
    /// A 400 response for a request body that could not be read.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code, details) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "The analytics configuration could not be loaded",
            ),
            EngineError::InvalidPeriod { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_PERIOD",
                "The reporting period must end on or after its start date",
            ),
            EngineError::InvalidShift { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SHIFT",
                "The shift data contains invalid information",
            ),
            EngineError::InvalidEmployee { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_EMPLOYEE",
                "The employee data contains invalid information",
            ),
            EngineError::InvalidInventoryItem { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_INVENTORY_ITEM",
                "The inventory data contains invalid information",
            ),
            EngineError::InvalidOrder { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_ORDER",
                "The order data contains invalid information",
            ),
            EngineError::InvalidMenuItem { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_MENU_ITEM",
                "The menu data contains invalid information",
            ),
            EngineError::InvalidExpense { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_EXPENSE",
                "The expense data contains invalid information",
            ),
            EngineError::InvalidSettings { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SETTINGS",
                "The financial settings contain an out-of-range value",
            ),
            EngineError::InvalidInput { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_INPUT",
                "A request figure is out of range",
            ),
            EngineError::Overflow { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ARITHMETIC_OVERFLOW",
                "The request figures are too large to calculate with",
            ),
        };

        ApiErrorResponse {
            status,
            error: ApiError::with_details(code, message, details),
        }
    }
}
