//! HTTP error type for the JSON endpoints.
//!
//! Produces `{"error": {"code", "message", "fields"?}}` bodies with a status
//! code matching the failure.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::DomainError;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid input (422)
    #[error("Validation failed: {message}")]
    Validation { message: String, fields: Vec<String> },

    /// The chat-completion call failed (502)
    #[error("Generation failed: {message}")]
    Generation { message: String },

    /// Internal server error (500)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        DomainError::validation(fields).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { message, fields } => {
                warn!("Rejected request: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiErrorBody {
                        code: "VALIDATION_ERROR".into(),
                        message,
                        fields,
                    },
                )
            }
            ApiError::Generation { message } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "GENERATION_ERROR".into(),
                    message,
                    fields: Vec::new(),
                },
            ),
            ApiError::Internal { message } => {
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".into(),
                        message,
                        fields: Vec::new(),
                    },
                )
            }
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { ref fields } => ApiError::Validation {
                fields: fields.iter().map(|f| f.to_string()).collect(),
                message: e.to_string(),
            },
            e if e.is_generation_failure() => ApiError::Generation {
                message: e.to_legacy_string(),
            },
            e => ApiError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            fields: Vec::new(),
        }
    }
}
