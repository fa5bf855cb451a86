//! Error handling for the HTTP API
//!
//! Maps task errors and extractor rejections to status codes and a
//! `{"detail": "..."}` JSON body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use task_core::TaskError;
use thiserror::Error;

/// Detail returned for every unhandled failure; the cause is only logged
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// HTTP API errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn detail(&self) -> String {
        match self {
            ApiError::NotFound(msg)
            | ApiError::Validation(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Internal(_) => INTERNAL_ERROR_DETAIL.to_string(),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(msg) => ApiError::NotFound(msg),
            TaskError::Validation(msg) => ApiError::Validation(msg),
            TaskError::Database(msg) => ApiError::Internal(format!("Database error: {msg}")),
            TaskError::Configuration(msg) => {
                ApiError::Internal(format!("Configuration error: {msg}"))
            }
            TaskError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::Validation(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                ApiError::Validation(rejection.body_text())
            }
            _ => ApiError::Internal(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
