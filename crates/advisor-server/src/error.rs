//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use advisor_core::{AdvisorError, ValidationErrors};

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain error from the intake form or a session
    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    /// No open session with this ID (never opened, or the view was left)
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            Self::Advisor(err) => match err {
                AdvisorError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED"),
                AdvisorError::AlreadySubmitted => (StatusCode::CONFLICT, "ALREADY_SUBMITTED"),
                AdvisorError::EmptyMessage => (StatusCode::BAD_REQUEST, "EMPTY_MESSAGE"),
                AdvisorError::AccessKeyRequired => (StatusCode::FORBIDDEN, "ACCESS_KEY_REQUIRED"),
                AdvisorError::AccessKeyRejected(_) => (StatusCode::BAD_REQUEST, "ACCESS_KEY_REJECTED"),
                AdvisorError::AwaitingResponse => (StatusCode::CONFLICT, "AWAITING_RESPONSE"),
                AdvisorError::Session(_) => (StatusCode::CONFLICT, "SESSION_ERROR"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!(code, "Request rejected: {}", self);
        }

        let (error, fields) = match self {
            Self::Advisor(AdvisorError::Validation(errors)) => (
                AdvisorError::Validation(errors.clone()).user_message(),
                Some(errors),
            ),
            Self::Advisor(err) => (err.user_message(), None),
            Self::SessionNotFound(_) => (
                AdvisorError::Session(String::new()).user_message(),
                None,
            ),
        };

        let body = ErrorResponse {
            error,
            code: code.into(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}
