use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::session::machine::TransitionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition: {0}")]
    Conflict(String),
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::IncompleteProfile | TransitionError::IncompleteAnswers => {
                AppError::Validation(err.to_string())
            }
            TransitionError::CareerOutOfRange { .. } => AppError::NotFound(err.to_string()),
            TransitionError::NotAllowed { .. } | TransitionError::Stale { .. } => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "INVALID_TRANSITION", msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Failure of one orchestrated model call: either the call itself failed or the
/// returned JSON did not satisfy the declared shape.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("response failed schema validation: {0}")]
    Schema(String),
}

/// Coarse failure taxonomy carried in the session so the front-end can tell
/// degraded or failed runs apart without seeing raw error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingCredential,
    Transport,
    EmptyResponse,
    Malformed,
    SchemaMismatch,
}

impl OrchestrationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            OrchestrationError::Model(LlmError::MissingApiKey) => FailureKind::MissingCredential,
            OrchestrationError::Model(LlmError::Http(_))
            | OrchestrationError::Model(LlmError::Api { .. }) => FailureKind::Transport,
            OrchestrationError::Model(LlmError::EmptyContent) => FailureKind::EmptyResponse,
            OrchestrationError::Model(LlmError::Parse(_)) => FailureKind::Malformed,
            OrchestrationError::Schema(_) => FailureKind::SchemaMismatch,
        }
    }
}
