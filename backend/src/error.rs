//! Error types and error handling for the HTTP layer
//!
//! Flow errors are converted to HTTP responses here. All errors implement
//! `IntoResponse` to provide consistent error formatting.

use crate::orchestrator::error::FlowError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A flow failed
    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Flow(FlowError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Flow(FlowError::ModelCommunication(_))
            | AppError::Flow(FlowError::ToolOutputValidation(_))
            | AppError::Flow(FlowError::NoActionableOutput) => StatusCode::BAD_GATEWAY,
            AppError::Flow(FlowError::Cancelled) => StatusCode::REQUEST_TIMEOUT,
            AppError::Flow(FlowError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
