//! Application error type shared by the resolver, API and web layers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors surfaced by entity resolution and the HTTP layers.
///
/// - `NotFound` - the primary entity of a page does not exist
/// - `Transport` - the catalog API could not be reached or answered badly
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    Transport { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn transport(message: impl Into<String>, details: Value) -> Self {
        Self::Transport {
            message: message.into(),
            details,
        }
    }

    /// Whether the error means the requested entity is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. } | Self::Transport { message, .. } => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { message, .. } => write!(f, "not found: {}", message),
            Self::Transport { message, .. } => write!(f, "upstream error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Transport { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
