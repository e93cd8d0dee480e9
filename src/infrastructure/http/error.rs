//! Errors raised while talking to the catalog API.

use serde_json::json;

use crate::error::AppError;

/// Errors from the catalog API client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The body was JSON but matched none of the known shapes.
    #[error("Unexpected response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// The configured base URL cannot carry path segments.
    #[error("Invalid catalog API URL: {0}")]
    InvalidUrl(String),
}

impl From<CatalogClientError> for AppError {
    fn from(e: CatalogClientError) -> Self {
        let details = match &e {
            CatalogClientError::Status { status, .. } => json!({ "status": status }),
            CatalogClientError::Decode { endpoint, .. } => json!({ "endpoint": endpoint }),
            _ => json!({}),
        };
        AppError::transport(e.to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_becomes_transport() {
        let error: AppError = CatalogClientError::Status {
            status: 503,
            body: "maintenance".to_string(),
        }
        .into();

        match error {
            AppError::Transport { message, details } => {
                assert_eq!(message, "Catalog API error (503): maintenance");
                assert_eq!(details["status"], 503);
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
