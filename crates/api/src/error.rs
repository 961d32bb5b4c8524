//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tx_index::IndexError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record for the requested hash, malformed hashes included.
    #[error("transaction {0} not found")]
    TxNotFound(String),

    /// No route matches the request path.
    #[error("no route for {0}")]
    NoRoute(String),

    /// The transaction index failed.
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TxNotFound(_) | ApiError::NoRoute(_) => StatusCode::NOT_FOUND,
            ApiError::Index(IndexError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Index(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Fault details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Index(IndexError::Unavailable(_)) => "service unavailable".to_string(),
            ApiError::Index(_) => "internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "transaction index fault");
        }

        let body = serde_json::json!({ "error": self.public_message() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_map_to_404() {
        assert_eq!(
            ApiError::TxNotFound("bogus".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NoRoute("/unknown".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let err = ApiError::from(IndexError::Unavailable("down".into()));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_other_faults_map_to_500() {
        let json_err = serde_json::from_str::<u64>("x").unwrap_err();
        let err = ApiError::from(IndexError::Serialization(json_err));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_fault_details_not_exposed() {
        let err = ApiError::from(IndexError::Unavailable("connection refused".into()));
        assert_eq!(err.public_message(), "service unavailable");

        let json_err = serde_json::from_str::<u64>("x").unwrap_err();
        let err = ApiError::from(IndexError::Serialization(json_err));
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ApiError::TxNotFound("abc".into()).to_string(),
            "transaction abc not found"
        );
    }
}
