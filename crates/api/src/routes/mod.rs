//! Route handlers.

pub mod metrics;
pub mod ping;
pub mod tx;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NoRoute(uri.path().to_string())
}
