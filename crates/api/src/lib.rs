//! HTTP API for the transaction index.
//!
//! Serves a liveness probe at `/ping` and transaction lookups at
//! `/tx/{hash}`, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tx_index::TxStore;

use routes::tx::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: TxStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/ping", any(routes::ping::pong))
        .route("/tx/{hash}", get(routes::tx::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps a store into the shared application state.
pub fn create_state<S: TxStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
