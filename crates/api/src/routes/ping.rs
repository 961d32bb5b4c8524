//! Liveness probe.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct PingResponse {
    pub ping: &'static str,
}

/// /ping — answers `{"ping":"pong"}`.
///
/// Takes no application state so the probe never depends on the index.
pub async fn pong() -> Json<PingResponse> {
    Json(PingResponse { ping: "pong" })
}
