//! Transaction lookup endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use tx_index::{LookupResult, TxIndex, TxRecord, TxStore};

use crate::error::ApiError;

const TX_PREFIX: &str = "/tx/";

/// Shared application state accessible from all handlers.
pub struct AppState<S: TxStore> {
    pub index: TxIndex<S>,
}

impl<S: TxStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            index: TxIndex::new(store),
        }
    }
}

/// GET /tx/{hash} — resolve a transaction by hash.
///
/// Unknown and malformed hashes both answer 404, including segments that do
/// not decode to UTF-8.
#[tracing::instrument(skip(state, uri, hash))]
pub async fn get<S: TxStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    uri: Uri,
    hash: Result<Path<String>, PathRejection>,
) -> Result<Json<TxRecord>, ApiError> {
    let hash = match hash {
        Ok(Path(hash)) => hash,
        Err(rejection) => {
            let raw = raw_segment(&uri);
            tracing::debug!(hash = %raw, error = %rejection, "undecodable hash segment");
            return Err(ApiError::TxNotFound(raw));
        }
    };

    match state.index.lookup(&hash).await? {
        LookupResult::Found(record) => Ok(Json(TxRecord::clone(&record))),
        LookupResult::NotFound => Err(ApiError::TxNotFound(hash)),
    }
}

/// The hash segment as sent, still percent-encoded.
fn raw_segment(uri: &Uri) -> String {
    let path = uri.path();
    path.strip_prefix(TX_PREFIX).unwrap_or(path).to_string()
}
