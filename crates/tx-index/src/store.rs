use std::sync::Arc;

use async_trait::async_trait;

use crate::{Result, TxId, TxRecord};

/// Read capability over stored transaction records.
///
/// This is the only thing the lookup path needs from storage, so an in-memory
/// map, an embedded key-value store or a remote service can sit behind it.
/// Implementations must return `Ok(None)` for unknown hashes and reserve
/// `Err` for infrastructure failures.
#[async_trait]
pub trait TxStore: Send + Sync {
    /// Fetches the record stored under `hash`, if any.
    async fn get(&self, hash: &TxId) -> Result<Option<Arc<TxRecord>>>;
}

