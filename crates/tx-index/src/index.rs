//! Lookup service over a [`TxStore`].

use std::sync::Arc;

use crate::{Result, TxId, TxRecord, TxStore};

/// Outcome of a lookup. Absence is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(Arc<TxRecord>),
    NotFound,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// Converts into an `Option`, dropping the distinction to a plain value.
    pub fn into_option(self) -> Option<Arc<TxRecord>> {
        match self {
            LookupResult::Found(record) => Some(record),
            LookupResult::NotFound => None,
        }
    }
}

impl From<Option<Arc<TxRecord>>> for LookupResult {
    fn from(record: Option<Arc<TxRecord>>) -> Self {
        match record {
            Some(record) => LookupResult::Found(record),
            None => LookupResult::NotFound,
        }
    }
}

/// Read-only transaction index.
///
/// Any string is an acceptable key: unknown and malformed hashes alike resolve
/// to [`LookupResult::NotFound`]. Errors are only returned for storage faults.
pub struct TxIndex<S: TxStore> {
    store: S,
}

impl<S: TxStore> TxIndex<S> {
    /// Creates an index backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves `hash` to its record.
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, hash: &str) -> Result<LookupResult> {
        let id = TxId::from(hash);
        match self.store.get(&id).await {
            Ok(Some(record)) => {
                metrics::counter!("tx_lookups_total", "outcome" => "found").increment(1);
                Ok(LookupResult::Found(record))
            }
            Ok(None) => {
                metrics::counter!("tx_lookups_total", "outcome" => "not_found").increment(1);
                tracing::debug!("transaction not found");
                Ok(LookupResult::NotFound)
            }
            Err(err) => {
                metrics::counter!("tx_lookups_total", "outcome" => "error").increment(1);
                tracing::warn!(error = %err, "transaction lookup failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndexError, InMemoryTxStore};
    use async_trait::async_trait;

    struct UnreachableStore;

    #[async_trait]
    impl TxStore for UnreachableStore {
        async fn get(&self, _hash: &TxId) -> Result<Option<Arc<TxRecord>>> {
            Err(IndexError::Unavailable("connection refused".to_string()))
        }
    }

    async fn seeded_index() -> TxIndex<InMemoryTxStore> {
        let store = InMemoryTxStore::new();
        store
            .insert(TxRecord::builder("abc123").coin("BNB.RUNE", 10).build())
            .await
            .unwrap();
        TxIndex::new(store)
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let index = seeded_index().await;

        let result = index.lookup("abc123").await.unwrap();
        let record = result.into_option().unwrap();
        assert_eq!(record.amount, 10);
        assert_eq!(record.asset, "BNB.RUNE");
    }

    #[tokio::test]
    async fn test_lookup_unknown_is_not_found() {
        let index = seeded_index().await;
        assert_eq!(index.lookup("def456").await.unwrap(), LookupResult::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_malformed_is_not_found() {
        let index = seeded_index().await;
        for hash in ["bogus", "", "ABC123", "abc123 ", "../etc/passwd"] {
            assert_eq!(
                index.lookup(hash).await.unwrap(),
                LookupResult::NotFound,
                "hash {hash:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_lookup_is_idempotent() {
        let index = seeded_index().await;

        let first = index.lookup("abc123").await.unwrap();
        let second = index.lookup("abc123").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(index.store().len().await, 1);
    }

    #[tokio::test]
    async fn test_store_fault_is_an_error() {
        let index = TxIndex::new(UnreachableStore);
        let err = index.lookup("abc123").await.unwrap_err();
        assert!(matches!(err, IndexError::Unavailable(_)));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(LookupResult::from(None), LookupResult::NotFound);
        let record = Arc::new(TxRecord::builder("x").build());
        assert!(LookupResult::from(Some(record)).is_found());
    }
}
