use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{IndexError, Result, TxId, TxRecord, TxStore};

/// In-memory transaction store.
///
/// Records are published as `Arc<TxRecord>`: readers clone the pointer under a
/// short read lock, writers build a complete record first and swap it in
/// under the write lock. A reader sees either the previous or the new
/// version of a record, never a partially written one.
#[derive(Clone, Default)]
pub struct InMemoryTxStore {
    records: Arc<RwLock<HashMap<TxId, Arc<TxRecord>>>>,
}

impl InMemoryTxStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`, rejecting duplicate hashes.
    pub fn with_records(records: impl IntoIterator<Item = TxRecord>) -> Result<Self> {
        let mut map = HashMap::new();
        for record in records {
            match map.entry(record.hash.clone()) {
                Entry::Occupied(_) => return Err(IndexError::DuplicateHash(record.hash)),
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(record));
                }
            }
        }
        Ok(Self {
            records: Arc::new(RwLock::new(map)),
        })
    }

    /// Loads a store from a JSON file containing an array of records.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<TxRecord> = serde_json::from_str(&raw)?;
        let store = Self::with_records(records)?;
        tracing::info!(path = %path.display(), "loaded transaction seed file");
        Ok(store)
    }

    /// Stores a new record. Fails if the hash is already present.
    pub async fn insert(&self, record: TxRecord) -> Result<()> {
        let record = Arc::new(record);
        let mut records = self.records.write().await;
        match records.entry(record.hash.clone()) {
            Entry::Occupied(_) => Err(IndexError::DuplicateHash(record.hash.clone())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Publishes a record, replacing any previous version.
    ///
    /// Returns the replaced record, if there was one.
    pub async fn upsert(&self, record: TxRecord) -> Option<Arc<TxRecord>> {
        let record = Arc::new(record);
        self.records
            .write()
            .await
            .insert(record.hash.clone(), record)
    }

    /// Applies `f` to a copy of the current record and publishes the result.
    ///
    /// The copy is built with no lock held. If another writer published a
    /// newer version in the meantime, `f` runs again on that version, so no
    /// update is lost. Returns `false` when no record is stored under `hash`.
    /// The hash of the record cannot be changed through `f`.
    pub async fn update<F>(&self, hash: &TxId, mut f: F) -> bool
    where
        F: FnMut(&mut TxRecord),
    {
        let Some(mut current) = self.records.read().await.get(hash).cloned() else {
            return false;
        };

        loop {
            let mut next = TxRecord::clone(&current);
            f(&mut next);
            next.hash = hash.clone();

            let mut records = self.records.write().await;
            match records.get(hash).cloned() {
                None => return false,
                Some(latest) if Arc::ptr_eq(&latest, &current) => {
                    records.insert(hash.clone(), Arc::new(next));
                    return true;
                }
                Some(latest) => {
                    tracing::debug!(%hash, "record changed during update, retrying");
                    current = latest;
                }
            }
        }
    }

    /// Removes a record, returning it if present.
    pub async fn remove(&self, hash: &TxId) -> Option<Arc<TxRecord>> {
        self.records.write().await.remove(hash)
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TxStore for InMemoryTxStore {
    async fn get(&self, hash: &TxId) -> Result<Option<Arc<TxRecord>>> {
        Ok(self.records.read().await.get(hash).cloned())
    }
}
