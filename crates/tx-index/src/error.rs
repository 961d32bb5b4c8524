//! Transaction index error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::TxId;

/// Faults raised by the transaction index.
///
/// Absence of a record is never an error; see [`crate::LookupResult::NotFound`].
#[derive(Debug, Error)]
pub enum IndexError {
    /// The backing storage could not be reached.
    #[error("Index unavailable: {0}")]
    Unavailable(String),

    /// A record with this hash is already stored.
    #[error("Duplicate transaction hash: {0}")]
    DuplicateHash(TxId),

    /// Reading a seed file failed.
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for transaction index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
