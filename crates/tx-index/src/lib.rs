//! Transaction index for the lookup service.
//!
//! Records are resolved by hash through the [`TxStore`] capability. The
//! [`TxIndex`] wraps a store and folds every kind of absence (unknown or
//! malformed hash) into [`LookupResult::NotFound`], reserving errors for
//! storage faults.

pub mod error;
pub mod index;
pub mod memory;
pub mod record;
pub mod store;

pub use common::{TxId, TxStatus};
pub use error::{IndexError, Result};
pub use index::{LookupResult, TxIndex};
pub use memory::InMemoryTxStore;
pub use record::{TxRecord, TxRecordBuilder};
pub use store::TxStore;
