pub mod types;

pub use types::{TxId, TxStatus};
