//! Stored transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{TxId, TxStatus};

/// An observed inbound transaction, keyed by its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    pub hash: TxId,
    #[serde(default)]
    pub status: TxStatus,
    #[serde(default)]
    pub chain: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub asset: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub block_height: u64,
    /// Number of outbound transactions this inbound one should produce.
    #[serde(default)]
    pub num_outs: u64,
    #[serde(default)]
    pub out_hashes: Vec<TxId>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl TxRecord {
    /// Creates a builder for a record stored under `hash`.
    pub fn builder(hash: impl Into<TxId>) -> TxRecordBuilder {
        TxRecordBuilder::new(hash.into())
    }

    /// Records an outbound transaction hash.
    ///
    /// Hashes already present are ignored. Once as many outbound hashes as
    /// `num_outs` have been seen, the record moves to `status`.
    pub fn record_out_hash(&mut self, status: TxStatus, hash: TxId) {
        if self.out_hashes.contains(&hash) {
            return;
        }
        self.out_hashes.push(hash);
        if self.out_hashes.len() as u64 >= self.num_outs {
            self.status = status;
        }
    }

    pub fn mark_done(&mut self, hash: TxId) {
        self.record_out_hash(TxStatus::Done, hash);
    }

    pub fn mark_reverted(&mut self, hash: TxId) {
        self.record_out_hash(TxStatus::Reverted, hash);
    }
}

/// Builder for [`TxRecord`]. Only the hash is required.
#[derive(Debug, Clone)]
pub struct TxRecordBuilder {
    record: TxRecord,
}

impl TxRecordBuilder {
    fn new(hash: TxId) -> Self {
        Self {
            record: TxRecord {
                hash,
                status: TxStatus::Incomplete,
                chain: String::new(),
                sender: String::new(),
                receiver: String::new(),
                asset: String::new(),
                amount: 0,
                memo: String::new(),
                block_height: 0,
                num_outs: 0,
                out_hashes: Vec::new(),
                timestamp: Utc::now(),
            },
        }
    }

    pub fn status(mut self, status: TxStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.record.chain = chain.into();
        self
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.record.sender = sender.into();
        self
    }

    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.record.receiver = receiver.into();
        self
    }

    /// Sets the asset symbol and amount together.
    pub fn coin(mut self, asset: impl Into<String>, amount: u64) -> Self {
        self.record.asset = asset.into();
        self.record.amount = amount;
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.record.amount = amount;
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.record.memo = memo.into();
        self
    }

    pub fn block_height(mut self, height: u64) -> Self {
        self.record.block_height = height;
        self
    }

    pub fn num_outs(mut self, num_outs: u64) -> Self {
        self.record.num_outs = num_outs;
        self
    }

    /// Sets the timestamp. If not set, the current time is used.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.record.timestamp = timestamp;
        self
    }

    pub fn build(self) -> TxRecord {
        self.record
    }
}
