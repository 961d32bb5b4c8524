use serde::{Deserialize, Serialize};

/// Hash identifier of a transaction.
///
/// Opaque to the service: no format is enforced and no case folding is
/// applied, so any string (well-formed or not) can be used to probe the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    /// Creates a transaction id from any string.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TxId {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl From<String> for TxId {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl AsRef<str> for TxId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Processing status of an observed inbound transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// Observed, outbound transactions still pending.
    #[default]
    Incomplete,
    /// All outbound transactions sent.
    Done,
    /// Refunded to the sender.
    Reverted,
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TxStatus::Incomplete => "incomplete",
            TxStatus::Done => "done",
            TxStatus::Reverted => "reverted",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_id_accepts_arbitrary_strings() {
        assert_eq!(TxId::from("bogus").as_str(), "bogus");
        assert!(TxId::new("").is_empty());
    }

    #[test]
    fn tx_id_is_case_sensitive() {
        assert_ne!(TxId::from("abc123"), TxId::from("ABC123"));
    }

    #[test]
    fn tx_id_serializes_as_plain_string() {
        let id = TxId::from("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        let back: TxId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn status_defaults_to_incomplete() {
        assert_eq!(TxStatus::default(), TxStatus::Incomplete);
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&TxStatus::Reverted).unwrap(),
            "\"reverted\""
        );
        assert_eq!(TxStatus::Done.to_string(), "done");
    }
}
