use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Transaction hash reported by ledgers that contain no transactions.
pub const EMPTY_TRANSACTION_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Ledger header as returned by the `ledger` method.
///
/// The object is kept verbatim; only `transaction_hash` is ever inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerHeader(Map<String, Value>);

impl LedgerHeader {
    /// Wraps a header object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The `transaction_hash` field, if present and a string.
    pub fn transaction_hash(&self) -> Option<&str> {
        self.0.get("transaction_hash").and_then(Value::as_str)
    }

    /// Whether a transaction fetch is needed for this ledger.
    ///
    /// Only the all-zero hash means "no transactions"; a missing hash does not.
    pub fn has_transactions(&self) -> bool {
        self.transaction_hash() != Some(EMPTY_TRANSACTION_HASH)
    }

    /// Header fields in server order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
