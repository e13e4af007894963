use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outgoing JSON-RPC envelope: `{"method": <name>, "params": [ <object> ]}`.
///
/// Ledger servers take a single parameter object wrapped in a one-element
/// array, so `params` always holds exactly one map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Method name
    pub method: String,

    /// Method parameters
    pub params: [Map<String, Value>; 1],
}

impl RpcRequest {
    /// Creates a new RPC request
    pub fn new<S: Into<String>>(method: S, params: Map<String, Value>) -> Self {
        Self {
            method: method.into(),
            params: [params],
        }
    }

    /// The single parameter object.
    pub fn params(&self) -> &Map<String, Value> {
        &self.params[0]
    }

    /// Serializes the envelope to its wire form.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
