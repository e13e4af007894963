//! Error types for ledger RPC operations.

use serde_json::Value;
use thiserror::Error;

/// Faults raised while talking to a ledger server.
///
/// Every fault is terminal for a run: nothing here is retried.
#[derive(Error, Debug)]
pub enum LedgerFault {
    /// The request never completed a round trip.
    #[error("transport failure: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// The response body could not be parsed as JSON.
    #[error("malformed response body: {message}")]
    Decode {
        /// Parser detail.
        message: String,
    },

    /// The response parsed but violates the envelope contract.
    #[error("protocol violation: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// The envelope is well formed but its status is not `success`.
    #[error("server answered '{status}', not success")]
    Service {
        /// Status string reported by the server (empty if missing).
        status: String,
        /// The full `result` object, kept for diagnostics.
        payload: Value,
    },

    /// The domain payload is missing or has the wrong type.
    #[error("unexpected response shape: {what}")]
    Shape {
        /// Description of what was expected.
        what: String,
        /// The reply the payload was extracted from.
        payload: Value,
    },
}

impl LedgerFault {
    /// Create a transport fault.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a protocol fault.
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a shape fault carrying the offending reply.
    pub fn shape<S: Into<String>>(what: S, payload: Value) -> Self {
        Self::Shape {
            what: what.into(),
            payload,
        }
    }

    /// Raw server payload attached to this fault, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Service { payload, .. } | Self::Shape { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LedgerFault {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Result type for ledger RPC operations.
pub type LedgerResult<T> = std::result::Result<T, LedgerFault>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_exposed_for_service_and_shape_faults() {
        let service = LedgerFault::Service {
            status: "error".to_string(),
            payload: json!({"status": "error", "error": "lgrNotFound"}),
        };
        assert_eq!(service.payload().unwrap()["error"], "lgrNotFound");

        let shape = LedgerFault::shape("ledger object", json!({"result": {}}));
        assert!(shape.payload().is_some());

        assert!(LedgerFault::transport("refused").payload().is_none());
        assert!(LedgerFault::protocol("result not object").payload().is_none());
    }

    #[test]
    fn decode_fault_keeps_parser_detail() {
        let err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let fault = LedgerFault::from(err);
        assert!(matches!(fault, LedgerFault::Decode { ref message } if message.contains("line 1")));
    }

    #[test]
    fn service_fault_display_names_status() {
        let fault = LedgerFault::Service {
            status: "error".to_string(),
            payload: Value::Null,
        };
        assert_eq!(fault.to_string(), "server answered 'error', not success");
    }
}
