use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Continuation token returned by `ledger_data`.
///
/// Opaque: it is sent back exactly as received. Only the leading characters
/// are looked at, and only for progress estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(Value);

impl Marker {
    /// Wraps a marker value. `null` is not a marker and yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            other => Some(Self(other)),
        }
    }

    /// The marker text, when the server sent a string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// The marker as sent by the server.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for Marker {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

/// One page of a ledger's state tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePage {
    /// State entries in server traversal order.
    pub entries: Vec<Value>,

    /// Token for the next page; `None` ends the traversal.
    pub marker: Option<Marker>,
}

impl StatePage {
    /// Whether this is the final page of the traversal.
    pub fn is_last(&self) -> bool {
        self.marker.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_not_a_marker() {
        assert!(Marker::from_value(Value::Null).is_none());
        assert!(Marker::from_value(json!("00AB")).is_some());
    }

    #[test]
    fn marker_is_kept_verbatim() {
        let m = Marker::from_value(json!({"opaque": [1, 2]})).unwrap();
        assert_eq!(m.as_value(), &json!({"opaque": [1, 2]}));
        assert_eq!(m.as_str(), None);
    }

    #[test]
    fn page_without_marker_is_last() {
        let page = StatePage::default();
        assert!(page.is_last());

        let page = StatePage {
            entries: vec![],
            marker: Some(Marker::from("7F00")),
        };
        assert!(!page.is_last());
    }
}
