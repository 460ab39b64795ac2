//! Inbound action message envelope shared by the extension event bus and the panel runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A tagged event with an optional JSON payload, as delivered by the extension event bus.
pub struct ActionMessage {
    /// Action kind, for example `ON_NOTIFICATION_ADDED`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific payload; `Null` when the event carries none.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl ActionMessage {
    /// Creates a message without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    /// Creates a message with a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn action_message_uses_type_tag_and_omits_empty_payload() {
        let value = serde_json::to_value(ActionMessage::new("CREATE_WALLET")).expect("serialize");
        assert_eq!(value, json!({"type": "CREATE_WALLET"}));
    }

    #[test]
    fn action_message_without_payload_decodes_to_null_payload() {
        let message: ActionMessage =
            serde_json::from_value(json!({"type": "GET_CURRENT_REPORT"})).expect("decode");
        assert_eq!(message.kind, "GET_CURRENT_REPORT");
        assert!(message.payload.is_null());
    }
}
