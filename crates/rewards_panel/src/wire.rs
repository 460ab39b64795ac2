//! Decoding of inbound [`ActionMessage`] values into typed [`PanelAction`]s.
//!
//! Payload fields are read with the extension's loose conventions: ids may arrive as numbers or
//! strings, falsy values count as absent, and numeric ids are parsed with `parseInt` rules.
//! Decoding never fails; anything unreadable becomes an absent field, which the reducer treats
//! as a no-op.

use panel_host::{ActionMessage, TabDescriptor};
use serde_json::Value;

use crate::{
    model::{is_truthy, Publisher, Report, WalletProperties},
    reducer::{NotificationPayload, PanelAction},
};

/// Prefix the extension's action-type constants may carry.
pub const ACTION_KIND_PREFIX: &str = "@@rewards_panel/";

/// Action kinds, without [`ACTION_KIND_PREFIX`].
pub mod kinds {
    /// Request wallet creation.
    pub const CREATE_WALLET: &str = "CREATE_WALLET";
    /// Wallet creation succeeded.
    pub const ON_WALLET_CREATED: &str = "ON_WALLET_CREATED";
    /// Wallet creation failed.
    pub const ON_WALLET_CREATE_FAILED: &str = "ON_WALLET_CREATE_FAILED";
    /// Active tab id is known; payload `{tabId}`.
    pub const ON_TAB_ID: &str = "ON_TAB_ID";
    /// Tab details arrived; payload `{tab}`.
    pub const ON_TAB_RETRIEVED: &str = "ON_TAB_RETRIEVED";
    /// Publisher lookup result; payload `{windowId, publisher}`.
    pub const ON_PUBLISHER_DATA: &str = "ON_PUBLISHER_DATA";
    /// Request wallet properties.
    pub const GET_WALLET_PROPERTIES: &str = "GET_WALLET_PROPERTIES";
    /// Wallet properties arrived; payload `{properties}`.
    pub const ON_WALLET_PROPERTIES: &str = "ON_WALLET_PROPERTIES";
    /// Request the current report.
    pub const GET_CURRENT_REPORT: &str = "GET_CURRENT_REPORT";
    /// Current report arrived; payload `{properties}`.
    pub const ON_CURRENT_REPORT: &str = "ON_CURRENT_REPORT";
    /// Notification added; payload `{id, type, timestamp, args}`.
    pub const ON_NOTIFICATION_ADDED: &str = "ON_NOTIFICATION_ADDED";
    /// Request notification deletion; payload `{id}`.
    pub const DELETE_NOTIFICATION: &str = "DELETE_NOTIFICATION";
    /// Notification deleted; payload `{id}`.
    pub const ON_NOTIFICATION_DELETED: &str = "ON_NOTIFICATION_DELETED";
}

impl PanelAction {
    /// Decodes an inbound message. Unrecognized kinds become [`PanelAction::Unknown`].
    pub fn from_message(message: &ActionMessage) -> Self {
        let kind = message
            .kind
            .strip_prefix(ACTION_KIND_PREFIX)
            .unwrap_or(&message.kind);
        let payload = &message.payload;

        match kind {
            kinds::CREATE_WALLET => Self::CreateWallet,
            kinds::ON_WALLET_CREATED => Self::OnWalletCreated,
            kinds::ON_WALLET_CREATE_FAILED => Self::OnWalletCreateFailed,
            kinds::ON_TAB_ID => Self::OnTabId {
                tab_id: field(payload, "tabId").filter(|v| is_truthy(v)).and_then(parse_int),
            },
            kinds::ON_TAB_RETRIEVED => Self::OnTabRetrieved {
                tab: field(payload, "tab")
                    .filter(|v| v.is_object())
                    .and_then(|v| serde_json::from_value::<TabDescriptor>(v.clone()).ok()),
            },
            kinds::ON_PUBLISHER_DATA => Self::OnPublisherData {
                window_id: field(payload, "windowId")
                    .filter(|v| !v.is_null())
                    .map(js_to_string),
                publisher: field(payload, "publisher")
                    .and_then(Value::as_object)
                    .map(|object| Publisher(object.clone())),
            },
            kinds::GET_WALLET_PROPERTIES => Self::GetWalletProperties,
            kinds::ON_WALLET_PROPERTIES => Self::OnWalletProperties {
                properties: field(payload, "properties")
                    .filter(|v| !v.is_null())
                    .map(|v| WalletProperties(v.clone())),
            },
            kinds::GET_CURRENT_REPORT => Self::GetCurrentReport,
            kinds::ON_CURRENT_REPORT => Self::OnCurrentReport {
                properties: field(payload, "properties")
                    .filter(|v| !v.is_null())
                    .map(|v| Report(v.clone())),
            },
            kinds::ON_NOTIFICATION_ADDED => Self::OnNotificationAdded {
                payload: is_truthy(payload).then(|| NotificationPayload {
                    id: truthy_id(payload),
                    notification_type: field(payload, "type").and_then(as_integer).unwrap_or(0),
                    timestamp: field(payload, "timestamp").and_then(as_integer).unwrap_or(0),
                    args: field(payload, "args")
                        .and_then(Value::as_array)
                        .cloned()
                        .unwrap_or_default(),
                }),
            },
            kinds::DELETE_NOTIFICATION => Self::DeleteNotification {
                id: field(payload, "id").and_then(parse_int),
            },
            kinds::ON_NOTIFICATION_DELETED => Self::OnNotificationDeleted {
                id: truthy_id(payload),
            },
            _ => Self::Unknown {
                kind: message.kind.clone(),
            },
        }
    }
}

fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.as_object().and_then(|object| object.get(name))
}

fn truthy_id(payload: &Value) -> Option<String> {
    field(payload, "id").filter(|v| is_truthy(v)).map(js_to_string)
}

/// String conversion with JavaScript `toString` results for scalar values.
fn js_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(n), _) => n.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => number.to_string(),
        },
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}

/// `parseInt(String(value), 10)`: optional sign followed by leading decimal digits.
pub fn parse_int(value: &Value) -> Option<i64> {
    let text = js_to_string(value);
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn decode(kind: &str, payload: Value) -> PanelAction {
        PanelAction::from_message(&ActionMessage::with_payload(kind, payload))
    }

    #[test]
    fn prefixed_and_bare_kinds_decode_alike() {
        assert_eq!(
            decode("@@rewards_panel/CREATE_WALLET", Value::Null),
            PanelAction::CreateWallet
        );
        assert_eq!(decode("CREATE_WALLET", Value::Null), PanelAction::CreateWallet);
        assert_eq!(
            decode("@@other/CREATE_WALLET", Value::Null),
            PanelAction::Unknown {
                kind: "@@other/CREATE_WALLET".to_string()
            }
        );
    }

    #[test]
    fn notification_added_reads_numeric_ids_as_strings() {
        assert_eq!(
            decode(
                kinds::ON_NOTIFICATION_ADDED,
                json!({"id": 5, "type": 1, "timestamp": 100, "args": []})
            ),
            PanelAction::OnNotificationAdded {
                payload: Some(NotificationPayload {
                    id: Some("5".to_string()),
                    notification_type: 1,
                    timestamp: 100,
                    args: Vec::new(),
                })
            }
        );
    }

    #[test]
    fn notification_events_without_payload_or_id_decode_as_absent() {
        assert_eq!(
            decode(kinds::ON_NOTIFICATION_ADDED, Value::Null),
            PanelAction::OnNotificationAdded { payload: None }
        );
        assert_eq!(
            decode(kinds::ON_NOTIFICATION_ADDED, json!({"id": 0, "timestamp": 3})),
            PanelAction::OnNotificationAdded {
                payload: Some(NotificationPayload {
                    id: None,
                    notification_type: 0,
                    timestamp: 3,
                    args: Vec::new(),
                })
            }
        );
        assert_eq!(
            decode(kinds::ON_NOTIFICATION_DELETED, json!({"id": ""})),
            PanelAction::OnNotificationDeleted { id: None }
        );
        assert_eq!(
            decode(kinds::ON_NOTIFICATION_DELETED, json!({"id": "12"})),
            PanelAction::OnNotificationDeleted {
                id: Some("12".to_string())
            }
        );
    }

    #[test]
    fn delete_notification_uses_parse_int_rules() {
        assert_eq!(
            decode(kinds::DELETE_NOTIFICATION, json!({"id": "42"})),
            PanelAction::DeleteNotification { id: Some(42) }
        );
        assert_eq!(
            decode(kinds::DELETE_NOTIFICATION, json!({"id": " 17abc"})),
            PanelAction::DeleteNotification { id: Some(17) }
        );
        assert_eq!(
            decode(kinds::DELETE_NOTIFICATION, json!({"id": 8.9})),
            PanelAction::DeleteNotification { id: Some(8) }
        );
        assert_eq!(
            decode(kinds::DELETE_NOTIFICATION, json!({"id": "abc"})),
            PanelAction::DeleteNotification { id: None }
        );
    }

    #[test]
    fn publisher_data_stringifies_window_ids() {
        assert_eq!(
            decode(
                kinds::ON_PUBLISHER_DATA,
                json!({"windowId": 7, "publisher": {"publisher_key": null}})
            ),
            PanelAction::OnPublisherData {
                window_id: Some("7".to_string()),
                publisher: Some(Publisher(
                    json!({"publisher_key": null}).as_object().cloned().unwrap()
                )),
            }
        );
        assert_eq!(
            decode(kinds::ON_PUBLISHER_DATA, json!({"publisher": null})),
            PanelAction::OnPublisherData {
                window_id: None,
                publisher: None,
            }
        );
    }

    #[test]
    fn tab_events_decode_tab_descriptors() {
        assert_eq!(
            decode(kinds::ON_TAB_ID, json!({"tabId": 0})),
            PanelAction::OnTabId { tab_id: None }
        );
        assert_eq!(
            decode(kinds::ON_TAB_ID, json!({"tabId": 31})),
            PanelAction::OnTabId { tab_id: Some(31) }
        );
        assert_eq!(
            decode(
                kinds::ON_TAB_RETRIEVED,
                json!({"tab": {
                    "windowId": 2,
                    "url": "https://a.test",
                    "incognito": true,
                    "active": true
                }})
            ),
            PanelAction::OnTabRetrieved {
                tab: Some(TabDescriptor {
                    id: None,
                    window_id: 2,
                    url: Some("https://a.test".to_string()),
                    incognito: true,
                    active: true,
                })
            }
        );
        assert_eq!(
            decode(kinds::ON_TAB_RETRIEVED, json!({})),
            PanelAction::OnTabRetrieved { tab: None }
        );
    }

    #[test]
    fn wallet_properties_and_report_pass_json_through() {
        assert_eq!(
            decode(kinds::ON_WALLET_PROPERTIES, json!({"properties": {"balance": 4}})),
            PanelAction::OnWalletProperties {
                properties: Some(WalletProperties(json!({"balance": 4})))
            }
        );
        assert_eq!(
            decode(kinds::ON_CURRENT_REPORT, json!({})),
            PanelAction::OnCurrentReport { properties: None }
        );
    }
}
