use std::{cmp::Ordering, collections::BTreeMap, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Schema version of the persisted [`PanelState`] payload.
pub const PANEL_STATE_SCHEMA_VERSION: u32 = 1;

/// Notification id as issued by the rewards notification service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub String);

impl NotificationId {
    /// Wraps a raw id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value when the id is a canonical array index (`"0"`, `"17"`).
    fn array_index(&self) -> Option<u32> {
        let raw = self.0.as_str();
        let canonical = raw == "0" || (!raw.is_empty() && !raw.starts_with('0'));
        if canonical && raw.bytes().all(|b| b.is_ascii_digit()) {
            // 2^32 - 1 is not an array index.
            raw.parse().ok().filter(|index| *index != u32::MAX)
        } else {
            None
        }
    }
}

/// Enumeration order of notification keys: array-index ids ascending, then the rest in
/// insertion order.
fn key_order(a: &NotificationId, b: &NotificationId) -> Ordering {
    match (a.array_index(), b.array_index()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Notifications keyed by id, enumerated the way the extension enumerates its notification
/// object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct NotificationMap(IndexMap<NotificationId, Notification>);

impl NotificationMap {
    /// Inserts or replaces a notification. A replaced entry keeps its position.
    pub fn insert(&mut self, id: NotificationId, notification: Notification) {
        if let Some(existing) = self.0.get_mut(&id) {
            *existing = notification;
            return;
        }
        if id.array_index().is_some() {
            let position = self
                .0
                .keys()
                .position(|key| key_order(&id, key) == Ordering::Less)
                .unwrap_or(self.0.len());
            self.0.shift_insert(position, id, notification);
        } else {
            self.0.insert(id, notification);
        }
    }

    /// Removes a notification, keeping the order of the others.
    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        self.0.shift_remove(id)
    }

    pub fn contains_key(&self, id: &NotificationId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Notifications in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &Notification> {
        self.0.values()
    }
}

impl<'de> Deserialize<'de> for NotificationMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = IndexMap::<NotificationId, Notification>::deserialize(deserializer)?;
        entries.sort_by(|a, _, b, _| key_order(a, b));
        Ok(Self(entries))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A rewards notification as received from the extension.
pub struct Notification {
    pub id: NotificationId,
    /// Notification type code; rendering is up to the panel UI.
    #[serde(rename = "type")]
    pub notification_type: i64,
    /// Epoch seconds; the latest notification becomes current after a deletion.
    pub timestamp: i64,
    /// Opaque template arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Opaque publisher record. Only `publisher_key` is interpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Publisher(pub Map<String, Value>);

impl Publisher {
    /// Returns `true` when the record carries a truthy `publisher_key`.
    pub fn has_publisher_key(&self) -> bool {
        self.0.get("publisher_key").map(is_truthy).unwrap_or(false)
    }

    /// Test-only accessor for the raw `publisher_key` string.
    #[cfg(test)]
    pub(crate) fn publisher_key(&self) -> Option<&str> {
        self.0.get("publisher_key").and_then(Value::as_str)
    }
}

/// Wallet properties as reported by the rewards service, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletProperties(pub Value);

/// Contribution report as reported by the rewards service, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(pub Value);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Everything the rewards panel remembers between popups.
pub struct PanelState {
    /// Set once the wallet has been created; never cleared.
    pub wallet_created: bool,
    /// Set once wallet creation has failed; never cleared.
    pub wallet_create_failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_properties: Option<WalletProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    /// Publisher of the active tab, keyed by window id.
    pub publishers: BTreeMap<String, Publisher>,
    pub notifications: NotificationMap,
    /// Notification shown in the panel; always a key of `notifications` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_notification: Option<NotificationId>,
}

impl PanelState {
    /// Number of stored notifications, which is what the badge displays.
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    /// Publisher last reported for `window_id`.
    pub fn publisher_for_window(&self, window_id: &str) -> Option<&Publisher> {
        self.publishers.get(window_id)
    }

    /// Returns `true` when `current_notification` is unset or names a stored notification.
    pub fn current_notification_is_valid(&self) -> bool {
        self.current_notification
            .as_ref()
            .map(|id| self.notifications.contains_key(id))
            .unwrap_or(true)
    }
}

/// JavaScript truthiness for JSON values crossing the extension boundary.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0 && !n.is_nan()).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn notification(id: &str) -> Notification {
        Notification {
            id: NotificationId::from(id),
            notification_type: 1,
            timestamp: 0,
            args: Vec::new(),
        }
    }

    fn keys(map: &NotificationMap) -> Vec<&str> {
        map.values().map(|notification| notification.id.as_str()).collect()
    }

    #[test]
    fn index_ids_enumerate_ascending_before_other_ids_in_insertion_order() {
        let mut map = NotificationMap::default();
        for id in ["beta", "10", "alpha", "007", "9", "4294967295", "0"] {
            map.insert(NotificationId::from(id), notification(id));
        }
        assert_eq!(
            keys(&map),
            vec!["0", "9", "10", "beta", "alpha", "007", "4294967295"]
        );

        map.insert(NotificationId::from("beta"), notification("beta"));
        map.remove(&NotificationId::from("9"));
        assert_eq!(
            keys(&map),
            vec!["0", "10", "beta", "alpha", "007", "4294967295"]
        );
    }

    #[test]
    fn notification_order_survives_a_json_reload() {
        let mut map = NotificationMap::default();
        for id in ["c", "2", "a", "1"] {
            map.insert(NotificationId::from(id), notification(id));
        }
        let raw = serde_json::to_string(&map).expect("serialize");
        let reloaded: NotificationMap = serde_json::from_str(&raw).expect("decode");
        assert_eq!(keys(&reloaded), vec!["1", "2", "c", "a"]);

        let unsorted: NotificationMap = serde_json::from_value(json!({
            "b": notification("b"),
            "5": notification("5"),
            "a": notification("a"),
            "3": notification("3")
        }))
        .expect("decode");
        assert_eq!(keys(&unsorted), vec!["3", "5", "b", "a"]);
    }

    #[test]
    fn panel_state_serializes_with_camel_case_fields() {
        let mut state = PanelState {
            wallet_created: true,
            ..PanelState::default()
        };
        state.notifications.insert(
            NotificationId::from("3"),
            Notification {
                id: NotificationId::from("3"),
                notification_type: 2,
                timestamp: 40,
                args: vec![json!("x")],
            },
        );
        state.current_notification = Some(NotificationId::from("3"));

        let value = serde_json::to_value(&state).expect("serialize");
        assert_eq!(
            value,
            json!({
                "walletCreated": true,
                "walletCreateFailed": false,
                "publishers": {},
                "notifications": {
                    "3": {"id": "3", "type": 2, "timestamp": 40, "args": ["x"]}
                },
                "currentNotification": "3"
            })
        );
    }

    #[test]
    fn panel_state_tolerates_missing_fields() {
        let state: PanelState =
            serde_json::from_value(json!({"walletCreated": true})).expect("decode");
        assert!(state.wallet_created);
        assert!(state.notifications.is_empty());
        assert_eq!(state.current_notification, None);
    }

    #[test]
    fn publisher_key_truthiness() {
        let publisher = |value: Value| Publisher(value.as_object().cloned().expect("object"));
        let with_key = publisher(json!({"publisher_key": "brave.com"}));
        let empty_key = publisher(json!({"publisher_key": ""}));
        let null_key = publisher(json!({"publisher_key": null}));

        assert!(with_key.has_publisher_key());
        assert!(!empty_key.has_publisher_key());
        assert!(!null_key.has_publisher_key());
        assert!(!Publisher::default().has_publisher_key());
    }

    #[test]
    fn truthiness_follows_javascript_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(7)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }
}
