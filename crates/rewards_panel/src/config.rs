//! Runtime configuration for the rewards panel.

use serde::{Deserialize, Serialize};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "rewards-panel-data";
/// Save coalescing window used when none is configured.
pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 50;

/// How the runtime decides whether a reducer step needs persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDetection {
    /// Any new state reference is saved, even when its content is equal.
    Identity,
    /// A new state reference is saved only when its content differs.
    #[default]
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Panel runtime settings. Every field is optional in the JSON form.
pub struct PanelConfig {
    /// Key under which the panel state is stored.
    pub storage_key: String,
    /// Trailing-edge window for coalescing saves.
    pub save_debounce_ms: u64,
    /// Rule that decides whether a new state is persisted.
    pub change_detection: ChangeDetection,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            save_debounce_ms: DEFAULT_SAVE_DEBOUNCE_MS,
            change_detection: ChangeDetection::default(),
        }
    }
}

impl PanelConfig {
    /// Parses a JSON config document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error message when `raw` is not a valid config object.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(
            PanelConfig::from_json_str("{}").expect("parse"),
            PanelConfig::default()
        );
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config = PanelConfig::from_json_str(
            r#"{"save_debounce_ms": 250, "change_detection": "identity"}"#,
        )
        .expect("parse");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.save_debounce_ms, 250);
        assert_eq!(config.change_detection, ChangeDetection::Identity);
    }

    #[test]
    fn unknown_change_detection_is_rejected() {
        assert!(PanelConfig::from_json_str(r#"{"change_detection": "deep"}"#).is_err());
    }
}
