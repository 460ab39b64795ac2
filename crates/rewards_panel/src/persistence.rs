//! Panel-state persistence: envelope encoding, legacy migration, and the debounced writer.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use panel_host::{build_state_envelope, decode_envelope_payload, PanelStateStore, StateEnvelope};
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::{PanelState, PANEL_STATE_SCHEMA_VERSION},
    reducer::latest_notification_id,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("panel state store failed: {0}")]
    Store(String),
    #[error("panel state is not valid JSON: {0}")]
    Decode(String),
    #[error("panel state schema version {0} is not supported")]
    UnsupportedSchema(u32),
    #[error("panel state could not be encoded: {0}")]
    Encode(String),
}

fn migrate_panel_state(
    schema_version: u32,
    envelope: &StateEnvelope,
) -> Result<PanelState, PersistenceError> {
    match schema_version {
        // Schema 0 is the bare object written before envelopes existed.
        0 | PANEL_STATE_SCHEMA_VERSION => {
            decode_envelope_payload(envelope).map_err(PersistenceError::Decode)
        }
        other => Err(PersistenceError::UnsupportedSchema(other)),
    }
}

/// Decodes stored panel state, accepting both envelopes and legacy bare objects.
///
/// # Errors
///
/// Returns [`PersistenceError::Decode`] for malformed JSON or payloads and
/// [`PersistenceError::UnsupportedSchema`] for envelopes written by a newer schema.
pub fn decode_panel_state(raw: &str) -> Result<PanelState, PersistenceError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| PersistenceError::Decode(e.to_string()))?;
    let envelope = if StateEnvelope::looks_like_envelope(&value) {
        serde_json::from_value::<StateEnvelope>(value)
            .map_err(|e| PersistenceError::Decode(e.to_string()))?
    } else {
        StateEnvelope {
            envelope_version: 0,
            schema_version: 0,
            updated_at_unix_ms: 0,
            payload: value,
        }
    };
    let mut state = migrate_panel_state(envelope.schema_version, &envelope)?;
    if !state.current_notification_is_valid() {
        state.current_notification = latest_notification_id(&state);
    }
    Ok(state)
}

/// Encodes panel state into a versioned envelope.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] when serialization fails.
pub fn encode_panel_state(state: &PanelState) -> Result<String, PersistenceError> {
    let envelope = build_state_envelope(PANEL_STATE_SCHEMA_VERSION, state)
        .map_err(PersistenceError::Encode)?;
    serde_json::to_string(&envelope).map_err(|e| PersistenceError::Encode(e.to_string()))
}

/// Loads panel state from `store`.
///
/// # Errors
///
/// Returns an error when the store fails or holds undecodable data. `Ok(None)` means nothing
/// has been saved yet.
pub fn try_load_panel_state(
    store: &dyn PanelStateStore,
) -> Result<Option<PanelState>, PersistenceError> {
    let Some(raw) = store.load_panel_state().map_err(PersistenceError::Store)? else {
        return Ok(None);
    };
    decode_panel_state(&raw).map(Some)
}

/// Loads panel state from `store`, falling back to the default state on absence or failure.
pub fn load_panel_state(store: &dyn PanelStateStore) -> PanelState {
    match try_load_panel_state(store) {
        Ok(state) => state.unwrap_or_default(),
        Err(err) => {
            logging::warn!("rewards panel state load failed: {err}");
            PanelState::default()
        }
    }
}

/// Encodes and saves panel state through `store`.
///
/// # Errors
///
/// Returns an error when encoding or the store write fails.
pub async fn save_panel_state(
    store: &dyn PanelStateStore,
    state: &PanelState,
) -> Result<(), PersistenceError> {
    let raw = encode_panel_state(state)?;
    store
        .save_panel_state(&raw)
        .await
        .map_err(PersistenceError::Store)
}

#[derive(Debug, Clone)]
struct PendingSave {
    state: Rc<PanelState>,
    due_at_ms: u64,
}

/// Trailing-edge debouncer for panel-state saves.
///
/// Every [`DebouncedSave::schedule`] replaces the pending state and pushes the deadline out by
/// the window; [`DebouncedSave::take_due`] yields the latest state once the deadline has passed.
#[derive(Debug, Clone)]
pub struct DebouncedSave {
    window_ms: u64,
    pending: Rc<RefCell<Option<PendingSave>>>,
}

impl DebouncedSave {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Records `state` as the next value to save. Returns the deadline in unix milliseconds.
    pub fn schedule(&self, state: Rc<PanelState>, now_ms: u64) -> u64 {
        let due_at_ms = now_ms.saturating_add(self.window_ms);
        *self.pending.borrow_mut() = Some(PendingSave { state, due_at_ms });
        due_at_ms
    }

    /// Takes the pending state if its deadline is at or before `now_ms`.
    pub fn take_due(&self, now_ms: u64) -> Option<Rc<PanelState>> {
        let due = self
            .pending
            .borrow()
            .as_ref()
            .map(|save| save.due_at_ms <= now_ms)
            .unwrap_or(false);
        if due {
            self.flush()
        } else {
            None
        }
    }

    /// Takes the pending state regardless of its deadline.
    pub fn flush(&self) -> Option<Rc<PanelState>> {
        self.pending.borrow_mut().take().map(|save| save.state)
    }

    /// Milliseconds until the pending save is due, or `None` when nothing is pending.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.pending
            .borrow()
            .as_ref()
            .map(|save| save.due_at_ms.saturating_sub(now_ms))
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
