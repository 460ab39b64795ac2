//! Versioned envelope wrapped around persisted panel state.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Version for [`StateEnvelope`] metadata serialization.
pub const STATE_ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Versioned envelope for a persisted state payload.
pub struct StateEnvelope {
    /// Envelope schema version.
    pub envelope_version: u32,
    /// Owner-defined schema version for the payload.
    pub schema_version: u32,
    /// Last update time in unix milliseconds.
    pub updated_at_unix_ms: u64,
    /// Serialized payload.
    pub payload: Value,
}

impl StateEnvelope {
    /// Creates a new envelope stamped with a monotonic timestamp.
    pub fn new(schema_version: u32, payload: Value) -> Self {
        Self {
            envelope_version: STATE_ENVELOPE_VERSION,
            schema_version,
            updated_at_unix_ms: crate::time::next_monotonic_timestamp_ms(),
            payload,
        }
    }

    /// Returns `true` when `value` has the envelope's required metadata fields.
    ///
    /// Stores written before envelopes were introduced hold the bare payload object instead.
    pub fn looks_like_envelope(value: &Value) -> bool {
        value
            .as_object()
            .map(|object| {
                object.contains_key("envelope_version")
                    && object.contains_key("schema_version")
                    && object.contains_key("payload")
            })
            .unwrap_or(false)
    }
}

/// Builds a versioned [`StateEnvelope`] from a serializable payload.
///
/// # Errors
///
/// Returns an error when `payload` cannot be converted to JSON.
pub fn build_state_envelope<T: Serialize>(
    schema_version: u32,
    payload: &T,
) -> Result<StateEnvelope, String> {
    let payload = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    Ok(StateEnvelope::new(schema_version, payload))
}

/// Deserializes an envelope payload into a target type.
///
/// # Errors
///
/// Returns an error when deserialization fails.
pub fn decode_envelope_payload<T: DeserializeOwned>(envelope: &StateEnvelope) -> Result<T, String> {
    serde_json::from_value(envelope.payload.clone()).map_err(|e| e.to_string())
}
