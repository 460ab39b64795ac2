//! Panel-state storage contracts and the versioned envelope persisted around the state.

pub mod envelope;
pub mod panel_state;
