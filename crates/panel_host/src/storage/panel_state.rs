//! Panel-state store contracts and adapters.
//!
//! Loading is synchronous because the panel state must exist before the first action is
//! processed; saving is asynchronous and is only ever reached through the debounced writer.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PanelStateStore::save_panel_state`].
pub type PanelStateStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Durable storage for the serialized panel state (JSON text).
pub trait PanelStateStore {
    /// Loads the raw JSON previously saved, if any.
    fn load_panel_state(&self) -> Result<Option<String>, String>;

    /// Replaces the saved raw JSON.
    fn save_panel_state<'a>(
        &'a self,
        raw_json: &'a str,
    ) -> PanelStateStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store that never holds state.
pub struct NoopPanelStateStore;

impl PanelStateStore for NoopPanelStateStore {
    fn load_panel_state(&self) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_panel_state<'a>(
        &'a self,
        _raw_json: &'a str,
    ) -> PanelStateStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store that also counts completed saves.
pub struct MemoryPanelStateStore {
    raw: Rc<RefCell<Option<String>>>,
    saves: Rc<RefCell<usize>>,
}

impl MemoryPanelStateStore {
    /// Creates a store pre-populated with `raw_json`.
    pub fn with_raw(raw_json: impl Into<String>) -> Self {
        let store = Self::default();
        *store.raw.borrow_mut() = Some(raw_json.into());
        store
    }

    /// Returns how many saves have completed.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl PanelStateStore for MemoryPanelStateStore {
    fn load_panel_state(&self) -> Result<Option<String>, String> {
        Ok(self.raw.borrow().clone())
    }

    fn save_panel_state<'a>(
        &'a self,
        raw_json: &'a str,
    ) -> PanelStateStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            *self.raw.borrow_mut() = Some(raw_json.to_string());
            *self.saves.borrow_mut() += 1;
            Ok(())
        })
    }
}
