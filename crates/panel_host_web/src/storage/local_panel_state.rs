//! `localStorage`-backed panel-state store.
//!
//! Loads are synchronous at the browser API boundary so the panel can hydrate before its first
//! dispatch; saves implement the async [`PanelStateStore`] contract.

use panel_host::{PanelStateStore, PanelStateStoreFuture};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Panel-state store backed by `window.localStorage` under a fixed key.
pub struct LocalStoragePanelStateStore {
    key: String,
}

impl LocalStoragePanelStateStore {
    /// Creates a store that reads and writes `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl PanelStateStore for LocalStoragePanelStateStore {
    fn load_panel_state(&self) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(&self.key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(None)
        }
    }

    fn save_panel_state<'a>(
        &'a self,
        raw_json: &'a str,
    ) -> PanelStateStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                local_storage()?
                    .set_item(&self.key, raw_json)
                    .map_err(|e| format!("localStorage set_item failed: {e:?}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = raw_json;
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_build_reads_nothing_and_accepts_writes() {
        let store = LocalStoragePanelStateStore::new("rewards-panel-data");
        assert_eq!(store.key(), "rewards-panel-data");
        assert_eq!(store.load_panel_state(), Ok(None));
        assert_eq!(block_on(store.save_panel_state("{}")), Ok(()));
    }
}
