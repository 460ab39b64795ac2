//! Tab inspection contracts and baseline adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`TabsService`].
pub type TabsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The subset of a browser tab the rewards panel inspects.
pub struct TabDescriptor {
    /// Browser tab id, when the platform reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Window hosting the tab.
    #[serde(default)]
    pub window_id: i64,
    /// Page url; absent for tabs the extension may not read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether the tab belongs to a private window.
    #[serde(default)]
    pub incognito: bool,
    /// Whether the tab is the active one in its window.
    #[serde(default)]
    pub active: bool,
}

/// Host service that resolves tab ids into [`TabDescriptor`] values.
pub trait TabsService {
    /// Fetches the descriptor for `tab_id`. `Ok(None)` means the tab no longer exists.
    fn fetch_tab(&self, tab_id: i64) -> TabsFuture<'_, Result<Option<TabDescriptor>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op tab service that never finds a tab.
pub struct NoopTabsService;

impl TabsService for NoopTabsService {
    fn fetch_tab(&self, _tab_id: i64) -> TabsFuture<'_, Result<Option<TabDescriptor>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory tab service keyed by tab id.
pub struct MemoryTabsService {
    tabs: Rc<RefCell<HashMap<i64, TabDescriptor>>>,
}

impl MemoryTabsService {
    /// Registers (or replaces) the descriptor returned for `tab_id`.
    pub fn insert(&self, tab_id: i64, tab: TabDescriptor) {
        self.tabs.borrow_mut().insert(tab_id, tab);
    }
}

impl TabsService for MemoryTabsService {
    fn fetch_tab(&self, tab_id: i64) -> TabsFuture<'_, Result<Option<TabDescriptor>, String>> {
        Box::pin(async move { Ok(self.tabs.borrow().get(&tab_id).cloned()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    #[test]
    fn tab_descriptor_reads_extension_tab_shape() {
        let tab: TabDescriptor = serde_json::from_value(json!({
            "id": 12,
            "windowId": 4,
            "url": "https://brave.com",
            "incognito": false,
            "active": true,
            "pinned": false
        }))
        .expect("decode tab");

        assert_eq!(tab.id, Some(12));
        assert_eq!(tab.window_id, 4);
        assert_eq!(tab.url.as_deref(), Some("https://brave.com"));
        assert!(tab.active);
        assert!(!tab.incognito);
    }

    #[test]
    fn memory_tabs_service_returns_registered_tabs_only() {
        let service = MemoryTabsService::default();
        service.insert(
            7,
            TabDescriptor {
                id: Some(7),
                window_id: 2,
                url: Some("https://a.test".to_string()),
                incognito: false,
                active: true,
            },
        );
        let service_obj: &dyn TabsService = &service;

        let found = block_on(service_obj.fetch_tab(7)).expect("fetch");
        assert_eq!(found.map(|tab| tab.window_id), Some(2));
        assert_eq!(block_on(service_obj.fetch_tab(8)).expect("fetch"), None);
    }
}
