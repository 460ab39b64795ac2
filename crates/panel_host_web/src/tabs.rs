//! Tab lookup adapter backed by `chrome.tabs.get`.

use panel_host::{TabDescriptor, TabsFuture, TabsService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Extension tab adapter.
pub struct ExtensionTabsService;

impl TabsService for ExtensionTabsService {
    fn fetch_tab(&self, tab_id: i64) -> TabsFuture<'_, Result<Option<TabDescriptor>, String>> {
        Box::pin(bridge::tabs_get(tab_id))
    }
}
