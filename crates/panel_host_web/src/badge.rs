//! Toolbar badge adapter backed by `chrome.browserAction.setBadgeText`.

use panel_host::BadgeService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Extension badge adapter.
pub struct ExtensionBadgeService;

impl BadgeService for ExtensionBadgeService {
    fn set_badge_text(&self, text: &str) -> Result<(), String> {
        bridge::badge_set_text(text)
    }
}
