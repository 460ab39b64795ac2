//! Notification service adapter backed by `chrome.rewardsNotifications`.

use panel_host::{NotificationFuture, NotificationService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Extension notification adapter.
pub struct ExtensionNotificationService;

impl NotificationService for ExtensionNotificationService {
    fn delete_notification(&self, id: i64) -> NotificationFuture<'_, Result<(), String>> {
        Box::pin(bridge::notifications_delete(id))
    }
}
