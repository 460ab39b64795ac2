use std::rc::Rc;

use panel_host::{
    BadgeService, HostServices, NoopBadgeService, NoopNotificationService, NoopPanelStateStore,
    NoopRewardsService, NoopTabsService, NotificationFuture, NotificationService,
    PanelStateStore, PanelStateStoreFuture, RewardsFuture, RewardsService, TabDescriptor,
    TabsFuture, TabsService,
};

use crate::{
    ExtensionBadgeService, ExtensionNotificationService, ExtensionRewardsService,
    ExtensionTabsService, LocalStoragePanelStateStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `panel_host_web` adapters.
pub enum HostStrategy {
    /// Extension-backed adapters talking to the `chrome.*` namespaces.
    Extension,
    /// No-op adapters for builds that render the panel outside an extension page.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "extension-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "extension-host-stub"))]
    {
        HostStrategy::Extension
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Extension => "extension",
        HostStrategy::Stub => "extension-stub",
    }
}

/// Adapter enum that erases the concrete rewards backend behind [`RewardsService`].
#[derive(Debug, Clone, Copy)]
pub enum RewardsServiceAdapter {
    /// `chrome.braveRewards` requests.
    Extension(ExtensionRewardsService),
    /// No-op fallback.
    Stub(NoopRewardsService),
}

impl RewardsService for RewardsServiceAdapter {
    fn create_wallet(&self) -> RewardsFuture<'_, Result<(), String>> {
        match self {
            Self::Extension(service) => service.create_wallet(),
            Self::Stub(service) => service.create_wallet(),
        }
    }

    fn get_wallet_properties(&self) -> RewardsFuture<'_, Result<(), String>> {
        match self {
            Self::Extension(service) => service.get_wallet_properties(),
            Self::Stub(service) => service.get_wallet_properties(),
        }
    }

    fn get_current_report(&self) -> RewardsFuture<'_, Result<(), String>> {
        match self {
            Self::Extension(service) => service.get_current_report(),
            Self::Stub(service) => service.get_current_report(),
        }
    }

    fn get_publisher_data<'a>(
        &'a self,
        window_id: i64,
        url: &'a str,
    ) -> RewardsFuture<'a, Result<(), String>> {
        match self {
            Self::Extension(service) => service.get_publisher_data(window_id, url),
            Self::Stub(service) => service.get_publisher_data(window_id, url),
        }
    }
}

/// Adapter enum that erases the concrete tab backend behind [`TabsService`].
#[derive(Debug, Clone, Copy)]
pub enum TabsServiceAdapter {
    /// `chrome.tabs.get` lookups.
    Extension(ExtensionTabsService),
    /// No-op fallback that never finds a tab.
    Stub(NoopTabsService),
}

impl TabsService for TabsServiceAdapter {
    fn fetch_tab(&self, tab_id: i64) -> TabsFuture<'_, Result<Option<TabDescriptor>, String>> {
        match self {
            Self::Extension(service) => service.fetch_tab(tab_id),
            Self::Stub(service) => service.fetch_tab(tab_id),
        }
    }
}

/// Adapter enum that erases the concrete notification backend behind [`NotificationService`].
#[derive(Debug, Clone, Copy)]
pub enum NotificationServiceAdapter {
    /// `chrome.rewardsNotifications` requests.
    Extension(ExtensionNotificationService),
    /// No-op fallback.
    Stub(NoopNotificationService),
}

impl NotificationService for NotificationServiceAdapter {
    fn delete_notification(&self, id: i64) -> NotificationFuture<'_, Result<(), String>> {
        match self {
            Self::Extension(service) => service.delete_notification(id),
            Self::Stub(service) => service.delete_notification(id),
        }
    }
}

/// Adapter enum that erases the concrete badge backend behind [`BadgeService`].
#[derive(Debug, Clone, Copy)]
pub enum BadgeServiceAdapter {
    /// `chrome.browserAction` badge.
    Extension(ExtensionBadgeService),
    /// No-op fallback.
    Stub(NoopBadgeService),
}

impl BadgeService for BadgeServiceAdapter {
    fn set_badge_text(&self, text: &str) -> Result<(), String> {
        match self {
            Self::Extension(service) => service.set_badge_text(text),
            Self::Stub(service) => service.set_badge_text(text),
        }
    }
}

/// Adapter enum that erases the concrete storage backend behind [`PanelStateStore`].
#[derive(Debug, Clone)]
pub enum PanelStateStoreAdapter {
    /// `localStorage` persistence.
    Extension(LocalStoragePanelStateStore),
    /// No-op fallback that never holds state.
    Stub(NoopPanelStateStore),
}

impl PanelStateStore for PanelStateStoreAdapter {
    fn load_panel_state(&self) -> Result<Option<String>, String> {
        match self {
            Self::Extension(store) => store.load_panel_state(),
            Self::Stub(store) => store.load_panel_state(),
        }
    }

    fn save_panel_state<'a>(
        &'a self,
        raw_json: &'a str,
    ) -> PanelStateStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Extension(store) => store.save_panel_state(raw_json),
            Self::Stub(store) => store.save_panel_state(raw_json),
        }
    }
}

/// Builds the rewards adapter for the compile-time selected host strategy.
pub fn rewards_service() -> RewardsServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Extension => RewardsServiceAdapter::Extension(ExtensionRewardsService),
        HostStrategy::Stub => RewardsServiceAdapter::Stub(NoopRewardsService),
    }
}

/// Builds the tab adapter for the compile-time selected host strategy.
pub fn tabs_service() -> TabsServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Extension => TabsServiceAdapter::Extension(ExtensionTabsService),
        HostStrategy::Stub => TabsServiceAdapter::Stub(NoopTabsService),
    }
}

/// Builds the notification adapter for the compile-time selected host strategy.
pub fn notification_service() -> NotificationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Extension => {
            NotificationServiceAdapter::Extension(ExtensionNotificationService)
        }
        HostStrategy::Stub => NotificationServiceAdapter::Stub(NoopNotificationService),
    }
}

/// Builds the badge adapter for the compile-time selected host strategy.
pub fn badge_service() -> BadgeServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Extension => BadgeServiceAdapter::Extension(ExtensionBadgeService),
        HostStrategy::Stub => BadgeServiceAdapter::Stub(NoopBadgeService),
    }
}

/// Builds the panel-state store for the compile-time selected host strategy.
pub fn panel_state_store(storage_key: &str) -> PanelStateStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Extension => {
            PanelStateStoreAdapter::Extension(LocalStoragePanelStateStore::new(storage_key))
        }
        HostStrategy::Stub => PanelStateStoreAdapter::Stub(NoopPanelStateStore),
    }
}

/// Assembles the full [`HostServices`] bundle for the selected host strategy.
pub fn build_host_services(storage_key: &str) -> HostServices {
    HostServices {
        rewards: Rc::new(rewards_service()),
        tabs: Rc::new(tabs_service()),
        notifications: Rc::new(notification_service()),
        badge: Rc::new(badge_service()),
        store: Rc::new(panel_state_store(storage_key)),
        strategy_name: host_strategy_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = match selected_host_strategy() {
            HostStrategy::Extension => "extension",
            HostStrategy::Stub => "extension-stub",
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn host_services_carry_strategy_and_storage_key() {
        let services = build_host_services("panel-key");
        assert_eq!(services.strategy_name, host_strategy_name());
        match panel_state_store("panel-key") {
            PanelStateStoreAdapter::Extension(store) => assert_eq!(store.key(), "panel-key"),
            PanelStateStoreAdapter::Stub(_) => {
                assert_eq!(selected_host_strategy(), HostStrategy::Stub)
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_store_starts_empty() {
        let services = build_host_services("panel-key");
        assert_eq!(services.store.load_panel_state(), Ok(None));
    }
}
