//! Browser-extension (`wasm32`) implementations of [`panel_host`] service contracts.
//!
//! This crate wires the rewards panel to the extension APIs: `chrome.braveRewards`,
//! `chrome.rewardsNotifications`, `chrome.tabs`, and `chrome.browserAction`, plus a
//! `localStorage`-backed panel-state store.
//!
//! Extension calls go through `bridge`, which routes to a wasm implementation or to a non-wasm
//! shim so the crate builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod badge;
mod bridge;
pub mod events;
pub mod notifications;
pub mod rewards;
pub mod storage;
pub mod tabs;

pub use adapters::{
    badge_service, build_host_services, host_strategy_name, notification_service,
    panel_state_store, rewards_service, selected_host_strategy, tabs_service, BadgeServiceAdapter,
    HostStrategy, NotificationServiceAdapter, PanelStateStoreAdapter, RewardsServiceAdapter,
    TabsServiceAdapter,
};
pub use badge::ExtensionBadgeService;
pub use events::{install_event_listeners, ActionSink};
pub use notifications::ExtensionNotificationService;
pub use rewards::ExtensionRewardsService;
pub use storage::local_panel_state::LocalStoragePanelStateStore;
pub use tabs::ExtensionTabsService;
