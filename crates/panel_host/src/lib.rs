//! Typed host-domain contracts shared by the rewards panel runtime and its browser adapters.
//!
//! This crate is the API-first boundary for extension services. It exposes the rewards,
//! tab-inspection, notification, badge, and panel-state storage traits together with the
//! inbound action message envelope, while concrete extension bindings live in
//! `panel_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod badge;
pub mod message;
pub mod notifications;
pub mod rewards;
pub mod services;
pub mod storage;
pub mod tabs;
pub mod time;

pub use badge::{badge_text_for_count, BadgeService, MemoryBadgeService, NoopBadgeService};
pub use message::ActionMessage;
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationService,
};
pub use rewards::{
    MemoryRewardsService, NoopRewardsService, RewardsCall, RewardsFuture, RewardsService,
};
pub use services::HostServices;
pub use storage::envelope::{
    build_state_envelope, decode_envelope_payload, StateEnvelope, STATE_ENVELOPE_VERSION,
};
pub use storage::panel_state::{
    MemoryPanelStateStore, NoopPanelStateStore, PanelStateStore, PanelStateStoreFuture,
};
pub use tabs::{MemoryTabsService, NoopTabsService, TabDescriptor, TabsFuture, TabsService};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
