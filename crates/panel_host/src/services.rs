//! Host service bundle assembled by the entry layer and injected into the panel runtime.

use std::rc::Rc;

use crate::{
    BadgeService, MemoryBadgeService, MemoryNotificationService, MemoryPanelStateStore,
    MemoryRewardsService, MemoryTabsService, NoopBadgeService, NoopNotificationService,
    NoopPanelStateStore, NoopRewardsService, NoopTabsService, NotificationService,
    PanelStateStore, RewardsService, TabsService,
};

#[derive(Clone)]
/// Concrete service handles for one host strategy.
pub struct HostServices {
    /// Rewards wallet/publisher API.
    pub rewards: Rc<dyn RewardsService>,
    /// Tab inspection API.
    pub tabs: Rc<dyn TabsService>,
    /// Rewards notification API.
    pub notifications: Rc<dyn NotificationService>,
    /// Toolbar badge display.
    pub badge: Rc<dyn BadgeService>,
    /// Durable panel-state storage.
    pub store: Rc<dyn PanelStateStore>,
    /// Stable name of the host strategy that produced the bundle.
    pub strategy_name: &'static str,
}

impl HostServices {
    /// Returns a bundle in which every service is a no-op.
    pub fn noop() -> Self {
        Self {
            rewards: Rc::new(NoopRewardsService),
            tabs: Rc::new(NoopTabsService),
            notifications: Rc::new(NoopNotificationService),
            badge: Rc::new(NoopBadgeService),
            store: Rc::new(NoopPanelStateStore),
            strategy_name: "noop",
        }
    }

    /// Returns a bundle backed by the given in-memory services.
    pub fn memory(
        rewards: MemoryRewardsService,
        tabs: MemoryTabsService,
        notifications: MemoryNotificationService,
        badge: MemoryBadgeService,
        store: MemoryPanelStateStore,
    ) -> Self {
        Self {
            rewards: Rc::new(rewards),
            tabs: Rc::new(tabs),
            notifications: Rc::new(notifications),
            badge: Rc::new(badge),
            store: Rc::new(store),
            strategy_name: "memory",
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("strategy_name", &self.strategy_name)
            .finish_non_exhaustive()
    }
}
