//! Reducer actions, side-effect intents, and transition logic for the rewards panel.

use std::rc::Rc;

use panel_host::{badge_text_for_count, TabDescriptor};

use crate::model::{Notification, NotificationId, PanelState, Publisher, Report, WalletProperties};

#[derive(Debug, Clone, PartialEq)]
/// Payload carried by `ON_NOTIFICATION_ADDED`.
pub struct NotificationPayload {
    /// String form of the notification id; `None` when the event omitted it.
    pub id: Option<String>,
    /// Notification type code.
    pub notification_type: i64,
    /// Epoch seconds.
    pub timestamp: i64,
    /// Opaque template arguments.
    pub args: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_panel`].
///
/// Optional fields model payload parts the extension may omit; the reducer treats their absence
/// as a no-op rather than an error.
pub enum PanelAction {
    /// Request wallet creation.
    CreateWallet,
    /// The wallet was created.
    OnWalletCreated,
    /// Wallet creation failed.
    OnWalletCreateFailed,
    /// The active tab id is known; fetch its details.
    OnTabId {
        /// Tab to inspect; `None` when the id was absent or falsy.
        tab_id: Option<i64>,
    },
    /// Tab details arrived.
    OnTabRetrieved {
        /// Retrieved tab, if any.
        tab: Option<TabDescriptor>,
    },
    /// Publisher lookup result for a window.
    OnPublisherData {
        /// Window the lookup was made for, in string form.
        window_id: Option<String>,
        /// Publisher record, if the lookup found one.
        publisher: Option<Publisher>,
    },
    /// Request wallet properties.
    GetWalletProperties,
    /// Wallet properties arrived.
    OnWalletProperties {
        /// New properties; `None` clears them.
        properties: Option<WalletProperties>,
    },
    /// Request the current contribution report.
    GetCurrentReport,
    /// Contribution report arrived.
    OnCurrentReport {
        /// New report; `None` clears it.
        properties: Option<Report>,
    },
    /// A notification was added.
    OnNotificationAdded {
        /// Event payload; `None` when the event had none.
        payload: Option<NotificationPayload>,
    },
    /// Request deletion of a notification.
    DeleteNotification {
        /// Integer-parsed id; `None` when the id did not parse.
        id: Option<i64>,
    },
    /// A notification was deleted.
    OnNotificationDeleted {
        /// String form of the deleted id; `None` when the payload or id was missing.
        id: Option<String>,
    },
    /// Any action kind this reducer does not handle.
    Unknown {
        /// Original action kind.
        kind: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by the reducer and runtime for the host to execute.
pub enum PanelEffect {
    /// Ask the rewards service to create a wallet.
    CreateWallet,
    /// Fetch tab details; the result is dispatched as [`PanelAction::OnTabRetrieved`].
    FetchTabData {
        /// Tab to fetch.
        tab_id: i64,
    },
    /// Ask the rewards service for publisher data of a page.
    GetPublisherData {
        /// Window hosting the page.
        window_id: i64,
        /// Page url.
        url: String,
    },
    /// Ask the rewards service for wallet properties.
    GetWalletProperties,
    /// Ask the rewards service for the current report.
    GetCurrentReport,
    /// Ask the notification service to delete a notification.
    DeleteNotification {
        /// Numeric notification id.
        id: i64,
    },
    /// Replace the toolbar badge text.
    SetBadgeText(String),
    /// Persist the given state through the debounced writer.
    SaveState(Rc<PanelState>),
}

#[derive(Debug, Clone)]
/// Result of one reducer step.
pub struct PanelTransition {
    /// Either the input `Rc` itself (no change) or a newly built state.
    pub state: Rc<PanelState>,
    /// Effects to execute, in order.
    pub effects: Vec<PanelEffect>,
}

impl PanelTransition {
    fn unchanged(state: &Rc<PanelState>) -> Self {
        Self {
            state: Rc::clone(state),
            effects: Vec::new(),
        }
    }

    fn unchanged_with(state: &Rc<PanelState>, effect: PanelEffect) -> Self {
        Self {
            state: Rc::clone(state),
            effects: vec![effect],
        }
    }

    fn replaced(state: PanelState) -> Self {
        Self {
            state: Rc::new(state),
            effects: Vec::new(),
        }
    }

    /// Returns `true` when the step produced a new state reference.
    pub fn is_new_state(&self, previous: &Rc<PanelState>) -> bool {
        !Rc::ptr_eq(&self.state, previous)
    }
}

/// Applies a [`PanelAction`] to the panel state and collects the resulting side effects.
///
/// The input is never modified. The returned state is the same `Rc` when nothing changed and a
/// freshly built value otherwise, so callers can detect changes by pointer identity.
pub fn reduce_panel(state: &Rc<PanelState>, action: PanelAction) -> PanelTransition {
    match action {
        PanelAction::CreateWallet => {
            PanelTransition::unchanged_with(state, PanelEffect::CreateWallet)
        }
        PanelAction::OnWalletCreated => PanelTransition::replaced(PanelState {
            wallet_created: true,
            ..PanelState::clone(state)
        }),
        PanelAction::OnWalletCreateFailed => PanelTransition::replaced(PanelState {
            wallet_create_failed: true,
            ..PanelState::clone(state)
        }),
        PanelAction::OnTabId { tab_id } => match tab_id {
            Some(tab_id) if tab_id != 0 => {
                PanelTransition::unchanged_with(state, PanelEffect::FetchTabData { tab_id })
            }
            _ => PanelTransition::unchanged(state),
        },
        PanelAction::OnTabRetrieved { tab } => {
            let Some(tab) = tab else {
                return PanelTransition::unchanged(state);
            };
            let url = match tab.url {
                Some(url) if !url.is_empty() => url,
                _ => return PanelTransition::unchanged(state),
            };
            if tab.incognito || !tab.active || !state.wallet_created {
                return PanelTransition::unchanged(state);
            }

            // A lookup request always yields a new state reference, even with equal content.
            let mut transition = PanelTransition::replaced(PanelState::clone(state));
            transition.effects.push(PanelEffect::GetPublisherData {
                window_id: tab.window_id,
                url,
            });
            transition
        }
        PanelAction::OnPublisherData {
            window_id,
            publisher,
        } => {
            let Some(window_id) = window_id else {
                return PanelTransition::unchanged(state);
            };
            let mut publishers = state.publishers.clone();
            match publisher.filter(Publisher::has_publisher_key) {
                Some(publisher) => {
                    publishers.insert(window_id, publisher);
                }
                None => {
                    publishers.remove(&window_id);
                }
            }
            PanelTransition::replaced(PanelState {
                publishers,
                ..PanelState::clone(state)
            })
        }
        PanelAction::GetWalletProperties => {
            PanelTransition::unchanged_with(state, PanelEffect::GetWalletProperties)
        }
        PanelAction::OnWalletProperties { properties } => PanelTransition::replaced(PanelState {
            wallet_properties: properties,
            ..PanelState::clone(state)
        }),
        PanelAction::GetCurrentReport => {
            PanelTransition::unchanged_with(state, PanelEffect::GetCurrentReport)
        }
        PanelAction::OnCurrentReport { properties } => PanelTransition::replaced(PanelState {
            report: properties,
            ..PanelState::clone(state)
        }),
        PanelAction::OnNotificationAdded { payload } => {
            let Some((payload, id)) = payload.and_then(|p| p.id.clone().map(|id| (p, id))) else {
                return PanelTransition::unchanged(state);
            };
            let id = NotificationId::new(id);
            let mut next = PanelState::clone(state);
            next.notifications.insert(
                id.clone(),
                Notification {
                    id: id.clone(),
                    notification_type: payload.notification_type,
                    timestamp: payload.timestamp,
                    args: payload.args,
                },
            );
            if next.current_notification.is_none() {
                next.current_notification = Some(id);
            }
            let badge = PanelEffect::SetBadgeText(badge_text_for_count(next.notification_count()));
            let mut transition = PanelTransition::replaced(next);
            transition.effects.push(badge);
            transition
        }
        PanelAction::DeleteNotification { id } => match id {
            Some(id) => {
                PanelTransition::unchanged_with(state, PanelEffect::DeleteNotification { id })
            }
            None => PanelTransition::unchanged(state),
        },
        PanelAction::OnNotificationDeleted { id } => {
            let Some(id) = id else {
                return PanelTransition::unchanged(state);
            };
            let id = NotificationId::new(id);
            let mut next = PanelState::clone(state);
            next.notifications.remove(&id);
            if next.current_notification.as_ref() == Some(&id) {
                next.current_notification = latest_notification_id(&next);
            }
            let badge = PanelEffect::SetBadgeText(badge_text_for_count(next.notification_count()));
            let mut transition = PanelTransition::replaced(next);
            transition.effects.push(badge);
            transition
        }
        PanelAction::Unknown { .. } => PanelTransition::unchanged(state),
    }
}

/// Picks the notification with the greatest timestamp, scanning in key order.
///
/// Only a strictly greater timestamp replaces the running best, so among equal timestamps the
/// first one in key order wins.
pub(crate) fn latest_notification_id(state: &PanelState) -> Option<NotificationId> {
    state
        .notifications
        .values()
        .fold(None::<&Notification>, |best, candidate| match best {
            Some(best) if candidate.timestamp <= best.timestamp => Some(best),
            _ => Some(candidate),
        })
        .map(|notification| notification.id.clone())
}
