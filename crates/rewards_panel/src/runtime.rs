//! Long-lived reducer container: first-load hydration and persistence triggering.

use std::rc::Rc;

use panel_host::{badge_text_for_count, PanelStateStore};

use crate::{
    config::ChangeDetection,
    model::PanelState,
    persistence,
    reducer::{reduce_panel, PanelAction, PanelEffect, PanelTransition},
};

/// Threads [`PanelState`] through successive reducer steps.
///
/// The state is loaded from the store on the first dispatch, together with a badge refresh for
/// the loaded notification count. Each later dispatch emits [`PanelEffect::SaveState`] when the
/// reducer returns a new state that the configured [`ChangeDetection`] considers changed.
pub struct PanelRuntime {
    store: Rc<dyn PanelStateStore>,
    change_detection: ChangeDetection,
    state: Option<Rc<PanelState>>,
}

impl PanelRuntime {
    pub fn new(store: Rc<dyn PanelStateStore>, change_detection: ChangeDetection) -> Self {
        Self {
            store,
            change_detection,
            state: None,
        }
    }

    /// Returns the current state, or `None` before the first dispatch.
    pub fn state(&self) -> Option<Rc<PanelState>> {
        self.state.clone()
    }

    /// Loads the state from the store if that has not happened yet.
    ///
    /// Returns the badge refresh for the loaded notification count on the first call and no
    /// effects afterwards.
    pub fn hydrate(&mut self) -> Vec<PanelEffect> {
        let mut effects = Vec::new();
        self.ensure_loaded(&mut effects);
        effects
    }

    /// Runs one action and returns the effects to execute, in order.
    pub fn dispatch(&mut self, action: PanelAction) -> Vec<PanelEffect> {
        let mut effects = Vec::new();
        let previous = self.ensure_loaded(&mut effects);

        let transition = reduce_panel(&previous, action);
        let save = needs_save(&previous, &transition, self.change_detection);
        effects.extend(transition.effects);
        if save {
            effects.push(PanelEffect::SaveState(Rc::clone(&transition.state)));
        }
        self.state = Some(transition.state);
        effects
    }

    fn ensure_loaded(&mut self, effects: &mut Vec<PanelEffect>) -> Rc<PanelState> {
        if let Some(state) = self.state.as_ref() {
            return Rc::clone(state);
        }
        let loaded = Rc::new(persistence::load_panel_state(self.store.as_ref()));
        effects.push(PanelEffect::SetBadgeText(badge_text_for_count(
            loaded.notification_count(),
        )));
        self.state = Some(Rc::clone(&loaded));
        loaded
    }
}

fn needs_save(
    previous: &Rc<PanelState>,
    transition: &PanelTransition,
    mode: ChangeDetection,
) -> bool {
    if !transition.is_new_state(previous) {
        return false;
    }
    match mode {
        ChangeDetection::Identity => true,
        ChangeDetection::Content => *previous != transition.state,
    }
}

#[cfg(test)]
mod tests {
    use panel_host::{MemoryPanelStateStore, TabDescriptor};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::NotificationId, persistence::encode_panel_state, reducer::NotificationPayload,
    };

    fn runtime(store: MemoryPanelStateStore, mode: ChangeDetection) -> PanelRuntime {
        PanelRuntime::new(Rc::new(store), mode)
    }

    fn added(id: &str, timestamp: i64) -> PanelAction {
        PanelAction::OnNotificationAdded {
            payload: Some(NotificationPayload {
                id: Some(id.to_string()),
                notification_type: 1,
                timestamp,
                args: Vec::new(),
            }),
        }
    }

    fn saves(effects: &[PanelEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, PanelEffect::SaveState(_)))
            .count()
    }

    #[test]
    fn first_dispatch_loads_state_and_initializes_badge() {
        let mut seeded = PanelState::default();
        for id in ["1", "2"] {
            seeded.notifications.insert(
                NotificationId::from(id),
                crate::model::Notification {
                    id: NotificationId::from(id),
                    notification_type: 1,
                    timestamp: 1,
                    args: Vec::new(),
                },
            );
        }
        seeded.current_notification = Some(NotificationId::from("1"));
        let store = MemoryPanelStateStore::with_raw(encode_panel_state(&seeded).expect("encode"));
        let mut runtime = runtime(store, ChangeDetection::Content);
        assert!(runtime.state().is_none());

        let effects = runtime.dispatch(PanelAction::Unknown {
            kind: "NOOP".to_string(),
        });

        assert_eq!(effects, vec![PanelEffect::SetBadgeText("2".to_string())]);
        assert_eq!(*runtime.state().expect("state"), seeded);
    }

    #[test]
    fn empty_store_starts_from_default_state_with_cleared_badge() {
        let mut runtime = runtime(MemoryPanelStateStore::default(), ChangeDetection::Content);
        let effects = runtime.dispatch(PanelAction::GetCurrentReport);
        assert_eq!(
            effects,
            vec![
                PanelEffect::SetBadgeText(String::new()),
                PanelEffect::GetCurrentReport,
            ]
        );
        assert_eq!(*runtime.state().expect("state"), PanelState::default());
    }

    #[test]
    fn changed_state_is_saved_and_unchanged_state_is_not() {
        let mut runtime = runtime(MemoryPanelStateStore::default(), ChangeDetection::Content);
        runtime.dispatch(PanelAction::GetWalletProperties);
        let before = runtime.state().expect("state");

        let effects = runtime.dispatch(added("5", 100));
        let after = runtime.state().expect("state");
        assert_eq!(
            effects,
            vec![
                PanelEffect::SetBadgeText("1".to_string()),
                PanelEffect::SaveState(Rc::clone(&after)),
            ]
        );
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.current_notification, Some(NotificationId::from("5")));

        let effects = runtime.dispatch(PanelAction::Unknown {
            kind: "NOOP".to_string(),
        });
        assert!(effects.is_empty());
        assert!(Rc::ptr_eq(&after, &runtime.state().expect("state")));
    }

    #[test]
    fn malformed_notification_does_not_touch_badge_or_store() {
        let mut runtime = runtime(MemoryPanelStateStore::default(), ChangeDetection::Identity);
        runtime.dispatch(PanelAction::GetCurrentReport);
        let effects = runtime.dispatch(PanelAction::OnNotificationAdded { payload: None });
        assert!(effects.is_empty());
    }

    #[test]
    fn tab_lookup_copy_is_saved_only_under_identity_detection() {
        let tab = TabDescriptor {
            id: Some(3),
            window_id: 1,
            url: Some("https://brave.com".to_string()),
            incognito: false,
            active: true,
        };

        for (mode, expected_saves) in [
            (ChangeDetection::Identity, 1),
            (ChangeDetection::Content, 0),
        ] {
            let mut runtime = runtime(MemoryPanelStateStore::default(), mode);
            runtime.dispatch(PanelAction::OnWalletCreated);
            let effects = runtime.dispatch(PanelAction::OnTabRetrieved {
                tab: Some(tab.clone()),
            });
            assert_eq!(saves(&effects), expected_saves, "{mode:?}");
            assert!(effects.contains(&PanelEffect::GetPublisherData {
                window_id: 1,
                url: "https://brave.com".to_string(),
            }));
        }
    }

    #[test]
    fn default_config_requests_publisher_data_without_saving_an_equal_copy() {
        let config = crate::config::PanelConfig::default();
        assert_eq!(config.change_detection, ChangeDetection::Content);

        let mut runtime = runtime(MemoryPanelStateStore::default(), config.change_detection);
        runtime.dispatch(PanelAction::OnWalletCreated);
        let before = runtime.state().expect("state");
        let effects = runtime.dispatch(PanelAction::OnTabRetrieved {
            tab: Some(TabDescriptor {
                id: Some(3),
                window_id: 1,
                url: Some("https://brave.com".to_string()),
                incognito: false,
                active: true,
            }),
        });

        assert_eq!(
            effects,
            vec![PanelEffect::GetPublisherData {
                window_id: 1,
                url: "https://brave.com".to_string(),
            }]
        );
        let after = runtime.state().expect("state");
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before, after);
    }

    #[test]
    fn hydrate_loads_once() {
        let mut runtime = runtime(MemoryPanelStateStore::default(), ChangeDetection::Content);
        assert_eq!(
            runtime.hydrate(),
            vec![PanelEffect::SetBadgeText(String::new())]
        );
        assert!(runtime.hydrate().is_empty());
        assert_eq!(
            runtime.dispatch(PanelAction::CreateWallet),
            vec![PanelEffect::CreateWallet]
        );
    }

    #[test]
    fn loading_the_initial_state_is_not_itself_a_save() {
        let mut runtime = runtime(MemoryPanelStateStore::default(), ChangeDetection::Identity);
        let effects = runtime.dispatch(PanelAction::CreateWallet);
        assert_eq!(saves(&effects), 0);
    }
}
