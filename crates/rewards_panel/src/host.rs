//! Host-side execution of reducer effects for the mounted panel.
//!
//! Requests and tab lookups run as local tasks through [`execute_effect`]; badge updates run
//! inline; saves are coalesced by a [`DebouncedSave`] armed with browser timers.

use std::{rc::Rc, time::Duration};

use leptos::{logging, set_timeout, spawn_local, Callable};
use panel_host::{unix_time_ms_now, HostServices};

use crate::{
    config::PanelConfig,
    effects::execute_effect,
    model::PanelState,
    persistence::{self, DebouncedSave},
    reducer::PanelEffect,
    runtime_context::PanelRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle plus the save debouncer shared by every effect of one panel instance.
pub struct PanelHostContext {
    services: HostServices,
    debounce: DebouncedSave,
}

impl PanelHostContext {
    pub fn new(services: HostServices, config: &PanelConfig) -> Self {
        Self {
            services,
            debounce: DebouncedSave::new(config.save_debounce_ms),
        }
    }

    /// Returns the name of the host strategy the services were built for.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.strategy_name
    }

    /// Executes one reducer effect. Follow-up actions are dispatched back through `runtime`.
    pub fn run_panel_effect(&self, runtime: PanelRuntimeContext, effect: PanelEffect) {
        match effect {
            PanelEffect::SaveState(state) => self.schedule_save(state),
            PanelEffect::SetBadgeText(text) => {
                if let Err(err) = self.services.badge.set_badge_text(&text) {
                    logging::warn!("set badge text failed: {err}");
                }
            }
            effect => {
                let services = self.services.clone();
                spawn_local(async move {
                    match execute_effect(&services, effect).await {
                        Ok(Some(action)) => runtime.dispatch.call(action),
                        Ok(None) => {}
                        Err(err) => logging::warn!("rewards panel effect failed: {err}"),
                    }
                });
            }
        }
    }

    fn schedule_save(&self, state: Rc<PanelState>) {
        if self.debounce.window_ms() == 0 {
            self.save_now(state);
            return;
        }
        self.debounce.schedule(state, unix_time_ms_now());
        let host = self.clone();
        set_timeout(
            move || host.flush_due_save(),
            Duration::from_millis(self.debounce.window_ms()),
        );
    }

    fn flush_due_save(&self) {
        let now_ms = unix_time_ms_now();
        if let Some(state) = self.debounce.take_due(now_ms) {
            self.save_now(state);
            return;
        }
        // A later schedule moved the deadline; wait out the remainder.
        if let Some(remaining_ms) = self.debounce.remaining_ms(now_ms) {
            let host = self.clone();
            set_timeout(
                move || host.flush_due_save(),
                Duration::from_millis(remaining_ms),
            );
        }
    }

    /// Writes any pending debounced save immediately.
    pub fn flush_pending_save(&self) {
        if let Some(state) = self.debounce.flush() {
            self.save_now(state);
        }
    }

    fn save_now(&self, state: Rc<PanelState>) {
        let store = Rc::clone(&self.services.store);
        spawn_local(async move {
            if let Err(err) = persistence::save_panel_state(store.as_ref(), &state).await {
                logging::warn!("persist rewards panel state failed: {err}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_context_reports_strategy_and_window() {
        let config = PanelConfig {
            save_debounce_ms: 125,
            ..PanelConfig::default()
        };
        let host = PanelHostContext::new(HostServices::noop(), &config);
        assert_eq!(host.host_strategy_name(), "noop");
        assert_eq!(host.debounce.window_ms(), 125);
        assert!(!host.debounce.has_pending());
    }
}
