//! Leptos provider and context wiring for the rewards panel.
//!
//! The provider owns the [`PanelRuntime`], the reactive state signal, and the effect queue. It
//! hydrates persisted state on mount and subscribes to the extension's rewards events.
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;
use panel_host::{ActionMessage, HostServices};

use crate::{
    config::PanelConfig,
    effect_executor,
    host::PanelHostContext,
    model::PanelState,
    reducer::{PanelAction, PanelEffect},
    runtime::PanelRuntime,
};

#[derive(Clone, Copy)]
/// Leptos context for reading panel state and dispatching [`PanelAction`] values.
pub struct PanelRuntimeContext {
    /// Host services and save debouncer used to execute effects.
    pub host: StoredValue<PanelHostContext>,
    /// Reducer container that threads state between dispatches.
    pub runtime: StoredValue<PanelRuntime>,
    /// Reactive panel state. Updated only when the reducer returns a new state.
    pub state: RwSignal<Rc<PanelState>>,
    /// Queue of effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<PanelEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PanelAction>,
}

impl PanelRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PanelAction) {
        self.dispatch.call(action);
    }

    /// Decodes an inbound extension message and dispatches it.
    pub fn dispatch_message(&self, message: &ActionMessage) {
        self.dispatch_action(PanelAction::from_message(message));
    }
}

fn enqueue(effects: RwSignal<Vec<PanelEffect>>, new_effects: Vec<PanelEffect>) {
    if new_effects.is_empty() {
        return;
    }
    let mut queue = effects.get_untracked();
    queue.extend(new_effects);
    effects.set(queue);
}

fn publish_state(runtime: StoredValue<PanelRuntime>, state: RwSignal<Rc<PanelState>>) {
    let Some(next) = runtime.with_value(PanelRuntime::state) else {
        return;
    };
    if !Rc::ptr_eq(&next, &state.get_untracked()) {
        state.set(next);
    }
}

fn install_panel_orchestration(runtime: PanelRuntimeContext) {
    logging::log!(
        "rewards panel host strategy: {}",
        runtime.host.get_value().host_strategy_name()
    );
    let mut hydration = Vec::new();
    runtime
        .runtime
        .update_value(|panel| hydration = panel.hydrate());
    publish_state(runtime.runtime, runtime.state);
    enqueue(runtime.effects, hydration);

    let sink: panel_host_web::ActionSink =
        Rc::new(move |message: ActionMessage| runtime.dispatch_message(&message));
    if let Err(err) = panel_host_web::install_event_listeners(sink) {
        logging::warn!("rewards event listeners unavailable: {err}");
    }

    effect_executor::install(runtime);
}

#[component]
/// Provides [`PanelRuntimeContext`] to descendant components and hydrates persisted state.
pub fn PanelProvider(
    /// Runtime configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<PanelConfig>,
    /// Injected host bundle; the extension bindings are used when omitted.
    #[prop(optional)]
    host_services: Option<HostServices>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let services = host_services
        .unwrap_or_else(|| panel_host_web::build_host_services(&config.storage_key));
    let panel = PanelRuntime::new(Rc::clone(&services.store), config.change_detection);
    let host = store_value(PanelHostContext::new(services, &config));
    let runtime = store_value(panel);
    let state = create_rw_signal(Rc::new(PanelState::default()));
    let effects = create_rw_signal(Vec::<PanelEffect>::new());

    let dispatch = Callback::new(move |action: PanelAction| {
        let mut new_effects = Vec::new();
        runtime.update_value(|panel| new_effects = panel.dispatch(action));
        publish_state(runtime, state);
        enqueue(effects, new_effects);
    });

    let context = PanelRuntimeContext {
        host,
        runtime,
        state,
        effects,
        dispatch,
    };

    provide_context(context.clone());

    install_panel_orchestration(context);

    on_cleanup(move || {
        if let Some(host) = host.try_get_value() {
            host.flush_pending_save();
        }
    });

    children().into_view()
}

/// Returns the current [`PanelRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PanelProvider`].
pub fn use_panel_runtime() -> PanelRuntimeContext {
    use_context::<PanelRuntimeContext>().expect("PanelRuntimeContext not provided")
}
