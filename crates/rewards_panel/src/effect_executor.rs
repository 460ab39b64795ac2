//! Effect-queue executor for reducer-emitted panel effects.

use leptos::*;

use crate::runtime_context::PanelRuntimeContext;

/// Installs the executor that drains queued panel effects in emission order.
pub fn install(runtime: PanelRuntimeContext) {
    // Clear the queue before running so follow-up dispatches enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_panel_effect(runtime, effect);
        }
    });
}
