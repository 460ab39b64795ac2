//! Rewards panel state management: reducer, persistence, and the Leptos runtime provider.

pub mod config;
pub mod effect_executor;
pub mod effects;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime;
pub mod runtime_context;
pub mod wire;

pub use config::{ChangeDetection, PanelConfig};
pub use effects::execute_effect;
pub use host::PanelHostContext;
pub use model::*;
pub use persistence::{
    decode_panel_state, encode_panel_state, load_panel_state, save_panel_state,
    try_load_panel_state, DebouncedSave, PersistenceError,
};
pub use reducer::{reduce_panel, NotificationPayload, PanelAction, PanelEffect, PanelTransition};
pub use runtime::PanelRuntime;
pub use runtime_context::{use_panel_runtime, PanelProvider, PanelRuntimeContext};
