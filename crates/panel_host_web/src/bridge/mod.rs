//! Extension API bridge used by the `panel_host_web` service adapters.
//!
//! Every function here forwards to `interop`, which selects the wasm bindings or the non-wasm
//! shim at compile time.

mod interop;

use panel_host::{ActionMessage, TabDescriptor};

pub async fn rewards_create_wallet() -> Result<(), String> {
    interop::rewards_create_wallet().await
}

pub async fn rewards_get_wallet_properties() -> Result<(), String> {
    interop::rewards_get_wallet_properties().await
}

pub async fn rewards_get_current_report() -> Result<(), String> {
    interop::rewards_get_current_report().await
}

pub async fn rewards_get_publisher_data(window_id: i64, url: &str) -> Result<(), String> {
    interop::rewards_get_publisher_data(window_id, url).await
}

pub async fn notifications_delete(id: i64) -> Result<(), String> {
    interop::notifications_delete(id).await
}

pub async fn tabs_get(tab_id: i64) -> Result<Option<TabDescriptor>, String> {
    interop::tabs_get(tab_id).await
}

pub fn badge_set_text(text: &str) -> Result<(), String> {
    interop::badge_set_text(text)
}

pub fn subscribe_events(sink: Box<dyn Fn(ActionMessage)>) -> Result<(), String> {
    interop::subscribe_events(sink)
}
