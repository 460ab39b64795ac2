//! Target routing for extension bridge calls.

use panel_host::{ActionMessage, TabDescriptor};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn rewards_create_wallet() -> Result<(), String> {
    imp::rewards_create_wallet().await
}

pub async fn rewards_get_wallet_properties() -> Result<(), String> {
    imp::rewards_get_wallet_properties().await
}

pub async fn rewards_get_current_report() -> Result<(), String> {
    imp::rewards_get_current_report().await
}

pub async fn rewards_get_publisher_data(window_id: i64, url: &str) -> Result<(), String> {
    imp::rewards_get_publisher_data(window_id, url).await
}

pub async fn notifications_delete(id: i64) -> Result<(), String> {
    imp::notifications_delete(id).await
}

pub async fn tabs_get(tab_id: i64) -> Result<Option<TabDescriptor>, String> {
    imp::tabs_get(tab_id).await
}

pub fn badge_set_text(text: &str) -> Result<(), String> {
    imp::badge_set_text(text)
}

pub fn subscribe_events(sink: Box<dyn Fn(ActionMessage)>) -> Result<(), String> {
    imp::subscribe_events(sink)
}
