//! Execution of reducer-emitted effects against host services.

use panel_host::HostServices;

use crate::{
    persistence,
    reducer::{PanelAction, PanelEffect},
};

/// Executes one effect and returns the follow-up action it produced, if any.
///
/// Only tab fetches produce a follow-up ([`PanelAction::OnTabRetrieved`]); every other request's
/// result arrives later through the extension's own events. [`PanelEffect::SaveState`] is
/// written immediately here; debouncing is the caller's concern.
///
/// # Errors
///
/// Returns the host service's error message.
pub async fn execute_effect(
    services: &HostServices,
    effect: PanelEffect,
) -> Result<Option<PanelAction>, String> {
    match effect {
        PanelEffect::CreateWallet => services.rewards.create_wallet().await.map(|_| None),
        PanelEffect::GetWalletProperties => {
            services.rewards.get_wallet_properties().await.map(|_| None)
        }
        PanelEffect::GetCurrentReport => services.rewards.get_current_report().await.map(|_| None),
        PanelEffect::GetPublisherData { window_id, url } => services
            .rewards
            .get_publisher_data(window_id, &url)
            .await
            .map(|_| None),
        PanelEffect::FetchTabData { tab_id } => {
            let tab = services.tabs.fetch_tab(tab_id).await?;
            Ok(Some(PanelAction::OnTabRetrieved { tab }))
        }
        PanelEffect::DeleteNotification { id } => services
            .notifications
            .delete_notification(id)
            .await
            .map(|_| None),
        PanelEffect::SetBadgeText(text) => services.badge.set_badge_text(&text).map(|_| None),
        PanelEffect::SaveState(state) => {
            persistence::save_panel_state(services.store.as_ref(), &state)
                .await
                .map_err(|err| err.to_string())?;
            Ok(None)
        }
    }
}
