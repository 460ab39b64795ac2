//! Rewards service adapter backed by `chrome.braveRewards`.

use panel_host::{RewardsFuture, RewardsService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Rewards adapter that forwards each request to the extension API.
///
/// Results are not returned here; the extension answers through the events wired by
/// [`crate::install_event_listeners`].
pub struct ExtensionRewardsService;

impl RewardsService for ExtensionRewardsService {
    fn create_wallet(&self) -> RewardsFuture<'_, Result<(), String>> {
        Box::pin(bridge::rewards_create_wallet())
    }

    fn get_wallet_properties(&self) -> RewardsFuture<'_, Result<(), String>> {
        Box::pin(bridge::rewards_get_wallet_properties())
    }

    fn get_current_report(&self) -> RewardsFuture<'_, Result<(), String>> {
        Box::pin(bridge::rewards_get_current_report())
    }

    fn get_publisher_data<'a>(
        &'a self,
        window_id: i64,
        url: &'a str,
    ) -> RewardsFuture<'a, Result<(), String>> {
        Box::pin(bridge::rewards_get_publisher_data(window_id, url))
    }
}
