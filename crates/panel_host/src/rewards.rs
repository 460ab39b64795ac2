//! Rewards (wallet/publisher) service contracts and baseline adapters.
//!
//! Every call is a fire-and-forget request. Results are not returned through the future; the
//! extension delivers them later as separate inbound action messages (for example
//! `ON_WALLET_CREATED` after [`RewardsService::create_wallet`]).

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`RewardsService`].
pub type RewardsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the browser's rewards wallet API.
pub trait RewardsService {
    /// Requests creation of the rewards wallet.
    fn create_wallet(&self) -> RewardsFuture<'_, Result<(), String>>;

    /// Requests the current wallet properties.
    fn get_wallet_properties(&self) -> RewardsFuture<'_, Result<(), String>>;

    /// Requests the current contribution report.
    fn get_current_report(&self) -> RewardsFuture<'_, Result<(), String>>;

    /// Requests publisher data for the page shown in `window_id`.
    fn get_publisher_data<'a>(
        &'a self,
        window_id: i64,
        url: &'a str,
    ) -> RewardsFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op rewards service for unsupported targets.
pub struct NoopRewardsService;

impl RewardsService for NoopRewardsService {
    fn create_wallet(&self) -> RewardsFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn get_wallet_properties(&self) -> RewardsFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn get_current_report(&self) -> RewardsFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn get_publisher_data<'a>(
        &'a self,
        _window_id: i64,
        _url: &'a str,
    ) -> RewardsFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request observed by [`MemoryRewardsService`].
pub enum RewardsCall {
    /// `create_wallet` was requested.
    CreateWallet,
    /// `get_wallet_properties` was requested.
    GetWalletProperties,
    /// `get_current_report` was requested.
    GetCurrentReport,
    /// `get_publisher_data` was requested.
    GetPublisherData {
        /// Window the lookup was made for.
        window_id: i64,
        /// Page url.
        url: String,
    },
}

#[derive(Debug, Clone, Default)]
/// In-memory rewards service that records every request in order.
pub struct MemoryRewardsService {
    calls: Rc<RefCell<Vec<RewardsCall>>>,
}

impl MemoryRewardsService {
    /// Returns the requests recorded so far.
    pub fn calls(&self) -> Vec<RewardsCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: RewardsCall) -> RewardsFuture<'_, Result<(), String>> {
        self.calls.borrow_mut().push(call);
        Box::pin(async { Ok(()) })
    }
}

impl RewardsService for MemoryRewardsService {
    fn create_wallet(&self) -> RewardsFuture<'_, Result<(), String>> {
        self.record(RewardsCall::CreateWallet)
    }

    fn get_wallet_properties(&self) -> RewardsFuture<'_, Result<(), String>> {
        self.record(RewardsCall::GetWalletProperties)
    }

    fn get_current_report(&self) -> RewardsFuture<'_, Result<(), String>> {
        self.record(RewardsCall::GetCurrentReport)
    }

    fn get_publisher_data<'a>(
        &'a self,
        window_id: i64,
        url: &'a str,
    ) -> RewardsFuture<'a, Result<(), String>> {
        self.record(RewardsCall::GetPublisherData {
            window_id,
            url: url.to_string(),
        })
    }
}
