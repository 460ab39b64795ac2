use super::*;
use js_sys::{Function, Promise};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function fail(message) {
  throw new Error(message);
}

function lastErrorMessage() {
  const err = chrome.runtime && chrome.runtime.lastError;
  return err ? (err.message || String(err)) : null;
}

function requireNamespace(name) {
  if (typeof chrome === 'undefined' || !chrome[name]) {
    fail(`chrome.${name} is unavailable in this context`);
  }
  return chrome[name];
}

function fireAndForget(name, method, args) {
  return new Promise((resolve) => {
    requireNamespace(name)[method](...args);
    resolve();
  });
}

function listen(target, event, handler) {
  if (target && target[event] && typeof target[event].addListener === 'function') {
    target[event].addListener(handler);
  }
}

export function jsRewardsCreateWallet() { return fireAndForget('braveRewards', 'createWallet', []); }
export function jsRewardsGetWalletProperties() { return fireAndForget('braveRewards', 'getWalletProperties', []); }
export function jsRewardsGetCurrentReport() { return fireAndForget('braveRewards', 'getCurrentReport', []); }
export function jsRewardsGetPublisherData(windowId, url) { return fireAndForget('braveRewards', 'getPublisherData', [windowId, url]); }
export function jsNotificationsDelete(id) { return fireAndForget('rewardsNotifications', 'deleteNotification', [id]); }

export function jsTabsGet(tabId) {
  return new Promise((resolve, reject) => {
    requireNamespace('tabs').get(tabId, (tab) => {
      const message = lastErrorMessage();
      if (message) {
        reject(new Error(message));
        return;
      }
      resolve(tab || null);
    });
  });
}

export function jsBadgeSetText(text) {
  requireNamespace('browserAction').setBadgeText({ text });
}

export function jsSubscribeRewardsEvents(sink) {
  const rewards = requireNamespace('braveRewards');
  const notifications = requireNamespace('rewardsNotifications');
  const emit = (type, payload) => sink({ type, payload: payload === undefined ? null : payload });

  listen(rewards, 'onWalletCreated', () => emit('ON_WALLET_CREATED', null));
  listen(rewards, 'onWalletCreateFailed', () => emit('ON_WALLET_CREATE_FAILED', null));
  listen(rewards, 'onPublisherData', (windowId, publisher) => emit('ON_PUBLISHER_DATA', { windowId, publisher }));
  listen(rewards, 'onWalletProperties', (properties) => emit('ON_WALLET_PROPERTIES', { properties }));
  listen(rewards, 'onCurrentReport', (properties) => emit('ON_CURRENT_REPORT', { properties }));
  listen(notifications, 'onNotificationAdded', (id, type, timestamp, args) =>
    emit('ON_NOTIFICATION_ADDED', { id, type, timestamp, args }));
  listen(notifications, 'onNotificationDeleted', (id, type, timestamp) =>
    emit('ON_NOTIFICATION_DELETED', { id, type, timestamp }));
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsRewardsCreateWallet)]
    fn js_rewards_create_wallet() -> Promise;
    #[wasm_bindgen(js_name = jsRewardsGetWalletProperties)]
    fn js_rewards_get_wallet_properties() -> Promise;
    #[wasm_bindgen(js_name = jsRewardsGetCurrentReport)]
    fn js_rewards_get_current_report() -> Promise;
    #[wasm_bindgen(js_name = jsRewardsGetPublisherData)]
    fn js_rewards_get_publisher_data(window_id: f64, url: &str) -> Promise;
    #[wasm_bindgen(js_name = jsNotificationsDelete)]
    fn js_notifications_delete(id: f64) -> Promise;

    #[wasm_bindgen(js_name = jsTabsGet)]
    fn js_tabs_get(tab_id: f64) -> Promise;

    #[wasm_bindgen(catch, js_name = jsBadgeSetText)]
    fn js_badge_set_text(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = jsSubscribeRewardsEvents)]
    fn js_subscribe_rewards_events(sink: &Function) -> Result<(), JsValue>;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn await_unit(promise: Promise) -> Result<(), String> {
    let _ = await_promise(promise).await?;
    Ok(())
}

pub async fn rewards_create_wallet() -> Result<(), String> {
    await_unit(js_rewards_create_wallet()).await
}

pub async fn rewards_get_wallet_properties() -> Result<(), String> {
    await_unit(js_rewards_get_wallet_properties()).await
}

pub async fn rewards_get_current_report() -> Result<(), String> {
    await_unit(js_rewards_get_current_report()).await
}

pub async fn rewards_get_publisher_data(window_id: i64, url: &str) -> Result<(), String> {
    await_unit(js_rewards_get_publisher_data(window_id as f64, url)).await
}

pub async fn notifications_delete(id: i64) -> Result<(), String> {
    await_unit(js_notifications_delete(id as f64)).await
}

pub async fn tabs_get(tab_id: i64) -> Result<Option<TabDescriptor>, String> {
    let value = await_promise(js_tabs_get(tab_id as f64)).await?;
    if value.is_null() || value.is_undefined() {
        Ok(None)
    } else {
        from_value(value).map(Some).map_err(|e| e.to_string())
    }
}

pub fn badge_set_text(text: &str) -> Result<(), String> {
    js_badge_set_text(text).map_err(js_error_to_string)
}

pub fn subscribe_events(sink: Box<dyn Fn(ActionMessage)>) -> Result<(), String> {
    let callback = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        match from_value::<ActionMessage>(value) {
            Ok(message) => sink(message),
            Err(err) => web_sys::console::warn_1(&JsValue::from_str(&format!(
                "dropping malformed rewards event: {err}"
            ))),
        }
    });
    js_subscribe_rewards_events(callback.as_ref().unchecked_ref())
        .map_err(js_error_to_string)?;
    // Listeners live for the lifetime of the extension page.
    callback.forget();
    Ok(())
}
