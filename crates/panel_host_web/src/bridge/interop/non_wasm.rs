use super::*;

fn unsupported() -> String {
    "Extension APIs are only available when compiled for wasm32".to_string()
}

pub async fn rewards_create_wallet() -> Result<(), String> {
    Ok(())
}

pub async fn rewards_get_wallet_properties() -> Result<(), String> {
    Ok(())
}

pub async fn rewards_get_current_report() -> Result<(), String> {
    Ok(())
}

pub async fn rewards_get_publisher_data(_window_id: i64, _url: &str) -> Result<(), String> {
    Ok(())
}

pub async fn notifications_delete(_id: i64) -> Result<(), String> {
    Ok(())
}

pub async fn tabs_get(_tab_id: i64) -> Result<Option<TabDescriptor>, String> {
    Err(unsupported())
}

pub fn badge_set_text(_text: &str) -> Result<(), String> {
    Ok(())
}

pub fn subscribe_events(_sink: Box<dyn Fn(ActionMessage)>) -> Result<(), String> {
    Err(unsupported())
}
