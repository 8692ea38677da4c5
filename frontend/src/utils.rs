use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{window, Event, Storage};

pub const CHANNEL_ID_KEY: &str = "yt_channel_id";
pub const API_KEY_KEY: &str = "yt_api_key";
pub const VIEWING_ID_KEY: &str = "yt_viewing_id";

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn get_stored(key: &str) -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok())
        .flatten()
        .filter(|value| !value.is_empty())
}

pub fn store(key: &str, value: &str) -> Result<(), String> {
    if let Some(storage) = local_storage() {
        storage
            .set_item(key, value)
            .map_err(|_| format!("Failed to store '{key}'"))?;
    }
    Ok(())
}

pub fn remove_stored(key: &str) -> Result<(), String> {
    if let Some(storage) = local_storage() {
        storage
            .remove_item(key)
            .map_err(|_| format!("Failed to remove '{key}'"))?;
    }
    Ok(())
}

/// Stores `value` under `key`, or clears the key when the value is blank.
pub fn store_or_remove(key: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        remove_stored(key)
    } else {
        store(key, trimmed)
    }
}

pub fn get_query_param(name: &str) -> Option<String> {
    let href = window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get(name)
}

/// Drops the query string without adding a history entry.
pub fn clear_query_params() {
    if let Some(window) = window() {
        let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }
    }
}

pub fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn reload_page() {
    if let Some(window) = window() {
        if let Err(e) = window.location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn print_page() {
    if let Some(window) = window() {
        let _ = window.print();
    }
}

// Helper to read "value" from any event target without casting to a concrete element.
pub fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
