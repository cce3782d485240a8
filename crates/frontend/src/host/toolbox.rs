use contracts::host::connection::DataverseConnection;
use contracts::host::notifications::NotificationOptions;
use wasm_bindgen::prelude::*;

use super::js_error_message;

/// JS bindings to the `toolboxAPI` object. Every fallible call carries
/// `catch` so a missing or failing host surface becomes an `Err` instead
/// of an uncaught exception.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["toolboxAPI", "connections"], js_name = getActiveConnection, catch)]
    async fn get_active_connection_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["toolboxAPI", "utils"], js_name = showNotification, catch)]
    async fn show_notification_js(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["toolboxAPI", "utils"], js_name = copyToClipboard, catch)]
    async fn copy_to_clipboard_js(text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["toolboxAPI", "utils"], js_name = getCurrentTheme, catch)]
    async fn get_current_theme_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["toolboxAPI", "utils"], js_name = saveFile, catch)]
    async fn save_file_js(filename: &str, content: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["toolboxAPI", "events"], js_name = on)]
    fn on_js(handler: &Closure<dyn FnMut(JsValue, JsValue)>);
}

/// Current active connection, or `None` when the host has none selected.
pub async fn get_active_connection() -> Result<Option<DataverseConnection>, String> {
    let value = get_active_connection_js().await.map_err(js_error_message)?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Show a toast in the host shell.
pub async fn show_notification(options: &NotificationOptions) -> Result<(), String> {
    let options = serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())?;
    show_notification_js(options).await.map_err(js_error_message)?;
    Ok(())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    copy_to_clipboard_js(text).await.map_err(js_error_message)?;
    Ok(())
}

pub async fn get_current_theme() -> Result<String, String> {
    let value = get_current_theme_js().await.map_err(js_error_message)?;
    value
        .as_string()
        .ok_or_else(|| "theme is not a string".to_string())
}

/// Open the host save dialog and write `content`. Returns the chosen path,
/// or `None` when the user cancelled the dialog.
pub async fn save_file(filename: &str, content: &str) -> Result<Option<String>, String> {
    let value = save_file_js(filename, content).await.map_err(js_error_message)?;
    if value.is_null() || value.is_undefined() {
        Ok(None)
    } else {
        Ok(value.as_string())
    }
}

/// Register the host event handler.
///
/// The host contract offers no unsubscribe: register exactly once per page
/// and keep the closure alive for the page's lifetime.
pub fn subscribe_to_events(handler: &Closure<dyn FnMut(JsValue, JsValue)>) {
    on_js(handler);
}

/// Extract the event name from an event payload object. Returns `None`
/// for payloads that do not carry a string `event` member.
pub fn event_name(payload: &JsValue) -> Option<String> {
    js_sys::Reflect::get(payload, &JsValue::from_str("event"))
        .ok()
        .and_then(|v| v.as_string())
}
