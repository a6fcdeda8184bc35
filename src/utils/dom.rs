//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Read a property of the global object.
fn global(name: &str) -> Option<JsValue> {
    let window = window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Read a string global such as `window.SPACE`.
pub fn global_string(name: &str) -> Option<String> {
    global(name)?.as_string()
}

/// Read a boolean global such as `window.ALLOW_UPLOAD`.
///
/// The strings `"true"`/`"false"` are accepted as well, since templates
/// sometimes render flags quoted.
pub fn global_bool(name: &str) -> Option<bool> {
    let value = global(name)?;
    value.as_bool().or_else(|| match value.as_string()?.as_str() {
        "true" | "True" | "1" => Some(true),
        "false" | "False" | "0" => Some(false),
        _ => None,
    })
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && window.open_with_url_and_target(url, "_blank").is_err()
    {
        log::warn!("could not open {url} in a new tab");
    }
}

/// Navigate the current tab to `url` (downloads keep the page in place).
pub fn navigate_to(url: &str) {
    if let Some(window) = window()
        && window.location().set_href(url).is_err()
    {
        log::warn!("could not navigate to {url}");
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
