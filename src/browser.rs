//! Browser Helpers
//!
//! Blocking `window.prompt` / `window.confirm` and the JS clock.

/// `window.prompt`; `None` when the user cancels
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}

/// `window.confirm`; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `Date.now()` in milliseconds
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}
