//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).
//!
//! Event names follow Simple Analytics conventions: lowercase
//! alphanumeric with underscores, max 200 characters.

use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record a completed filter apply for the given filter slug.
///
/// Fires an event named `apply_<slug>` (e.g., `apply_sepia`).
///
/// # Panics (debug only)
///
/// Debug-asserts that `slug` is lowercase alphanumeric/underscore and
/// that the resulting event name fits within the 200-character limit.
pub fn track_apply(slug: &str) {
    track_slugged("apply", slug);
}

/// Record a download of a filtered image for the given filter slug.
///
/// Fires an event named `download_<slug>` (e.g., `download_blur`).
pub fn track_download(slug: &str) {
    track_slugged("download", slug);
}

/// Shared prefix + slug validation for the event helpers.
fn track_slugged(prefix: &str, slug: &str) {
    debug_assert!(
        slug.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
        "event slug must be lowercase alphanumeric or underscore, got: {slug:?}"
    );
    let name = format!("{prefix}_{slug}");
    debug_assert!(
        name.len() <= 200,
        "event name exceeds 200-character limit: {name:?}"
    );
    track_event(&name);
}
