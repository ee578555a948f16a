use gloo::timers::future::TimeoutFuture;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Global the overlay library installs on `window` once it has loaded.
pub(crate) const OVERLAY_MARKER: &str = "L2Dwidget";

pub(crate) const MARKER_POLL_ATTEMPTS: u32 = 11;
pub(crate) const MARKER_POLL_INTERVAL_MS: u32 = 500;

pub(crate) fn overlay_marker_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(value) = Reflect::get(&window, &JsValue::from_str(OVERLAY_MARKER)) else {
        return false;
    };
    !(value.is_null() || value.is_undefined())
}

/// Bounded readiness wait: one probe per interval, giving up after the last
/// attempt so the panel still comes up on pages without the overlay.
pub(crate) async fn wait_for_overlay() -> bool {
    for _ in 0..MARKER_POLL_ATTEMPTS {
        if overlay_marker_present() {
            return true;
        }
        TimeoutFuture::new(MARKER_POLL_INTERVAL_MS).await;
    }
    overlay_marker_present()
}
