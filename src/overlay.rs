use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use seigyoban_core::Theme;

/// The animated character element this panel configures but does not render.
pub(crate) const OVERLAY_ELEMENT_ID: &str = "live2d-widget";

fn overlay_element() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(OVERLAY_ELEMENT_ID)?;
    element.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn set_overlay_opacity(value: f64) {
    let Some(element) = overlay_element() else {
        return;
    };
    let _ = element.style().set_property("opacity", &value.to_string());
}

/// Returns whether the overlay element was there to toggle.
pub(crate) fn set_overlay_visible(visible: bool) -> bool {
    let Some(element) = overlay_element() else {
        return false;
    };
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
    true
}

pub(crate) fn apply_theme_class(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let class_list = body.class_list();
    match theme {
        Theme::Dark => {
            let _ = class_list.add_1("dark-theme");
        }
        Theme::Light => {
            let _ = class_list.remove_1("dark-theme");
        }
    }
}

/// Fire-and-forget: a scheduled reload is not revocable.
pub(crate) fn schedule_reload(delay_ms: u32) {
    Timeout::new(delay_ms, || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.location().reload();
    })
    .forget();
}
