use gloo::timers::callback::Timeout;

use crate::style::NOTIFICATION_STYLE;

pub(crate) const NOTIFY_DURATION_MS: u32 = 2000;

/// Centered auto-dismissing banner. Each call owns its own node, so stacked
/// notifications dismiss independently.
pub(crate) fn show(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(banner) = document.create_element("div") else {
        return;
    };
    let _ = banner.set_attribute("style", NOTIFICATION_STYLE);
    banner.set_text_content(Some(message));
    let _ = body.append_child(&banner);
    Timeout::new(NOTIFY_DURATION_MS, move || banner.remove()).forget();
}
