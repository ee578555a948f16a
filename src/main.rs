#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
mod drag;
#[cfg(target_arch = "wasm32")]
mod notify;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod panel;
mod shortcut;
#[cfg(target_arch = "wasm32")]
mod storage;
mod style;

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_bindgen_futures::spawn_local(async {
        if !boot::wait_for_overlay().await {
            gloo::console::warn!("overlay library not detected, overlay controls will be inert");
        }
        panel::run();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
