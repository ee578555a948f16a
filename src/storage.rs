use seigyoban_core::SettingsStore;

/// localStorage-backed store. Every access tolerates a missing window or a
/// storage that the browser refuses to hand out (private mode, quota).
#[derive(Clone, Copy, Default)]
pub(crate) struct LocalSettingsStore;

impl SettingsStore for LocalSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
