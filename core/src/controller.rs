use std::rc::Rc;

use crate::catalog::{model_by_name, DEFAULT_MODEL_NAME};
use crate::codec::{decode, encode};
use crate::drag::PanelPosition;
use crate::settings::{PanelSettings, Theme, MODEL_KEY, POSITION_KEY, SETTINGS_KEY, THEME_KEY};

pub const MODEL_RELOAD_DELAY_MS: u32 = 300;
pub const CLEAR_RELOAD_DELAY_MS: u32 = 1000;
pub const OPACITY_MIN: f64 = 0.1;
pub const OPACITY_MAX: f64 = 1.0;

/// Key-value store the controller persists into. The browser build backs this
/// with localStorage; tests substitute an in-memory map.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Side effects the controller requests from its host. The overlay element is
/// not owned by the panel, so visibility reports back whether anything was
/// there to toggle.
#[derive(Clone)]
pub struct PanelHooks {
    pub apply_theme: Rc<dyn Fn(Theme)>,
    pub set_overlay_opacity: Rc<dyn Fn(f64)>,
    pub set_overlay_visible: Rc<dyn Fn(bool) -> bool>,
    pub notify: Rc<dyn Fn(String)>,
    pub request_reload: Rc<dyn Fn(u32)>,
}

impl PanelHooks {
    pub fn noop() -> Self {
        Self {
            apply_theme: Rc::new(|_| {}),
            set_overlay_opacity: Rc::new(|_| {}),
            set_overlay_visible: Rc::new(|_| true),
            notify: Rc::new(|_| {}),
            request_reload: Rc::new(|_| {}),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchModelOutcome {
    Switched,
    AlreadyCurrent,
    UnknownModel,
    SwitchInProgress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Missing,
    Invalid,
}

pub struct PanelController<S: SettingsStore> {
    store: S,
    hooks: PanelHooks,
    current_model: String,
    current_theme: Theme,
    visible: bool,
    switching: bool,
}

impl<S: SettingsStore> PanelController<S> {
    /// Resolves the initial model and theme from their standalone keys,
    /// falling back to the documented defaults. Stored model names that left
    /// the catalog are ignored.
    pub fn new(store: S, hooks: PanelHooks) -> Self {
        let current_model = store
            .get(MODEL_KEY)
            .filter(|name| model_by_name(name).is_some())
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());
        let current_theme = store
            .get(THEME_KEY)
            .and_then(|raw| Theme::from_class(&raw))
            .unwrap_or_default();
        Self {
            store,
            hooks,
            current_model,
            current_theme,
            visible: true,
            switching: false,
        }
    }

    pub fn current_model(&self) -> &str {
        &self.current_model
    }

    pub fn theme(&self) -> Theme {
        self.current_theme
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn switching(&self) -> bool {
        self.switching
    }

    /// Applies the consolidated settings record on top of the standalone
    /// keys. A record written by a newer page wins over the per-key reads at
    /// construction time.
    pub fn load_settings(&mut self) -> LoadOutcome {
        let Some(raw) = self.store.get(SETTINGS_KEY) else {
            return LoadOutcome::Missing;
        };
        let Some(settings) = decode::<PanelSettings>(&raw) else {
            return LoadOutcome::Invalid;
        };
        if model_by_name(&settings.model).is_some() {
            self.current_model = settings.model;
        }
        self.visible = settings.visible;
        self.current_theme = settings.theme;
        (self.hooks.apply_theme)(self.current_theme);
        LoadOutcome::Applied
    }

    pub fn save_settings(&self) {
        let settings = PanelSettings {
            model: self.current_model.clone(),
            visible: self.visible,
            theme: self.current_theme,
        };
        if let Some(raw) = encode(&settings) {
            self.store.set(SETTINGS_KEY, &raw);
        }
    }

    /// A successful switch ends in a scheduled page reload; the overlay
    /// library re-reads the model key while the page boots. The guard stays
    /// set for the rest of this page's lifetime.
    pub fn switch_model(&mut self, name: &str) -> SwitchModelOutcome {
        if self.switching {
            return SwitchModelOutcome::SwitchInProgress;
        }
        let Some(entry) = model_by_name(name) else {
            (self.hooks.notify)(format!("Model {} is not available", name.trim()));
            return SwitchModelOutcome::UnknownModel;
        };
        if entry.name == self.current_model {
            return SwitchModelOutcome::AlreadyCurrent;
        }
        self.switching = true;
        self.store.set(MODEL_KEY, entry.name);
        self.current_model = entry.name.to_string();
        self.save_settings();
        (self.hooks.notify)(format!("Switching to {}...", entry.display_name));
        (self.hooks.request_reload)(MODEL_RELOAD_DELAY_MS);
        SwitchModelOutcome::Switched
    }

    /// Re-applying the active theme still rewrites storage and re-renders.
    pub fn switch_theme(&mut self, theme: Theme) {
        (self.hooks.apply_theme)(theme);
        self.store.set(THEME_KEY, theme.class_name());
        self.current_theme = theme;
        (self.hooks.notify)(format!("Switched to the {} theme", theme.label()));
    }

    pub fn toggle_theme(&mut self) {
        self.switch_theme(self.current_theme.toggled());
    }

    /// Opacity is applied live and never persisted. Returns the readout text
    /// for the percentage display.
    pub fn set_opacity(&self, value: f64) -> String {
        let value = value.clamp(OPACITY_MIN, OPACITY_MAX);
        (self.hooks.set_overlay_opacity)(value);
        format_opacity(value)
    }

    /// The flag only flips when the overlay element was actually there; the
    /// consolidated record is rewritten either way.
    pub fn toggle_visibility(&mut self) -> bool {
        let next = !self.visible;
        if (self.hooks.set_overlay_visible)(next) {
            self.visible = next;
        }
        self.save_settings();
        self.visible
    }

    /// Removes the model, settings, and position keys. The standalone theme
    /// key survives a cache clear.
    pub fn clear_cache(&mut self) {
        self.store.remove(MODEL_KEY);
        self.store.remove(SETTINGS_KEY);
        self.store.remove(POSITION_KEY);
        (self.hooks.notify)("Cache cleared, reloading...".to_string());
        (self.hooks.request_reload)(CLEAR_RELOAD_DELAY_MS);
    }

    pub fn save_position(&self, position: PanelPosition) {
        if let Some(raw) = encode(&position) {
            self.store.set(POSITION_KEY, &raw);
        }
    }

    pub fn restore_position(&self) -> Option<PanelPosition> {
        decode(&self.store.get(POSITION_KEY)?)
    }
}

pub fn format_opacity(value: f64) -> String {
    format!("{}%", (value * 100.0).round())
}
