pub mod catalog;
pub mod codec;
pub mod controller;
pub mod drag;
pub mod settings;

pub use catalog::{model_by_name, ModelCatalogEntry, DEFAULT_MODEL_NAME, MODEL_CATALOG};
pub use codec::{decode, encode};
pub use controller::{
    format_opacity, LoadOutcome, PanelController, PanelHooks, SettingsStore, SwitchModelOutcome,
    CLEAR_RELOAD_DELAY_MS, MODEL_RELOAD_DELAY_MS, OPACITY_MAX, OPACITY_MIN,
};
pub use drag::{clamp_position, DragSession, PanelPosition};
pub use settings::{PanelSettings, Theme, MODEL_KEY, POSITION_KEY, SETTINGS_KEY, THEME_KEY};
