use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_MODEL_NAME;

pub const MODEL_KEY: &str = "live2d-current-model";
pub const THEME_KEY: &str = "theme";
pub const SETTINGS_KEY: &str = "live2d-settings";
pub const POSITION_KEY: &str = "control-panel-position";

/// Theme values persist as the css class names the page body carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "light-theme")]
    Light,
    #[serde(rename = "dark-theme")]
    Dark,
}

impl Theme {
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn from_class(raw: &str) -> Option<Theme> {
        match raw.trim() {
            "light-theme" => Some(Theme::Light),
            "dark-theme" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Consolidated record stored under `live2d-settings`. Missing fields decode
/// to the documented defaults so records written by older builds still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            visible: true,
            theme: Theme::Light,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_visible() -> bool {
    true
}
