use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use seigyoban_core::{
    format_opacity, LoadOutcome, PanelController, PanelHooks, PanelPosition, PanelSettings,
    SettingsStore, SwitchModelOutcome, Theme, CLEAR_RELOAD_DELAY_MS, MODEL_KEY,
    MODEL_RELOAD_DELAY_MS, POSITION_KEY, SETTINGS_KEY, THEME_KEY,
};

#[derive(Clone, Default)]
struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    fn seed(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[derive(Clone, Default)]
struct Recorded {
    themes: Rc<RefCell<Vec<Theme>>>,
    opacities: Rc<RefCell<Vec<f64>>>,
    visibilities: Rc<RefCell<Vec<bool>>>,
    notifications: Rc<RefCell<Vec<String>>>,
    reloads: Rc<RefCell<Vec<u32>>>,
    overlay_present: Rc<Cell<bool>>,
}

impl Recorded {
    fn new() -> Self {
        let recorded = Self::default();
        recorded.overlay_present.set(true);
        recorded
    }

    fn hooks(&self) -> PanelHooks {
        let themes = self.themes.clone();
        let opacities = self.opacities.clone();
        let visibilities = self.visibilities.clone();
        let notifications = self.notifications.clone();
        let reloads = self.reloads.clone();
        let overlay_present = self.overlay_present.clone();
        PanelHooks {
            apply_theme: Rc::new(move |theme| themes.borrow_mut().push(theme)),
            set_overlay_opacity: Rc::new(move |value| opacities.borrow_mut().push(value)),
            set_overlay_visible: Rc::new(move |visible| {
                if overlay_present.get() {
                    visibilities.borrow_mut().push(visible);
                    true
                } else {
                    false
                }
            }),
            notify: Rc::new(move |message| notifications.borrow_mut().push(message)),
            request_reload: Rc::new(move |delay| reloads.borrow_mut().push(delay)),
        }
    }
}

fn controller(store: &MemoryStore, recorded: &Recorded) -> PanelController<MemoryStore> {
    PanelController::new(store.clone(), recorded.hooks())
}

#[test]
fn defaults_apply_on_empty_store() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let panel = controller(&store, &recorded);
    assert_eq!(panel.current_model(), "anon_2151");
    assert_eq!(panel.theme(), Theme::Light);
    assert!(panel.visible());
    assert!(!panel.switching());
}

#[test]
fn stored_model_outside_catalog_falls_back() {
    let store = MemoryStore::default();
    store.seed(MODEL_KEY, "totally-made-up");
    let recorded = Recorded::new();
    let panel = controller(&store, &recorded);
    assert_eq!(panel.current_model(), "anon_2151");
}

#[test]
fn switch_unknown_model_is_rejected() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    let outcome = panel.switch_model("not-a-model");
    assert_eq!(outcome, SwitchModelOutcome::UnknownModel);
    assert_eq!(panel.current_model(), "anon_2151");
    assert_eq!(store.raw(MODEL_KEY), None);
    assert_eq!(recorded.notifications.borrow().len(), 1);
    assert!(recorded.reloads.borrow().is_empty());
}

#[test]
fn switch_to_current_model_is_a_noop() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    let outcome = panel.switch_model("anon_2151");
    assert_eq!(outcome, SwitchModelOutcome::AlreadyCurrent);
    assert_eq!(store.raw(MODEL_KEY), None);
    assert!(recorded.notifications.borrow().is_empty());
    assert!(recorded.reloads.borrow().is_empty());
}

#[test]
fn switch_model_persists_and_schedules_reload() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    let outcome = panel.switch_model("hina_1387");
    assert_eq!(outcome, SwitchModelOutcome::Switched);
    assert_eq!(store.raw(MODEL_KEY).as_deref(), Some("hina_1387"));
    assert_eq!(panel.current_model(), "hina_1387");
    assert!(panel.switching());
    assert_eq!(*recorded.reloads.borrow(), vec![MODEL_RELOAD_DELAY_MS]);

    let settings: PanelSettings =
        serde_json::from_str(&store.raw(SETTINGS_KEY).unwrap()).unwrap();
    assert_eq!(settings.model, "hina_1387");

    // The guard wins over everything, even a valid different model.
    let outcome = panel.switch_model("tomorin");
    assert_eq!(outcome, SwitchModelOutcome::SwitchInProgress);
    assert_eq!(store.raw(MODEL_KEY).as_deref(), Some("hina_1387"));
    assert_eq!(recorded.reloads.borrow().len(), 1);
}

#[test]
fn switch_theme_persists_and_reapplies() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    panel.switch_theme(Theme::Dark);
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("dark-theme"));
    assert_eq!(panel.theme(), Theme::Dark);
    assert_eq!(*recorded.themes.borrow(), vec![Theme::Dark]);

    // Same theme again: storage rewritten, effect re-applied.
    panel.switch_theme(Theme::Dark);
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("dark-theme"));
    assert_eq!(recorded.themes.borrow().len(), 2);
}

#[test]
fn toggle_theme_flips_between_the_two_values() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    panel.toggle_theme();
    assert_eq!(panel.theme(), Theme::Dark);
    panel.toggle_theme();
    assert_eq!(panel.theme(), Theme::Light);
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("light-theme"));
}

#[test]
fn set_opacity_applies_value_and_formats_readout() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let panel = controller(&store, &recorded);
    assert_eq!(panel.set_opacity(0.3), "30%");
    assert_eq!(*recorded.opacities.borrow(), vec![0.3]);
    assert_eq!(panel.set_opacity(1.0), "100%");
}

#[test]
fn set_opacity_clamps_out_of_range_values() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let panel = controller(&store, &recorded);
    assert_eq!(panel.set_opacity(0.0), "10%");
    assert_eq!(panel.set_opacity(3.5), "100%");
    assert_eq!(*recorded.opacities.borrow(), vec![0.1, 1.0]);
}

#[test]
fn toggle_visibility_flips_and_saves() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    assert!(!panel.toggle_visibility());
    assert_eq!(*recorded.visibilities.borrow(), vec![false]);
    let settings: PanelSettings =
        serde_json::from_str(&store.raw(SETTINGS_KEY).unwrap()).unwrap();
    assert!(!settings.visible);
    assert!(panel.toggle_visibility());
}

#[test]
fn toggle_visibility_without_overlay_keeps_flag() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    recorded.overlay_present.set(false);
    let mut panel = controller(&store, &recorded);
    assert!(panel.toggle_visibility());
    assert!(panel.visible());
    assert!(recorded.visibilities.borrow().is_empty());
    // The consolidated record is still rewritten.
    assert!(store.raw(SETTINGS_KEY).is_some());
}

#[test]
fn clear_cache_removes_keys_and_schedules_reload() {
    let store = MemoryStore::default();
    store.seed(MODEL_KEY, "tomorin");
    store.seed(THEME_KEY, "dark-theme");
    store.seed(SETTINGS_KEY, r#"{"model":"tomorin","visible":false,"theme":"dark-theme"}"#);
    store.seed(POSITION_KEY, r#"{"x":40,"y":60}"#);
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    panel.clear_cache();
    assert_eq!(store.raw(MODEL_KEY), None);
    assert_eq!(store.raw(SETTINGS_KEY), None);
    assert_eq!(store.raw(POSITION_KEY), None);
    // The standalone theme key survives a cache clear.
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("dark-theme"));
    assert_eq!(*recorded.reloads.borrow(), vec![CLEAR_RELOAD_DELAY_MS]);
}

#[test]
fn fresh_start_after_clear_resolves_all_defaults() {
    let store = MemoryStore::default();
    store.seed(MODEL_KEY, "mzm");
    store.seed(SETTINGS_KEY, r#"{"model":"mzm","visible":false,"theme":"light-theme"}"#);
    store.seed(POSITION_KEY, r#"{"x":5,"y":5}"#);
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    panel.clear_cache();

    let panel = controller(&store, &recorded);
    assert_eq!(panel.current_model(), "anon_2151");
    assert!(panel.visible());
    assert_eq!(panel.restore_position(), None);
}

#[test]
fn settings_round_trip() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    panel.switch_theme(Theme::Dark);
    panel.toggle_visibility();
    panel.save_settings();

    let mut fresh = controller(&store, &recorded);
    assert_eq!(fresh.load_settings(), LoadOutcome::Applied);
    assert_eq!(fresh.current_model(), panel.current_model());
    assert_eq!(fresh.theme(), Theme::Dark);
    assert_eq!(fresh.visible(), panel.visible());
}

#[test]
fn load_settings_overrides_standalone_keys() {
    let store = MemoryStore::default();
    store.seed(MODEL_KEY, "anon_2151");
    store.seed(
        SETTINGS_KEY,
        r#"{"model":"ksm_270","visible":false,"theme":"dark-theme"}"#,
    );
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    assert_eq!(panel.load_settings(), LoadOutcome::Applied);
    assert_eq!(panel.current_model(), "ksm_270");
    assert!(!panel.visible());
    assert_eq!(panel.theme(), Theme::Dark);
    assert_eq!(*recorded.themes.borrow(), vec![Theme::Dark]);
}

#[test]
fn load_settings_tolerates_missing_fields_and_bad_models() {
    let store = MemoryStore::default();
    store.seed(SETTINGS_KEY, r#"{"model":"gone-from-catalog"}"#);
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    assert_eq!(panel.load_settings(), LoadOutcome::Applied);
    // Unknown model is ignored, missing visible defaults to true.
    assert_eq!(panel.current_model(), "anon_2151");
    assert!(panel.visible());
    assert_eq!(panel.theme(), Theme::Light);
}

#[test]
fn load_settings_reports_malformed_records() {
    let store = MemoryStore::default();
    store.seed(SETTINGS_KEY, "{not json");
    let recorded = Recorded::new();
    let mut panel = controller(&store, &recorded);
    assert_eq!(panel.load_settings(), LoadOutcome::Invalid);
    assert_eq!(panel.current_model(), "anon_2151");

    let empty = MemoryStore::default();
    let mut panel = controller(&empty, &recorded);
    assert_eq!(panel.load_settings(), LoadOutcome::Missing);
}

#[test]
fn position_round_trip_and_malformed_position() {
    let store = MemoryStore::default();
    let recorded = Recorded::new();
    let panel = controller(&store, &recorded);
    panel.save_position(PanelPosition { x: 120, y: 48 });
    assert_eq!(
        panel.restore_position(),
        Some(PanelPosition { x: 120, y: 48 })
    );

    store.seed(POSITION_KEY, "oops");
    assert_eq!(panel.restore_position(), None);
}

#[test]
fn opacity_readout_rounds_to_whole_percent() {
    assert_eq!(format_opacity(0.1), "10%");
    assert_eq!(format_opacity(0.7), "70%");
    assert_eq!(format_opacity(1.0), "100%");
}
