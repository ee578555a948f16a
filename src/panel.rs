use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent};

use seigyoban_core::{
    DragSession, LoadOutcome, PanelController, PanelHooks, PanelPosition, SwitchModelOutcome,
    Theme, MODEL_CATALOG,
};

use crate::notify;
use crate::overlay;
use crate::shortcut::{absorbs_shortcuts, shortcut_for_key, Shortcut};
use crate::storage::LocalSettingsStore;
use crate::style::PANEL_CSS;

pub(crate) const PANEL_ID: &str = "control-panel";
pub(crate) const CONTENT_ID: &str = "control-content";
pub(crate) const TOGGLE_ID: &str = "panel-toggle";
pub(crate) const SELECTOR_ID: &str = "model-selector";
pub(crate) const OPACITY_SLIDER_ID: &str = "opacity-slider";
pub(crate) const OPACITY_VALUE_ID: &str = "opacity-value";
pub(crate) const VISIBILITY_BTN_ID: &str = "toggle-visibility";
pub(crate) const CLEAR_BTN_ID: &str = "clear-cache";

const HIDE_LABEL: &str = "👁️ Hide mascot";
const SHOW_LABEL: &str = "👁️ Show mascot";

thread_local! {
    static PANEL: RefCell<Option<Rc<PanelView>>> = RefCell::new(None);
}

pub(crate) struct PanelView {
    pub(crate) controller: RefCell<PanelController<LocalSettingsStore>>,
    pub(crate) panel: HtmlElement,
    pub(crate) drag: RefCell<Option<DragSession>>,
    listeners: RefCell<Vec<EventListener>>,
}

/// Builds the panel once per page load. A second call is a no-op.
pub(crate) fn run() {
    if PANEL.with(|slot| slot.borrow().is_some()) {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let hooks = PanelHooks {
        apply_theme: Rc::new(overlay::apply_theme_class),
        set_overlay_opacity: Rc::new(overlay::set_overlay_opacity),
        set_overlay_visible: Rc::new(overlay::set_overlay_visible),
        notify: Rc::new(|message| notify::show(&message)),
        request_reload: Rc::new(overlay::schedule_reload),
    };
    let mut controller = PanelController::new(LocalSettingsStore, hooks);

    let Some(panel) = build_panel(&document, controller.current_model()) else {
        console::error!("control panel could not be attached");
        return;
    };

    // The consolidated record wins over the per-key reads above.
    if controller.load_settings() == LoadOutcome::Invalid {
        console::warn!("stored panel settings were malformed, using defaults");
    }

    let view = Rc::new(PanelView {
        controller: RefCell::new(controller),
        panel,
        drag: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });

    view.install_listeners(&document);
    crate::drag::install(&view, &document);
    if let Some(position) = view.controller.borrow().restore_position() {
        view.move_to(position);
    }
    view.sync_selector();
    view.update_theme_buttons();
    view.update_visibility_label();
    set_collapsed(true);

    PANEL.with(|slot| {
        *slot.borrow_mut() = Some(view);
    });
    console::log!("control panel initialized");
}

fn build_panel(document: &Document, current_model: &str) -> Option<HtmlElement> {
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(PANEL_CSS));
    document.head()?.append_child(&style).ok()?;

    let mut options = String::new();
    for entry in MODEL_CATALOG {
        let selected = if entry.name == current_model {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            r#"<option value="{}"{}>{}</option>"#,
            entry.name, selected, entry.display_name
        );
    }

    let panel = document.create_element("div").ok()?;
    panel.set_id(PANEL_ID);
    panel.set_inner_html(&format!(
        r#"<div class="panel-header">
  <span class="panel-title">🎮 Control Panel</span>
  <button class="panel-toggle" id="{TOGGLE_ID}">⚙️</button>
</div>
<div class="panel-content" id="{CONTENT_ID}">
  <div class="panel-section">
    <h3 class="section-title">🎭 Live2D model</h3>
    <select id="{SELECTOR_ID}" class="panel-select">{options}</select>
  </div>
  <div class="panel-section">
    <h3 class="section-title">🌓 Theme</h3>
    <div class="theme-buttons">
      <button class="theme-btn light-btn" data-theme="light-theme">☀️ Light</button>
      <button class="theme-btn dark-btn" data-theme="dark-theme">🌙 Dark</button>
    </div>
  </div>
  <div class="panel-section">
    <h3 class="section-title">👁️ Opacity</h3>
    <div class="opacity-control">
      <input type="range" id="{OPACITY_SLIDER_ID}" class="slider" min="0.1" max="1" step="0.1" value="1.0">
      <span id="{OPACITY_VALUE_ID}" class="opacity-display">100%</span>
    </div>
  </div>
  <div class="panel-section">
    <h3 class="section-title">⚡ Actions</h3>
    <div class="button-group">
      <button id="{VISIBILITY_BTN_ID}" class="panel-btn">{HIDE_LABEL}</button>
      <button id="{CLEAR_BTN_ID}" class="panel-btn danger">🗑️ Clear cache</button>
    </div>
  </div>
  <div class="panel-section shortcuts">
    <h3 class="section-title">⌨️ Shortcuts</h3>
    <div class="shortcut-list">
      <div class="shortcut-item"><kbd>L</kbd> <span>collapse panel</span></div>
      <div class="shortcut-item"><kbd>T</kbd> <span>switch theme</span></div>
      <div class="shortcut-item"><kbd>H</kbd> <span>hide mascot</span></div>
    </div>
  </div>
</div>"#
    ));
    document.body()?.append_child(&panel).ok()?;
    panel.dyn_into::<HtmlElement>().ok()
}

impl PanelView {
    pub(crate) fn push_listener(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) fn move_to(&self, position: PanelPosition) {
        let style = self.panel.style();
        let _ = style.set_property("left", &format!("{}px", position.x));
        let _ = style.set_property("top", &format!("{}px", position.y));
        let _ = style.set_property("right", "auto");
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        if let Some(toggle) = element_by_id(TOGGLE_ID) {
            let listener = EventListener::new(&toggle, "click", move |_event: &Event| {
                toggle_collapsed();
            });
            self.push_listener(listener);
        }

        if let Some(selector) = element_by_id(SELECTOR_ID) {
            let view = Rc::clone(self);
            let listener = EventListener::new(&selector, "change", move |event: &Event| {
                let Some(select) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                else {
                    return;
                };
                view.handle_model_change(select.value());
            });
            self.push_listener(listener);
        }

        for (css, theme) in [(".light-btn", Theme::Light), (".dark-btn", Theme::Dark)] {
            let Some(button) = self.panel.query_selector(css).ok().flatten() else {
                continue;
            };
            let view = Rc::clone(self);
            let listener = EventListener::new(&button, "click", move |_event: &Event| {
                view.apply_theme_choice(theme);
            });
            self.push_listener(listener);
        }

        if let Some(slider) = element_by_id(OPACITY_SLIDER_ID) {
            let view = Rc::clone(self);
            let listener = EventListener::new(&slider, "input", move |event: &Event| {
                let Some(input) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                let value = input.value().parse::<f64>().unwrap_or(1.0);
                view.apply_opacity(value);
            });
            self.push_listener(listener);
        }

        if let Some(button) = element_by_id(VISIBILITY_BTN_ID) {
            let view = Rc::clone(self);
            let listener = EventListener::new(&button, "click", move |_event: &Event| {
                view.apply_visibility_toggle();
            });
            self.push_listener(listener);
        }

        if let Some(button) = element_by_id(CLEAR_BTN_ID) {
            let view = Rc::clone(self);
            let listener = EventListener::new(&button, "click", move |_event: &Event| {
                console::log!("clearing cached panel state");
                view.controller.borrow_mut().clear_cache();
            });
            self.push_listener(listener);
        }

        let view = Rc::clone(self);
        let listener = EventListener::new(document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if focused_element_absorbs_shortcuts() {
                return;
            }
            match shortcut_for_key(&event.key()) {
                Some(Shortcut::TogglePanel) => toggle_collapsed(),
                Some(Shortcut::ToggleTheme) => {
                    view.controller.borrow_mut().toggle_theme();
                    view.update_theme_buttons();
                }
                Some(Shortcut::ToggleOverlay) => view.apply_visibility_toggle(),
                None => {}
            }
        });
        self.push_listener(listener);
    }

    fn handle_model_change(&self, name: String) {
        let outcome = self.controller.borrow_mut().switch_model(&name);
        match outcome {
            SwitchModelOutcome::Switched => {
                console::log!("switching model to", name);
            }
            SwitchModelOutcome::AlreadyCurrent => {}
            SwitchModelOutcome::UnknownModel => {
                console::error!("unknown model", name);
                self.sync_selector();
            }
            SwitchModelOutcome::SwitchInProgress => {
                console::warn!("model switch already in progress");
                self.sync_selector();
            }
        }
    }

    fn apply_theme_choice(&self, theme: Theme) {
        self.controller.borrow_mut().switch_theme(theme);
        self.update_theme_buttons();
    }

    fn apply_opacity(&self, value: f64) {
        let readout = self.controller.borrow().set_opacity(value);
        if let Some(display) = element_by_id(OPACITY_VALUE_ID) {
            display.set_text_content(Some(&readout));
        }
    }

    fn apply_visibility_toggle(&self) {
        self.controller.borrow_mut().toggle_visibility();
        self.update_visibility_label();
    }

    fn sync_selector(&self) {
        let Some(select) = element_by_id(SELECTOR_ID)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        select.set_value(self.controller.borrow().current_model());
    }

    /// Exactly one of the two theme buttons carries the active marker.
    fn update_theme_buttons(&self) {
        let theme = self.controller.borrow().theme();
        for (css, button_theme) in [(".light-btn", Theme::Light), (".dark-btn", Theme::Dark)] {
            let Some(button) = self.panel.query_selector(css).ok().flatten() else {
                continue;
            };
            let class_list = button.class_list();
            if button_theme == theme {
                let _ = class_list.add_1("active");
            } else {
                let _ = class_list.remove_1("active");
            }
        }
    }

    fn update_visibility_label(&self) {
        let Some(button) = element_by_id(VISIBILITY_BTN_ID) else {
            return;
        };
        let label = if self.controller.borrow().visible() {
            HIDE_LABEL
        } else {
            SHOW_LABEL
        };
        button.set_text_content(Some(label));
    }
}

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn toggle_collapsed() {
    let Some(content) = element_by_id(CONTENT_ID) else {
        return;
    };
    let _ = content.class_list().toggle("collapsed");
}

fn set_collapsed(collapsed: bool) {
    let Some(content) = element_by_id(CONTENT_ID) else {
        return;
    };
    let class_list = content.class_list();
    if collapsed {
        let _ = class_list.add_1("collapsed");
    } else {
        let _ = class_list.remove_1("collapsed");
    }
}

fn focused_element_absorbs_shortcuts() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .map(|element| absorbs_shortcuts(&element.tag_name()))
        .unwrap_or(false)
}
