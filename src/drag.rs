use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use seigyoban_core::{DragSession, PanelPosition};

use crate::panel::PanelView;

/// Wires header dragging: mousedown on the header arms a session, document
/// mousemove repositions the panel clamped to the viewport, mouseup persists
/// the resting position.
pub(crate) fn install(view: &Rc<PanelView>, document: &Document) {
    let Some(header) = view.panel.query_selector(".panel-header").ok().flatten() else {
        return;
    };

    let v = Rc::clone(view);
    let header_for_down = header.clone();
    let listener = EventListener::new(&header, "mousedown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let session = DragSession::begin(
            event.client_x(),
            event.client_y(),
            v.panel.offset_left(),
            v.panel.offset_top(),
        );
        *v.drag.borrow_mut() = Some(session);
        set_cursor(&header_for_down, "grabbing");
    });
    view.push_listener(listener);

    let v = Rc::clone(view);
    let listener = EventListener::new(document, "mousemove", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(session) = *v.drag.borrow() else {
            return;
        };
        let Some((viewport_width, viewport_height)) = viewport_size() else {
            return;
        };
        let position = session.track(
            event.client_x(),
            event.client_y(),
            v.panel.offset_width(),
            v.panel.offset_height(),
            viewport_width,
            viewport_height,
        );
        v.move_to(position);
    });
    view.push_listener(listener);

    let v = Rc::clone(view);
    let header_for_up = header;
    let listener = EventListener::new(document, "mouseup", move |_event: &Event| {
        if v.drag.borrow_mut().take().is_none() {
            return;
        }
        set_cursor(&header_for_up, "move");
        let position = PanelPosition {
            x: v.panel.offset_left(),
            y: v.panel.offset_top(),
        };
        v.controller.borrow().save_position(position);
    });
    view.push_listener(listener);
}

fn viewport_size() -> Option<(i32, i32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()? as i32;
    let height = window.inner_height().ok()?.as_f64()? as i32;
    Some((width, height))
}

fn set_cursor(header: &Element, cursor: &str) {
    if let Some(element) = header.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("cursor", cursor);
    }
}
