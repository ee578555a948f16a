use seigyoban_core::{clamp_position, DragSession, PanelPosition};

const PANEL_W: i32 = 300;
const PANEL_H: i32 = 420;
const VIEW_W: i32 = 1280;
const VIEW_H: i32 = 800;

#[test]
fn clamp_keeps_panel_inside_viewport() {
    let pos = clamp_position(-50, -10, PANEL_W, PANEL_H, VIEW_W, VIEW_H);
    assert_eq!(pos, PanelPosition { x: 0, y: 0 });

    let pos = clamp_position(5000, 5000, PANEL_W, PANEL_H, VIEW_W, VIEW_H);
    assert_eq!(
        pos,
        PanelPosition {
            x: VIEW_W - PANEL_W,
            y: VIEW_H - PANEL_H,
        }
    );

    let pos = clamp_position(200, 100, PANEL_W, PANEL_H, VIEW_W, VIEW_H);
    assert_eq!(pos, PanelPosition { x: 200, y: 100 });
}

#[test]
fn clamp_pins_to_origin_when_panel_exceeds_viewport() {
    let pos = clamp_position(40, 40, 900, 700, 800, 600);
    assert_eq!(pos, PanelPosition { x: 0, y: 0 });
}

#[test]
fn drag_follows_pointer_with_grab_offset() {
    // Grab the header 30,8 inside a panel sitting at 100,50.
    let session = DragSession::begin(130, 58, 100, 50);
    let pos = session.track(330, 258, PANEL_W, PANEL_H, VIEW_W, VIEW_H);
    assert_eq!(pos, PanelPosition { x: 300, y: 250 });
}

#[test]
fn drag_outside_viewport_is_clamped() {
    let session = DragSession::begin(130, 58, 100, 50);
    let pos = session.track(-500, 4000, PANEL_W, PANEL_H, VIEW_W, VIEW_H);
    assert!(pos.x >= 0 && pos.x <= VIEW_W - PANEL_W);
    assert!(pos.y >= 0 && pos.y <= VIEW_H - PANEL_H);
    assert_eq!(pos, PanelPosition { x: 0, y: VIEW_H - PANEL_H });
}
