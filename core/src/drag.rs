use serde::{Deserialize, Serialize};

/// Panel origin in viewport pixels, stored under `control-panel-position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub x: i32,
    pub y: i32,
}

/// Keeps the panel's bounding box fully inside the viewport.
pub fn clamp_position(
    x: i32,
    y: i32,
    panel_width: i32,
    panel_height: i32,
    viewport_width: i32,
    viewport_height: i32,
) -> PanelPosition {
    let max_x = (viewport_width - panel_width).max(0);
    let max_y = (viewport_height - panel_height).max(0);
    PanelPosition {
        x: x.clamp(0, max_x),
        y: y.clamp(0, max_y),
    }
}

/// One header drag. Remembers where inside the panel the pointer grabbed it,
/// so the panel follows the pointer without jumping to the cursor.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    grab_x: i32,
    grab_y: i32,
}

impl DragSession {
    pub fn begin(pointer_x: i32, pointer_y: i32, panel_x: i32, panel_y: i32) -> Self {
        Self {
            grab_x: pointer_x - panel_x,
            grab_y: pointer_y - panel_y,
        }
    }

    pub fn track(
        &self,
        pointer_x: i32,
        pointer_y: i32,
        panel_width: i32,
        panel_height: i32,
        viewport_width: i32,
        viewport_height: i32,
    ) -> PanelPosition {
        clamp_position(
            pointer_x - self.grab_x,
            pointer_y - self.grab_y,
            panel_width,
            panel_height,
            viewport_width,
            viewport_height,
        )
    }
}
