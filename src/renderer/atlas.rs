//! Sprite sheet layout
//!
//! Source rectangles into `atlas.png` and where each sprite sits on the
//! canvas.

use glam::Vec2;

use crate::sim::Rect;

/// Wind button, idle and pressed
pub const WIND_IDLE: Rect = Rect::new(0.0, 0.0, 156.0, 65.0);
pub const WIND_PRESSED: Rect = Rect::new(156.0, 0.0, 156.0, 65.0);

/// "click & hold" caption under the wind button
pub const HOLD_LABEL: Rect = Rect::new(313.0, 0.0, 154.0, 14.0);
pub const HOLD_LABEL_POS: Vec2 = Vec2::new(91.0, 95.0);

pub const DECREASE: Rect = Rect::new(467.0, 0.0, 13.0, 19.0);
pub const INCREASE: Rect = Rect::new(481.0, 0.0, 13.0, 19.0);
pub const END_MUSIC: Rect = Rect::new(569.0, 0.0, 19.0, 19.0);

/// Whole death illustration
pub const DEATH: Rect = Rect::new(0.0, 0.0, 273.0, 153.0);

/// Number of pie fill levels
pub const STATUS_LEVELS: usize = 21;
/// Where the pie is drawn
pub const STATUS_POS: Vec2 = Vec2::new(25.0, 50.0);

const STATUS_CELL: f32 = 55.0;
const STATUS_ROW_Y: f32 = 66.0;

/// Pie sprite for fill level `index` (0 = nearly empty, 20 = full)
pub fn status_rect(index: usize) -> Rect {
    let index = index.min(STATUS_LEVELS - 1) as f32;
    Rect::new(
        1.0 + index * STATUS_CELL,
        STATUS_ROW_Y,
        STATUS_CELL - 1.0,
        STATUS_CELL - 1.0,
    )
}

/// Pie level for a timer value; `None` once the timer is empty
pub fn status_index(timer: f64) -> Option<usize> {
    if timer <= 0.0 {
        return None;
    }
    let index = (timer / 100.0).ceil() as usize - 1;
    Some(index.min(STATUS_LEVELS - 1))
}
