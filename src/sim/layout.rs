//! Logical-space geometry: controls, window scaling and startup sizing
//!
//! Everything is laid out on a fixed 273x153 canvas which the backend
//! scales to the real window.

use glam::Vec2;

use crate::consts::{NATIVE_H, NATIVE_W};

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Clickable regions of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Big crank button, hold to wind
    Wind,
    DecreaseDifficulty,
    IncreaseDifficulty,
    /// Stops the current music track
    EndMusic,
}

impl Control {
    pub fn rect(&self) -> Rect {
        match self {
            Control::Wind => Rect::new(90.0, 26.0, 156.0, 65.0),
            Control::DecreaseDifficulty => Rect::new(5.0, 130.0, 13.0, 19.0),
            Control::IncreaseDifficulty => Rect::new(45.0, 130.0, 13.0, 19.0),
            Control::EndMusic => Rect::new(2.0, 2.0, 19.0, 19.0),
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect().contains(point)
    }
}

/// Window size and the scale from logical canvas to window pixels.
///
/// Derived from the backend every frame, never carried forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_window(NATIVE_W as u32, NATIVE_H as u32)
    }
}

impl Viewport {
    pub fn from_window(width: u32, height: u32) -> Self {
        // A minimised window can report 0x0; keep the scale positive
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            scale: Vec2::new(width as f32 / NATIVE_W, height as f32 / NATIVE_H),
        }
    }

    /// Map a window-pixel position onto the logical canvas
    #[inline]
    pub fn to_logical(&self, window_pos: Vec2) -> Vec2 {
        window_pos / self.scale
    }

    /// Height matching the native 273:153 aspect for the current width
    pub fn native_aspect_height(&self) -> u32 {
        (u64::from(self.width) * NATIVE_H as u64 / NATIVE_W as u64) as u32
    }
}

/// Initial window size for a given screen.
///
/// The screen is divided by `divisor` and each axis snapped down to a whole
/// multiple of the native size. Small screens get the native size as is.
pub fn initial_window_size(screen: (u32, u32), divisor: f32) -> (u32, u32) {
    let w = screen.0 as f32 / divisor;
    let h = screen.1 as f32 / divisor;

    if w <= 300.0 || h <= 200.0 {
        return (NATIVE_W as u32, NATIVE_H as u32);
    }

    let w = NATIVE_W * (w / NATIVE_W).floor();
    let h = NATIVE_H * (h / NATIVE_H).floor();
    (w as u32, h as u32)
}

/// Top-left position that centres a window on the screen
pub fn centered_position(screen: (u32, u32), window: (u32, u32)) -> (i32, i32) {
    (
        (screen.0 / 2) as i32 - (window.0 / 2) as i32,
        (screen.1 / 2) as i32 - (window.1 / 2) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Control::DecreaseDifficulty.rect();
        assert!(rect.contains(Vec2::new(5.0, 130.0)));
        assert!(rect.contains(Vec2::new(17.9, 148.9)));
        assert!(!rect.contains(Vec2::new(18.0, 140.0)));
        assert!(!rect.contains(Vec2::new(10.0, 149.0)));
    }

    #[test]
    fn test_viewport_maps_window_to_logical() {
        let viewport = Viewport::from_window(546, 306);
        assert_eq!(viewport.scale, Vec2::new(2.0, 2.0));
        assert_eq!(viewport.to_logical(Vec2::new(200.0, 100.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_viewport_never_zero_scale() {
        let viewport = Viewport::from_window(0, 0);
        assert!(viewport.scale.x > 0.0 && viewport.scale.y > 0.0);
    }

    #[test]
    fn test_native_aspect_height() {
        assert_eq!(Viewport::from_window(546, 400).native_aspect_height(), 306);
        assert_eq!(Viewport::from_window(273, 10).native_aspect_height(), 153);
    }

    #[test]
    fn test_initial_window_size() {
        // 1080p: 384x216 snaps down to one native tile
        assert_eq!(initial_window_size((1920, 1080), 5.0), (273, 153));
        // 4K: 768x432 -> two tiles per axis
        assert_eq!(initial_window_size((3840, 2160), 5.0), (546, 306));
        // Too small to divide
        assert_eq!(initial_window_size((1280, 720), 5.0), (273, 153));
    }

    #[test]
    fn test_centered_position() {
        assert_eq!(centered_position((1920, 1080), (273, 153)), (824, 464));
    }
}
