//! Draw command types handed to the backend

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
    /// Background while window transparency is on
    pub const TRANSLUCENT_BLACK: Color = Color::rgba(0, 0, 0, 165);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Textures the backend loads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Texture {
    /// Sprite sheet with every widget
    Atlas,
    /// Full-canvas death illustration
    Death,
}

/// How a text command's position is anchored horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Position is the top-left corner
    #[default]
    Left,
    /// Position is the top-centre; the backend measures the text
    Center,
}

/// One drawing operation on the logical canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Blit `src` from `texture` with its top-left at `dst`
    Sprite { texture: Texture, src: Rect, dst: Vec2 },
    Text {
        text: String,
        pos: Vec2,
        size: u32,
        color: Color,
        align: TextAlign,
    },
}

impl DrawCommand {
    pub fn sprite(texture: Texture, src: Rect, dst: Vec2) -> Self {
        Self::Sprite { texture, src, dst }
    }

    pub fn text(text: impl Into<String>, pos: Vec2, size: u32, color: Color) -> Self {
        Self::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn centered_text(text: impl Into<String>, pos: Vec2, size: u32, color: Color) -> Self {
        Self::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Center,
        }
    }

    /// Text content, for text commands
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            DrawCommand::Sprite { .. } => None,
        }
    }
}
