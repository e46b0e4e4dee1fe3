//! Rectangular touch buttons

use glam::Vec2;

use crate::render::Color;
use crate::sim::Rect;

/// A labeled on-screen button with a latched pressed state
#[derive(Debug, Clone)]
pub struct TouchButton {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Color,
    pub text_color: Color,
    pub pressed: bool,
}

impl TouchButton {
    pub fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        label: &'static str,
        color: Color,
        text_color: Color,
    ) -> Self {
        Self {
            rect: Rect::from_xywh(x, y, width, height),
            label,
            color,
            text_color,
            pressed: false,
        }
    }

    /// Hit test in screen pixels
    pub fn contains(&self, pos: Vec2) -> bool {
        self.rect.contains(pos.x as i32, pos.y as i32)
    }
}
