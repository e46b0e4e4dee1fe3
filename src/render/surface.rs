//! Host-facing drawing types
//!
//! All calls are fire-and-forget: the surface either draws or drops, the
//! core never observes drawing failures.

use glam::Vec2;

use crate::sim::Rect;

/// Opaque image handle supplied by the host
pub trait Sprite {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Packed ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Placement for a rotated/scaled sprite draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTransform {
    /// Screen position of the sprite's untransformed top-left corner
    pub x: f32,
    pub y: f32,
    /// Clockwise rotation in degrees about `pivot`
    pub rotate_deg: f32,
    /// Pivot relative to the sprite's top-left corner
    pub pivot: Vec2,
    /// Uniform scale about the top-left corner
    pub scale: f32,
}

impl SpriteTransform {
    /// Identity placement at a position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotate_deg: 0.0,
            pivot: Vec2::ZERO,
            scale: 1.0,
        }
    }

    pub fn rotated(mut self, degrees: f32, pivot: Vec2) -> Self {
        self.rotate_deg = degrees;
        self.pivot = pivot;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Horizontal anchoring for text draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `x` is the left edge
    Left,
    /// `x` is the text center
    Center,
}

/// Text styling; `y` in draw calls is the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            bold: true,
            align: TextAlign::Left,
        }
    }

    pub const fn centered(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            bold: true,
            align: TextAlign::Center,
        }
    }
}

/// Receives one frame's draw calls, in paint order
pub trait DrawSurface {
    type Image: Sprite;

    fn clear(&mut self, color: Color);
    fn draw_image(&mut self, image: &Self::Image, x: i32, y: i32);
    fn draw_image_transformed(&mut self, image: &Self::Image, transform: &SpriteTransform);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    fn stroke_rect(&mut self, rect: &Rect, color: Color, stroke_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, stroke_width: f32);
}
