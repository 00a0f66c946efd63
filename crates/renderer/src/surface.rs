//! The drawing surface trait and the value types it draws with.

use std::fmt;

use glam::Vec2;

use crate::Sprite;

/// An sRGB color with straight alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A color stop at `offset` in `[0, 1]` along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Radial gradient between two concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops: Vec::new(),
        }
    }

    /// Append a stop. Offsets are clamped into `[0, 1]`.
    pub fn add_color_stop(&mut self, offset: f32, color: Color) -> &mut Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Pointer cursor style shown over a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// A 2D drawing target in canvas-pixel coordinates.
pub trait Surface {
    /// Width and height of the surface.
    fn size(&self) -> Vec2;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw `sprite` scaled into the box at `top_left` with `size`, rotated by
    /// `rotation_degrees` clockwise around the box center.
    fn draw_sprite(&mut self, sprite: &Sprite, top_left: Vec2, size: Vec2, rotation_degrees: f32);

    /// Fill the axis-aligned rectangle at `top_left` with `size` using a radial gradient.
    fn fill_rect_gradient(&mut self, top_left: Vec2, size: Vec2, gradient: &RadialGradient);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, line_width: f32);

    fn fill_text(&mut self, text: &str, position: Vec2, font_px: f32, color: Color, align: TextAlign);

    fn set_cursor(&mut self, cursor: Cursor);
}
