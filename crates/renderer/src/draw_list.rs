//! Recorded draw commands and the layered scene the host composites.

use glam::Vec2;

use crate::{Color, Cursor, RadialGradient, Sprite, Surface, TextAlign};

/// One recorded drawing operation, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        name: String,
        top_left: Vec2,
        size: Vec2,
        rotation_degrees: f32,
    },
    GradientRect {
        top_left: Vec2,
        size: Vec2,
        gradient: RadialGradient,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
        line_width: f32,
    },
    Text {
        text: String,
        position: Vec2,
        font_px: f32,
        color: Color,
        align: TextAlign,
    },
}

/// A surface that records commands instead of rasterizing them.
///
/// `clear` drops everything recorded so far, so the list always describes
/// exactly what is visible on the layer.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    cursor: Cursor,
    size: Vec2,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::new(),
            cursor: Cursor::Default,
            size: Vec2::new(width, height),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings currently drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Resize the layer; contents are discarded.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_sprite(&mut self, sprite: &Sprite, top_left: Vec2, size: Vec2, rotation_degrees: f32) {
        self.commands.push(DrawCommand::Sprite {
            name: sprite.name().to_string(),
            top_left,
            size,
            rotation_degrees,
        });
    }

    fn fill_rect_gradient(&mut self, top_left: Vec2, size: Vec2, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::GradientRect {
            top_left,
            size,
            gradient: gradient.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeEllipse {
            center,
            radii,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, position: Vec2, font_px: f32, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font_px,
            color,
            align,
        });
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

/// The three canvas layers, bottom to top.
#[derive(Debug, Clone)]
pub struct Layers {
    /// Regions and orbital paths.
    pub background: DrawList,
    /// Hover labels and cursor.
    pub interaction: DrawList,
    /// The craft sprite.
    pub craft: DrawList,
}

impl Layers {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            background: DrawList::new(width, height),
            interaction: DrawList::new(width, height),
            craft: DrawList::new(width, height),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.background.size()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.background.resize(width, height);
        self.interaction.resize(width, height);
        self.craft.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_recorded_commands() {
        let mut list = DrawList::new(100.0, 100.0);
        list.stroke_circle(Vec2::new(5.0, 5.0), 3.0, Color::WHITE, 2.0);
        list.fill_text("BTC", Vec2::ZERO, 12.0, Color::WHITE, TextAlign::Center);
        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.texts(), vec!["BTC"]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_survives_clear() {
        let mut list = DrawList::new(10.0, 10.0);
        list.set_cursor(Cursor::Pointer);
        list.clear();
        assert_eq!(list.cursor(), Cursor::Pointer);
    }

    #[test]
    fn layers_share_size() {
        let mut layers = Layers::new(640.0, 480.0);
        assert_eq!(layers.size(), Vec2::new(640.0, 480.0));
        layers.resize(800.0, 600.0);
        assert_eq!(layers.craft.size(), Vec2::new(800.0, 600.0));
        assert_eq!(layers.interaction.size(), Vec2::new(800.0, 600.0));
    }
}
