//! Shared behavior of galaxies and cryptoids.
//!
//! A region is drawn with its visual footprint but hit-tested against a
//! smaller concentric target footprint. Until a region has been generated it
//! has no footprint at all, and containment is simply false.

use engine_core::{Shape, Vec2};
use renderer::{Color, Cursor, Surface, TextAlign};

/// Drawn extent plus the smaller actionable extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    visual: Shape,
    target: Shape,
}

impl Footprint {
    /// Build a footprint. The target must be concentric with and inside the visual shape.
    pub fn new(visual: Shape, target: Shape) -> Self {
        debug_assert!(
            visual.center().distance(target.center()) < 1e-3,
            "target footprint must share the visual center"
        );
        debug_assert!(visual.encloses(&target), "target footprint exceeds visual footprint");
        Self { visual, target }
    }

    pub fn visual(&self) -> &Shape {
        &self.visual
    }

    pub fn target(&self) -> &Shape {
        &self.target
    }
}

/// Pointer crossing a region boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Exit,
}

/// A galaxy or cryptoid as seen by the craft controller and the hover tracker.
pub trait Region {
    fn name(&self) -> &str;

    fn center(&self) -> Vec2;

    /// `None` until `generate` has completed.
    fn footprint(&self) -> Option<&Footprint>;

    /// Label position and font size for hover text.
    fn label_anchor(&self) -> (Vec2, f32);

    /// Draw onto the background layer. Safe to repeat.
    fn draw(&self, surface: &mut dyn Surface);

    /// Containment against the target footprint only.
    fn contains_point(&self, point: Vec2) -> bool {
        self.footprint()
            .map_or(false, |f| f.target().contains_point(point))
    }

    /// Show or hide the hover label on the interaction layer.
    fn handle_hover(&self, hover: Hover, surface: &mut dyn Surface) {
        match hover {
            Hover::Enter => {
                surface.set_cursor(Cursor::Pointer);
                let (position, font_px) = self.label_anchor();
                surface.fill_text(self.name(), position, font_px, Color::WHITE, TextAlign::Center);
            }
            Hover::Exit => {
                surface.set_cursor(Cursor::Default);
                surface.clear();
            }
        }
    }
}

/// Label font size for a region of `radius`: half the radius, at least 12px.
pub fn label_font_size(radius: f32) -> f32 {
    (radius / 2.0).max(12.0)
}

/// Index of the last region whose target contains `point`.
pub fn last_containing<R: Region>(regions: &[R], point: Vec2) -> Option<usize> {
    regions.iter().rposition(|r| r.contains_point(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderer::DrawList;

    struct Dot {
        footprint: Option<Footprint>,
    }

    impl Region for Dot {
        fn name(&self) -> &str {
            "dot"
        }
        fn center(&self) -> Vec2 {
            Vec2::ZERO
        }
        fn footprint(&self) -> Option<&Footprint> {
            self.footprint.as_ref()
        }
        fn label_anchor(&self) -> (Vec2, f32) {
            (Vec2::new(0.0, 22.0), 12.0)
        }
        fn draw(&self, _surface: &mut dyn Surface) {}
    }

    fn dot(radius: f32) -> Dot {
        Dot {
            footprint: Some(Footprint::new(
                Shape::circle(Vec2::ZERO, radius * 2.0),
                Shape::circle(Vec2::ZERO, radius),
            )),
        }
    }

    #[test]
    fn ungenerated_region_contains_nothing() {
        let d = Dot { footprint: None };
        assert!(!d.contains_point(Vec2::ZERO));
    }

    #[test]
    fn containment_uses_target_not_visual() {
        let d = dot(10.0);
        assert!(d.contains_point(Vec2::new(9.0, 0.0)));
        assert!(d.footprint().unwrap().visual().contains_point(Vec2::new(15.0, 0.0)));
        assert!(!d.contains_point(Vec2::new(15.0, 0.0)));
    }

    #[test]
    fn last_containing_breaks_ties_by_order() {
        let regions = vec![dot(10.0), Dot { footprint: None }, dot(5.0)];
        assert_eq!(last_containing(&regions, Vec2::new(1.0, 1.0)), Some(2));
        assert_eq!(last_containing(&regions, Vec2::new(8.0, 0.0)), Some(0));
        assert_eq!(last_containing(&regions, Vec2::new(50.0, 0.0)), None);
    }

    #[test]
    fn hover_shows_then_clears_label() {
        let d = dot(10.0);
        let mut layer = DrawList::new(100.0, 100.0);
        d.handle_hover(Hover::Enter, &mut layer);
        assert_eq!(layer.cursor(), Cursor::Pointer);
        assert_eq!(layer.texts(), vec!["dot"]);
        d.handle_hover(Hover::Exit, &mut layer);
        assert_eq!(layer.cursor(), Cursor::Default);
        assert!(layer.is_empty());
    }

    #[test]
    fn label_font_floors_at_twelve() {
        assert_eq!(label_font_size(5.0), 12.0);
        assert_eq!(label_font_size(30.0), 15.0);
    }
}
