//! 2D shapes used for region footprints and hit-testing.

use glam::Vec2;

/// A closed 2D shape in canvas-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Disc around `center`.
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned rectangle around `center`.
    Rect { center: Vec2, half_extents: Vec2 },
}

impl Shape {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Rectangle from its center and full width/height.
    pub fn rect(center: Vec2, width: f32, height: f32) -> Self {
        Shape::Rect {
            center,
            half_extents: Vec2::new(width.max(0.0), height.max(0.0)) * 0.5,
        }
    }

    pub fn center(&self) -> Vec2 {
        match *self {
            Shape::Circle { center, .. } | Shape::Rect { center, .. } => center,
        }
    }

    /// Half width and half height of the bounding box.
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius, .. } => Vec2::splat(radius),
            Shape::Rect { half_extents, .. } => half_extents,
        }
    }

    /// Top-left corner of the bounding box.
    pub fn min(&self) -> Vec2 {
        self.center() - self.half_extents()
    }

    /// Bottom-right corner of the bounding box.
    pub fn max(&self) -> Vec2 {
        self.center() + self.half_extents()
    }

    /// Point-in-shape test. Points on the boundary count as inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        match *self {
            Shape::Circle { center, radius } => point.distance_squared(center) <= radius * radius,
            Shape::Rect {
                center,
                half_extents,
            } => {
                let d = (point - center).abs();
                d.x <= half_extents.x && d.y <= half_extents.y
            }
        }
    }

    /// Whether `other` lies entirely within this shape.
    pub fn encloses(&self, other: &Shape) -> bool {
        match (*self, *other) {
            (
                Shape::Circle { center, radius },
                Shape::Circle {
                    center: c,
                    radius: r,
                },
            ) => center.distance(c) + r <= radius + f32::EPSILON,
            (Shape::Circle { .. }, Shape::Rect { .. }) => {
                let (min, max) = (other.min(), other.max());
                [min, max, Vec2::new(min.x, max.y), Vec2::new(max.x, min.y)]
                    .into_iter()
                    .all(|corner| self.contains_point(corner))
            }
            (Shape::Rect { .. }, _) => {
                let (min, max) = (self.min(), self.max());
                let (omin, omax) = (other.min(), other.max());
                omin.x >= min.x && omin.y >= min.y && omax.x <= max.x && omax.y <= max.y
            }
        }
    }

    /// Whether the bounding boxes of two shapes overlap.
    pub fn bounds_overlap(&self, other: &Shape) -> bool {
        let (min, max) = (self.min(), self.max());
        let (omin, omax) = (other.min(), other.max());
        min.x < omax.x && omin.x < max.x && min.y < omax.y && omin.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_contains_boundary_and_rejects_outside() {
        let c = Shape::circle(Vec2::new(10.0, 10.0), 5.0);
        assert!(c.contains_point(Vec2::new(15.0, 10.0)));
        assert!(c.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!c.contains_point(Vec2::new(14.0, 14.0)));
    }

    #[test]
    fn rect_contains_by_half_extents() {
        let r = Shape::rect(Vec2::new(100.0, 50.0), 40.0, 20.0);
        assert!(r.contains_point(Vec2::new(120.0, 60.0)));
        assert!(!r.contains_point(Vec2::new(121.0, 50.0)));
        assert_eq!(r.min(), Vec2::new(80.0, 40.0));
        assert_eq!(r.max(), Vec2::new(120.0, 60.0));
    }

    #[test]
    fn encloses_concentric_shapes() {
        let rect = Shape::rect(Vec2::ZERO, 100.0, 60.0);
        assert!(rect.encloses(&Shape::circle(Vec2::ZERO, 30.0)));
        assert!(!rect.encloses(&Shape::circle(Vec2::ZERO, 31.0)));

        let big = Shape::circle(Vec2::ZERO, 10.0);
        assert!(big.encloses(&Shape::circle(Vec2::ZERO, 10.0)));
        assert!(!big.encloses(&Shape::circle(Vec2::new(1.0, 0.0), 10.0)));
        assert!(!big.encloses(&Shape::rect(Vec2::ZERO, 20.0, 20.0)));
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let c = Shape::circle(Vec2::ZERO, -3.0);
        assert_eq!(c.half_extents(), Vec2::ZERO);
        assert!(c.contains_point(Vec2::ZERO));
    }
}
