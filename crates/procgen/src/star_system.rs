//! Orbital layout for a galaxy's system of cryptoids.
//!
//! The first body is the representative and sits at the system center. Every
//! other body gets its own concentric ellipse, one step wider than the last and
//! staggered slightly downward, and is placed once at a random angle on it.
//! Bodies do not move after placement.

use engine_core::degrees_to_radians;
use glam::Vec2;
use rand::Rng;

/// Ellipse used to place one body. Ephemeral: only lives for a system generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalPath {
    pub radius_x: f32,
    pub radius_y: f32,
    /// Downward shift of the ellipse center from the system center.
    pub vertical_offset: f32,
}

impl OrbitalPath {
    /// Ellipse center for a system centered at `system_center`.
    pub fn center(&self, system_center: Vec2) -> Vec2 {
        system_center + Vec2::new(0.0, self.vertical_offset)
    }

    /// Point on the ellipse at `angle_degrees`.
    pub fn point_at(&self, system_center: Vec2, angle_degrees: f32) -> Vec2 {
        let theta = degrees_to_radians(angle_degrees);
        let c = self.center(system_center);
        Vec2::new(
            c.x + self.radius_x * theta.cos(),
            c.y + self.radius_y * theta.sin(),
        )
    }
}

/// Ellipse spacing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalLayout {
    /// `radius_x` of the innermost ellipse.
    pub base_radius: f32,
    /// Added to `radius_x` for each further ellipse.
    pub radius_step: f32,
    /// Added to the vertical offset for each further ellipse.
    pub offset_step: f32,
}

impl Default for OrbitalLayout {
    fn default() -> Self {
        Self {
            base_radius: 90.0,
            radius_step: 55.0,
            offset_step: 6.0,
        }
    }
}

/// Result of laying out one system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemLayout {
    pub center: Vec2,
    /// One path per non-representative body, innermost first.
    pub paths: Vec<OrbitalPath>,
    /// One position per body; index 0 is the representative at `center`.
    pub positions: Vec<Vec2>,
    /// Placement angle in degrees for each path's body.
    pub angles: Vec<f32>,
}

impl OrbitalLayout {
    /// The `count` concentric ellipses, innermost first.
    pub fn paths(&self, count: usize) -> Vec<OrbitalPath> {
        (0..count)
            .map(|i| {
                let radius_x = self.base_radius + i as f32 * self.radius_step;
                OrbitalPath {
                    radius_x,
                    radius_y: radius_x / 3.0,
                    vertical_offset: i as f32 * self.offset_step,
                }
            })
            .collect()
    }

    /// Lay out `body_count` bodies around `center`.
    pub fn generate<R: Rng + ?Sized>(&self, center: Vec2, body_count: usize, rng: &mut R) -> SystemLayout {
        if body_count == 0 {
            return SystemLayout {
                center,
                paths: Vec::new(),
                positions: Vec::new(),
                angles: Vec::new(),
            };
        }

        let paths = self.paths(body_count - 1);
        let angles: Vec<f32> = paths.iter().map(|_| rng.gen_range(0.0..360.0)).collect();

        let mut positions = Vec::with_capacity(body_count);
        positions.push(center);
        positions.extend(
            paths
                .iter()
                .zip(&angles)
                .map(|(path, angle)| path.point_at(center, *angle)),
        );

        log::debug!(
            "Laid out {} bodies on {} orbital paths around ({:.0}, {:.0})",
            body_count,
            paths.len(),
            center.x,
            center.y
        );

        SystemLayout {
            center,
            paths,
            positions,
            angles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn n_bodies_make_n_minus_one_increasing_paths() {
        let mut rng = StdRng::seed_from_u64(42);
        let layout = OrbitalLayout::default().generate(Vec2::new(640.0, 360.0), 6, &mut rng);
        assert_eq!(layout.paths.len(), 5);
        assert_eq!(layout.positions.len(), 6);
        for pair in layout.paths.windows(2) {
            assert!(pair[1].radius_x > pair[0].radius_x);
            assert!(pair[1].vertical_offset >= pair[0].vertical_offset);
        }
        for path in &layout.paths {
            assert!((path.radius_y - path.radius_x / 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn representative_sits_at_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let center = Vec2::new(100.0, 80.0);
        let layout = OrbitalLayout::default().generate(center, 1, &mut rng);
        assert!(layout.paths.is_empty());
        assert_eq!(layout.positions, vec![center]);
    }

    #[test]
    fn bodies_lie_on_their_ellipse() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Vec2::new(500.0, 300.0);
        let layout = OrbitalLayout::default().generate(center, 4, &mut rng);
        for (i, path) in layout.paths.iter().enumerate() {
            let p = layout.positions[i + 1] - path.center(center);
            let v = (p.x / path.radius_x).powi(2) + (p.y / path.radius_y).powi(2);
            assert!((v - 1.0).abs() < 1e-3, "body {} off its ellipse: {}", i + 1, v);
            assert!((0.0..360.0).contains(&layout.angles[i]));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = OrbitalLayout::default().generate(Vec2::ZERO, 5, &mut StdRng::seed_from_u64(99));
        let b = OrbitalLayout::default().generate(Vec2::ZERO, 5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn point_at_zero_degrees_is_right_of_center() {
        let path = OrbitalPath {
            radius_x: 90.0,
            radius_y: 30.0,
            vertical_offset: 6.0,
        };
        let p = path.point_at(Vec2::new(10.0, 10.0), 0.0);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 16.0).abs() < 1e-4);
    }

    #[test]
    fn empty_system_has_no_paths() {
        let layout = OrbitalLayout::default().generate(Vec2::ZERO, 0, &mut StdRng::seed_from_u64(0));
        assert!(layout.paths.is_empty() && layout.positions.is_empty());
    }
}
