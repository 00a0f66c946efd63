//! Galaxy view generation: lay out a galaxy's cryptoids on orbital paths and
//! draw them.

use engine_core::Vec2;
use procgen::{OrbitalLayout, SystemLayout};
use rand::Rng;
use renderer::{Color, Surface};

use crate::assets::AssetSource;
use crate::config::CryptoidTuning;
use crate::cryptoid::Cryptoid;
use crate::galaxy::Galaxy;
use crate::region::Region;

const ORBIT_COLOR: Color = Color::rgba(255, 255, 255, 0.15);
const ORBIT_WIDTH: f32 = 1.0;

/// A generated galaxy view.
#[derive(Debug, Clone)]
pub struct StarSystem {
    pub layout: SystemLayout,
    pub cryptoids: Vec<Cryptoid>,
}

impl StarSystem {
    /// Lay out every cryptoid of `galaxy` around the canvas center and load their icons.
    ///
    /// A cryptoid whose icon fails to load is kept but stays inert.
    pub fn generate<R: Rng + ?Sized>(
        galaxy: &Galaxy,
        canvas: Vec2,
        orbits: &OrbitalLayout,
        tuning: &CryptoidTuning,
        assets: &dyn AssetSource,
        rng: &mut R,
    ) -> Self {
        let bodies = &galaxy.data().cryptoids;
        let layout = orbits.generate(canvas / 2.0, bodies.len(), rng);
        let cryptoids = bodies
            .iter()
            .zip(&layout.positions)
            .map(|(data, position)| {
                let mut cryptoid = Cryptoid::new(data.clone(), *position, tuning, rng);
                if let Err(e) = cryptoid.generate(assets) {
                    log::error!("Cryptoid {} in {}: {}", data.name, galaxy.name(), e);
                }
                cryptoid
            })
            .collect();
        log::info!(
            "Generated system {} with {} cryptoids on {} orbits",
            galaxy.name(),
            bodies.len(),
            layout.paths.len()
        );
        Self { layout, cryptoids }
    }

    /// Orbital paths first, then the bodies on top.
    pub fn draw(&self, surface: &mut dyn Surface) {
        draw_system(&self.layout, &self.cryptoids, surface);
    }
}

/// Draw orbital paths and cryptoids onto the background layer.
pub fn draw_system(layout: &SystemLayout, cryptoids: &[Cryptoid], surface: &mut dyn Surface) {
    for path in &layout.paths {
        surface.stroke_ellipse(
            path.center(layout.center),
            Vec2::new(path.radius_x, path.radius_y),
            ORBIT_COLOR,
            ORBIT_WIDTH,
        );
    }
    for cryptoid in cryptoids {
        cryptoid.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PlaceholderAssets;
    use crate::config::GalaxyTuning;
    use crate::data::Catalog;
    use rand::{rngs::StdRng, SeedableRng};
    use renderer::{DrawCommand, DrawList};

    fn galaxy() -> Galaxy {
        let data = Catalog::builtin().galaxies[0].clone();
        let mut g = Galaxy::new(data, Vec2::new(200.0, 200.0), &GalaxyTuning::default());
        g.generate(&PlaceholderAssets, &mut StdRng::seed_from_u64(0)).unwrap();
        g
    }

    #[test]
    fn representative_sits_at_canvas_center() {
        let g = galaxy();
        let system = StarSystem::generate(
            &g,
            Vec2::new(1280.0, 720.0),
            &OrbitalLayout::default(),
            &CryptoidTuning::default(),
            &PlaceholderAssets,
            &mut StdRng::seed_from_u64(5),
        );
        assert_eq!(system.cryptoids.len(), g.data().cryptoids.len());
        assert_eq!(system.layout.paths.len(), g.data().cryptoids.len() - 1);
        assert_eq!(system.cryptoids[0].center(), Vec2::new(640.0, 360.0));
        assert_eq!(system.cryptoids[0].name(), g.representative().unwrap().name);
        assert!(system.cryptoids.iter().all(|c| c.footprint().is_some()));
    }

    #[test]
    fn draws_paths_before_bodies() {
        let g = galaxy();
        let system = StarSystem::generate(
            &g,
            Vec2::new(1280.0, 720.0),
            &OrbitalLayout::default(),
            &CryptoidTuning::default(),
            &PlaceholderAssets,
            &mut StdRng::seed_from_u64(5),
        );
        let mut layer = DrawList::new(1280.0, 720.0);
        system.draw(&mut layer);
        let paths = system.layout.paths.len();
        assert!(layer.commands()[..paths]
            .iter()
            .all(|c| matches!(c, DrawCommand::StrokeEllipse { .. })));
        assert!(matches!(layer.commands()[paths], DrawCommand::Sprite { .. }));
        // sprite plus ring per body
        assert_eq!(layer.commands().len(), paths + 2 * system.cryptoids.len());
    }

    #[test]
    fn same_seed_same_system() {
        let g = galaxy();
        let make = || {
            StarSystem::generate(
                &g,
                Vec2::new(1280.0, 720.0),
                &OrbitalLayout::default(),
                &CryptoidTuning::default(),
                &PlaceholderAssets,
                &mut StdRng::seed_from_u64(11),
            )
        };
        let (a, b) = (make(), make());
        assert_eq!(a.layout, b.layout);
        let radii: Vec<f32> = a.cryptoids.iter().map(|c| c.radius()).collect();
        let radii_b: Vec<f32> = b.cryptoids.iter().map(|c| c.radius()).collect();
        assert_eq!(radii, radii_b);
    }
}
