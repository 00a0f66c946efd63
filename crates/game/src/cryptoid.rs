//! Cryptoids: icon bodies orbiting inside a galaxy view.

use engine_core::{random_int, Shape, Vec2};
use rand::Rng;
use renderer::{AssetError, Color, Sprite, Surface};

use crate::assets::AssetSource;
use crate::config::CryptoidTuning;
use crate::data::CryptoidData;
use crate::region::{label_font_size, Footprint, Region};

/// Light blue ring drawn around each icon.
const BORDER: Color = Color::rgba(173, 216, 230, 0.5);

#[derive(Debug, Clone)]
pub struct Cryptoid {
    data: CryptoidData,
    /// Center in galaxy-view coordinates.
    center: Vec2,
    radius: f32,
    target_percent: f32,
    icon: Option<Sprite>,
    footprint: Option<Footprint>,
}

impl Cryptoid {
    /// Create a cryptoid with a radius drawn once from the tuning bounds.
    pub fn new<R: Rng + ?Sized>(data: CryptoidData, center: Vec2, tuning: &CryptoidTuning, rng: &mut R) -> Self {
        let radius = random_int(rng, tuning.min_radius, tuning.max_radius).max(1) as f32;
        Self {
            data,
            center,
            radius,
            target_percent: tuning.target_percent.clamp(0.0, 1.0),
            icon: None,
            footprint: None,
        }
    }

    /// Load the icon and compute footprints.
    pub fn generate(&mut self, assets: &dyn AssetSource) -> Result<(), AssetError> {
        self.icon = Some(assets.load(&self.data.filename)?);
        self.footprint = Some(Footprint::new(
            Shape::circle(self.center, self.radius),
            Shape::circle(self.center, self.radius * self.target_percent),
        ));
        Ok(())
    }

    pub fn data(&self) -> &CryptoidData {
        &self.data
    }

    pub fn symbol(&self) -> &str {
        &self.data.symbol
    }

    pub fn rank(&self) -> u32 {
        self.data.rank
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn font_size(&self) -> f32 {
        label_font_size(self.radius)
    }
}

impl Region for Cryptoid {
    fn name(&self) -> &str {
        &self.data.name
    }

    fn center(&self) -> Vec2 {
        self.center
    }

    fn footprint(&self) -> Option<&Footprint> {
        self.footprint.as_ref()
    }

    fn label_anchor(&self) -> (Vec2, f32) {
        let font = self.font_size();
        (self.center + Vec2::new(0.0, self.radius + font), font)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let (Some(icon), Some(_)) = (&self.icon, &self.footprint) else {
            return;
        };
        surface.draw_sprite(
            icon,
            self.center - Vec2::splat(self.radius),
            Vec2::splat(self.radius * 2.0),
            0.0,
        );
        surface.stroke_circle(self.center, self.radius, BORDER, 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssets;
    use crate::region::Hover;
    use image::RgbaImage;
    use rand::{rngs::StdRng, SeedableRng};
    use renderer::{DrawCommand, DrawList};

    fn assets() -> MemoryAssets {
        let mut a = MemoryAssets::new();
        a.insert("eth.png", RgbaImage::new(16, 16));
        a
    }

    fn eth(center: Vec2, tuning: &CryptoidTuning, seed: u64) -> Cryptoid {
        let mut c = Cryptoid::new(CryptoidData::new("Ethereum", "ETH", 2), center, tuning, &mut StdRng::seed_from_u64(seed));
        c.generate(&assets()).unwrap();
        c
    }

    #[test]
    fn radius_stays_in_bounds() {
        for seed in 0..200 {
            let c = Cryptoid::new(
                CryptoidData::new("Ethereum", "ETH", 2),
                Vec2::ZERO,
                &CryptoidTuning::default(),
                &mut StdRng::seed_from_u64(seed),
            );
            assert!((5.0..=25.0).contains(&c.radius()));
            assert_eq!(c.radius().fract(), 0.0);
            assert!(c.font_size() >= 12.0);
        }
    }

    #[test]
    fn fractional_target_shrinks_capture_zone() {
        let tuning = CryptoidTuning {
            min_radius: 20,
            max_radius: 20,
            target_percent: 0.5,
        };
        let c = eth(Vec2::new(100.0, 100.0), &tuning, 0);
        assert!(c.contains_point(Vec2::new(109.0, 100.0)));
        assert!(c.footprint().unwrap().visual().contains_point(Vec2::new(115.0, 100.0)));
        assert!(!c.contains_point(Vec2::new(115.0, 100.0)));
    }

    #[test]
    fn default_target_is_smaller_than_body() {
        let tuning = CryptoidTuning {
            min_radius: 20,
            max_radius: 20,
            ..CryptoidTuning::default()
        };
        let c = eth(Vec2::new(100.0, 100.0), &tuning, 0);
        assert!(c.contains_point(Vec2::new(112.0, 100.0)));
        assert!(c.footprint().unwrap().visual().contains_point(Vec2::new(116.0, 100.0)));
        assert!(!c.contains_point(Vec2::new(116.0, 100.0)));
    }

    #[test]
    fn draws_icon_and_ring() {
        let tuning = CryptoidTuning {
            min_radius: 10,
            max_radius: 10,
            ..CryptoidTuning::default()
        };
        let c = eth(Vec2::new(50.0, 60.0), &tuning, 0);
        let mut layer = DrawList::new(200.0, 200.0);
        c.draw(&mut layer);
        assert_eq!(
            layer.commands()[0],
            DrawCommand::Sprite {
                name: "eth.png".into(),
                top_left: Vec2::new(40.0, 50.0),
                size: Vec2::new(20.0, 20.0),
                rotation_degrees: 0.0,
            }
        );
        assert!(matches!(layer.commands()[1], DrawCommand::StrokeCircle { radius, .. } if radius == 10.0));
    }

    #[test]
    fn hover_label_sits_below_body() {
        let tuning = CryptoidTuning {
            min_radius: 10,
            max_radius: 10,
            ..CryptoidTuning::default()
        };
        let c = eth(Vec2::new(50.0, 60.0), &tuning, 0);
        let mut overlay = DrawList::new(200.0, 200.0);
        c.handle_hover(Hover::Enter, &mut overlay);
        match &overlay.commands()[0] {
            DrawCommand::Text { text, position, font_px, .. } => {
                assert_eq!(text, "Ethereum");
                assert_eq!(*font_px, 12.0);
                assert_eq!(*position, Vec2::new(50.0, 82.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn missing_icon_is_reported() {
        let mut c = Cryptoid::new(
            CryptoidData::new("Solana", "SOL", 5),
            Vec2::ZERO,
            &CryptoidTuning::default(),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(c.generate(&assets()).is_err());
        assert!(!c.contains_point(Vec2::ZERO));
    }
}
