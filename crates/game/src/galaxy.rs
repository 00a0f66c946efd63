//! Galaxies: gradient-shaded regions of the cryptoverse.

use engine_core::{Shape, Vec2};
use procgen::{sample_palette, with_fallback, Rgb, MAX_PALETTE, MIN_PALETTE};
use rand::Rng;
use renderer::{AssetError, Color, RadialGradient, Surface};

use crate::assets::AssetSource;
use crate::config::GalaxyTuning;
use crate::data::{CryptoidData, GalaxyData};
use crate::region::{label_font_size, Footprint, Region};

/// Opacity of the innermost and outermost palette stops.
const PALETTE_ALPHA: (f32, f32) = (0.7, 0.3);

/// A cluster of cryptoids shown as a radial gradient in the cryptoverse view.
#[derive(Debug, Clone)]
pub struct Galaxy {
    data: GalaxyData,
    /// Center in cryptoverse coordinates.
    center: Vec2,
    width: f32,
    height: f32,
    target_percent: f32,
    color_variety: usize,
    palette: Vec<Rgb>,
    footprint: Option<Footprint>,
}

impl Galaxy {
    pub fn new(data: GalaxyData, center: Vec2, tuning: &GalaxyTuning) -> Self {
        Self {
            data,
            center,
            width: tuning.width,
            height: tuning.height,
            target_percent: tuning.target_percent.clamp(0.0, 1.0),
            color_variety: tuning.color_variety.clamp(MIN_PALETTE, MAX_PALETTE),
            palette: Vec::new(),
            footprint: None,
        }
    }

    /// Load the representative icon, sample its palette, and compute footprints.
    ///
    /// On error the galaxy stays ungenerated: it draws nothing and contains nothing.
    pub fn generate<R: Rng + ?Sized>(&mut self, assets: &dyn AssetSource, rng: &mut R) -> Result<(), AssetError> {
        let filename = self
            .representative()
            .map(|r| r.filename.clone())
            .ok_or_else(|| AssetError::NotFound(format!("representative of galaxy {}", self.data.name)))?;
        let icon = assets.load(&filename)?;

        let sampled = sample_palette(icon.image(), self.color_variety, rng);
        if sampled.len() < self.color_variety {
            log::debug!(
                "Galaxy {}: {} of {} colors sampled, padding with defaults",
                self.data.name,
                sampled.len(),
                self.color_variety
            );
        }
        self.palette = with_fallback(sampled, self.color_variety);
        self.footprint = Some(Footprint::new(
            Shape::rect(self.center, self.width, self.height),
            Shape::circle(self.center, self.target_radius()),
        ));
        Ok(())
    }

    pub fn data(&self) -> &GalaxyData {
        &self.data
    }

    pub fn representative(&self) -> Option<&CryptoidData> {
        self.data.representative()
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// `(width / 2) * target_percent / 2`, kept inside the visual rectangle.
    pub fn target_radius(&self) -> f32 {
        let r = (self.width / 2.0) * self.target_percent / 2.0;
        r.min(self.width.min(self.height) / 2.0)
    }

    /// Near-white core, palette colors outward up to `target_percent`, then transparent.
    pub fn gradient(&self) -> RadialGradient {
        let mut gradient = RadialGradient::new(self.center, 2.0, self.height / 2.0);
        gradient.add_color_stop(0.0, Color::rgba(255, 255, 255, 0.8));
        let n = self.palette.len();
        for (i, rgb) in self.palette.iter().enumerate() {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let alpha = PALETTE_ALPHA.0 + (PALETTE_ALPHA.1 - PALETTE_ALPHA.0) * t;
            let offset = self.target_percent * (i + 1) as f32 / n as f32;
            gradient.add_color_stop(offset, Color::rgba(rgb.r, rgb.g, rgb.b, alpha));
        }
        gradient.add_color_stop(1.0, Color::TRANSPARENT);
        gradient
    }
}

impl Region for Galaxy {
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
        let r = self.target_radius();
        let font = label_font_size(r);
        (self.center + Vec2::new(0.0, r + font), font)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let Some(footprint) = &self.footprint else {
            return;
        };
        let visual = footprint.visual();
        surface.fill_rect_gradient(visual.min(), visual.max() - visual.min(), &self.gradient());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssets;
    use image::{Rgba, RgbaImage};
    use rand::{rngs::StdRng, SeedableRng};
    use renderer::{DrawCommand, DrawList};

    fn data() -> GalaxyData {
        GalaxyData {
            name: "Proof of Work".into(),
            cryptoids: vec![CryptoidData::new("Bitcoin", "BTC", 1)],
        }
    }

    fn striped_icon() -> RgbaImage {
        RgbaImage::from_fn(8, 8, |x, _| Rgba([(x * 30) as u8 + 10, 100, 200, 255]))
    }

    fn generated(tuning: &GalaxyTuning) -> Galaxy {
        let mut assets = MemoryAssets::new();
        assets.insert("btc.png", striped_icon());
        let mut g = Galaxy::new(data(), Vec2::new(400.0, 300.0), tuning);
        g.generate(&assets, &mut StdRng::seed_from_u64(1)).unwrap();
        g
    }

    #[test]
    fn target_radius_formula() {
        let g = generated(&GalaxyTuning::default());
        // (240 / 2) * 0.4 / 2
        assert!((g.target_radius() - 24.0).abs() < 1e-4);
    }

    #[test]
    fn visual_but_not_target_point_is_outside() {
        let g = generated(&GalaxyTuning::default());
        let inside_visual = Vec2::new(400.0 + 100.0, 300.0);
        assert!(g.footprint().unwrap().visual().contains_point(inside_visual));
        assert!(!g.contains_point(inside_visual));
        assert!(g.contains_point(Vec2::new(410.0, 305.0)));
    }

    #[test]
    fn ungenerated_galaxy_is_inert() {
        let g = Galaxy::new(data(), Vec2::new(400.0, 300.0), &GalaxyTuning::default());
        assert!(!g.contains_point(Vec2::new(400.0, 300.0)));
        let mut layer = DrawList::new(800.0, 600.0);
        g.draw(&mut layer);
        assert!(layer.is_empty());
    }

    #[test]
    fn missing_icon_leaves_galaxy_ungenerated() {
        let mut g = Galaxy::new(data(), Vec2::ZERO, &GalaxyTuning::default());
        let err = g.generate(&MemoryAssets::new(), &mut StdRng::seed_from_u64(0));
        assert!(err.is_err());
        assert!(g.footprint().is_none());
    }

    #[test]
    fn gradient_stops_run_white_palette_transparent() {
        let g = generated(&GalaxyTuning::default());
        let grad = g.gradient();
        assert_eq!(g.palette().len(), 3);
        assert_eq!(grad.stops.len(), 5);
        assert_eq!(grad.stops[0].color, Color::rgba(255, 255, 255, 0.8));
        assert_eq!(grad.stops[4].offset, 1.0);
        assert_eq!(grad.stops[4].color.a, 0.0);
        let offsets: Vec<f32> = grad.stops.iter().map(|s| s.offset).collect();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert!((grad.stops[3].offset - 0.4).abs() < 1e-5);
        assert!((grad.stops[1].color.a - 0.7).abs() < 1e-5);
        assert!((grad.stops[3].color.a - 0.3).abs() < 1e-5);
    }

    #[test]
    fn draw_is_idempotent() {
        let g = generated(&GalaxyTuning::default());
        let mut once = DrawList::new(800.0, 600.0);
        g.draw(&mut once);
        let mut twice = DrawList::new(800.0, 600.0);
        g.draw(&mut twice);
        twice.clear();
        g.draw(&mut twice);
        assert_eq!(once.commands(), twice.commands());
        match &once.commands()[0] {
            DrawCommand::GradientRect { top_left, size, .. } => {
                assert_eq!(*top_left, Vec2::new(280.0, 180.0));
                assert_eq!(*size, Vec2::new(240.0, 240.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn flat_icon_falls_back_to_default_palette() {
        let mut assets = MemoryAssets::new();
        assets.insert("btc.png", RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        let mut g = Galaxy::new(data(), Vec2::ZERO, &GalaxyTuning::default());
        g.generate(&assets, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(g.palette(), &procgen::DEFAULT_PALETTE[..3]);
    }
}
