//! Asset resolution: filename in, decoded sprite out.

use std::collections::HashMap;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use rand::prelude::*;
use renderer::{AssetError, Sprite};

/// Craft sprite used in the cryptoverse view.
pub const CRAFT_SMALL: &str = "rocket-sm.png";
/// Craft sprite used in the galaxy view.
pub const CRAFT_LARGE: &str = "rocket-lg.png";

/// Resolves a filename to a decoded image.
pub trait AssetSource {
    fn load(&self, filename: &str) -> Result<Sprite, AssetError>;
}

/// Reads images from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, filename: &str) -> Result<Sprite, AssetError> {
        Sprite::open(&self.root.join(filename))
    }
}

/// Preloaded sprites keyed by filename.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    sprites: HashMap<String, Sprite>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: &str, image: RgbaImage) -> &mut Self {
        self.sprites
            .insert(filename.to_string(), Sprite::new(filename, image));
        self
    }
}

impl AssetSource for MemoryAssets {
    fn load(&self, filename: &str) -> Result<Sprite, AssetError> {
        self.sprites
            .get(filename)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(filename.to_string()))
    }
}

/// Synthesizes deterministic images so the core runs without any asset files.
///
/// Icons are two-tone discs colored from the filename; craft sprites are
/// solid wedges at the small and large sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAssets;

impl PlaceholderAssets {
    const ICON_SIZE: u32 = 64;

    fn name_seed(filename: &str) -> u64 {
        filename
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325, |h, b| (h ^ b as u64).wrapping_mul(0x0100_0000_01b3))
    }

    fn icon(filename: &str) -> RgbaImage {
        let mut rng = StdRng::seed_from_u64(Self::name_seed(filename));
        let outer = Rgba([rng.gen_range(40..=255), rng.gen_range(40..=255), rng.gen_range(40..=255), 255]);
        let inner = Rgba([rng.gen_range(40..=255), rng.gen_range(40..=255), rng.gen_range(40..=255), 255]);
        let size = Self::ICON_SIZE;
        let c = size as f32 / 2.0;
        RgbaImage::from_fn(size, size, |x, y| {
            let d = ((x as f32 + 0.5 - c).powi(2) + (y as f32 + 0.5 - c).powi(2)).sqrt();
            if d <= c * 0.5 {
                inner
            } else if d <= c {
                outer
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    fn craft(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            // wedge pointing up
            let half = width as f32 / 2.0 * (y as f32 + 1.0) / height as f32;
            if (x as f32 + 0.5 - width as f32 / 2.0).abs() <= half {
                Rgba([220, 220, 235, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }
}

impl AssetSource for PlaceholderAssets {
    fn load(&self, filename: &str) -> Result<Sprite, AssetError> {
        let image = match filename {
            CRAFT_SMALL => Self::craft(16, 24),
            CRAFT_LARGE => Self::craft(32, 48),
            _ => Self::icon(filename),
        };
        Ok(Sprite::new(filename, image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_icons_are_deterministic_and_colorful() {
        let a = PlaceholderAssets.load("btc.png").unwrap();
        let b = PlaceholderAssets.load("btc.png").unwrap();
        assert_eq!(a.image().as_raw(), b.image().as_raw());
        assert!(!procgen::extract_rgbs(a.image()).is_empty());
    }

    #[test]
    fn placeholder_craft_sizes() {
        assert_eq!(PlaceholderAssets.load(CRAFT_SMALL).unwrap().size(), glam::Vec2::new(16.0, 24.0));
        assert_eq!(PlaceholderAssets.load(CRAFT_LARGE).unwrap().size(), glam::Vec2::new(32.0, 48.0));
    }

    #[test]
    fn memory_assets_report_missing_files() {
        let mut assets = MemoryAssets::new();
        assets.insert("eth.png", RgbaImage::new(2, 2));
        assert!(assets.load("eth.png").is_ok());
        assert!(matches!(assets.load("sol.png"), Err(AssetError::NotFound(_))));
    }

    #[test]
    fn directory_assets_missing_file() {
        let assets = DirectoryAssets::new("/no/such/dir");
        assert!(assets.load("btc.png").is_err());
    }
}
