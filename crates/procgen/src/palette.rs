//! Representative colors sampled from an icon's pixels.
//!
//! Pixels below the opacity cutoff and pure black are ignored, the rest are
//! deduplicated in scan order and then sampled without replacement.

use std::collections::HashSet;
use std::fmt;

use image::RgbaImage;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pixels must be more opaque than this (alpha on 0–255, roughly 0.7).
pub const MIN_ALPHA: u8 = 178;

/// Palette size bounds for galaxy gradients.
pub const MIN_PALETTE: usize = 2;
pub const MAX_PALETTE: usize = 4;

/// Palette used when an icon yields too few usable colors.
pub const DEFAULT_PALETTE: [Rgb; MAX_PALETTE] = [
    Rgb::new(147, 112, 219),
    Rgb::new(72, 61, 139),
    Rgb::new(100, 149, 237),
    Rgb::new(25, 25, 112),
];

/// An opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Comma-joined form, e.g. `247,147,26`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// All distinct non-black colors of sufficiently opaque pixels, in scan order.
pub fn extract_rgbs(image: &RgbaImage) -> Vec<Rgb> {
    let mut seen = HashSet::new();
    image
        .pixels()
        .filter(|p| p[3] > MIN_ALPHA)
        .map(|p| Rgb::new(p[0], p[1], p[2]))
        .filter(|rgb| !rgb.is_black())
        .filter(|rgb| seen.insert(*rgb))
        .collect()
}

/// Up to `n` distinct colors chosen uniformly without replacement.
pub fn sample_rgbs<R: Rng + ?Sized>(rgbs: &[Rgb], n: usize, rng: &mut R) -> Vec<Rgb> {
    rgbs.choose_multiple(rng, n).copied().collect()
}

/// Sample `n` (clamped to 2..=4) representative colors from an icon.
///
/// Returns fewer than `n` colors (possibly none) when the icon does not have
/// enough qualifying pixels; see [`with_fallback`].
pub fn sample_palette<R: Rng + ?Sized>(image: &RgbaImage, n: usize, rng: &mut R) -> Vec<Rgb> {
    let n = n.clamp(MIN_PALETTE, MAX_PALETTE);
    let rgbs = extract_rgbs(image);
    if rgbs.len() < n {
        log::debug!("Icon has {} usable colors, wanted {}", rgbs.len(), n);
    }
    sample_rgbs(&rgbs, n, rng)
}

/// Pad a short palette up to `n` colors from [`DEFAULT_PALETTE`].
pub fn with_fallback(mut palette: Vec<Rgb>, n: usize) -> Vec<Rgb> {
    let n = n.clamp(MIN_PALETTE, MAX_PALETTE);
    if palette.is_empty() {
        return DEFAULT_PALETTE[..n].to_vec();
    }
    let missing = n.saturating_sub(palette.len());
    palette.extend(DEFAULT_PALETTE.iter().take(missing));
    palette.truncate(n);
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use rand::{rngs::StdRng, SeedableRng};

    fn icon(pixels: &[[u8; 4]]) -> RgbaImage {
        let mut img = RgbaImage::new(pixels.len() as u32, 1);
        for (i, p) in pixels.iter().enumerate() {
            img.put_pixel(i as u32, 0, Rgba(*p));
        }
        img
    }

    #[test]
    fn extract_filters_alpha_black_and_duplicates() {
        let img = icon(&[
            [247, 147, 26, 255],
            [247, 147, 26, 200],
            [0, 0, 0, 255],
            [10, 20, 30, 178],
            [10, 20, 30, 179],
            [255, 255, 255, 0],
        ]);
        let rgbs = extract_rgbs(&img);
        assert_eq!(rgbs, vec![Rgb::new(247, 147, 26), Rgb::new(10, 20, 30)]);
        assert_eq!(rgbs[0].to_string(), "247,147,26");
    }

    #[test]
    fn sample_without_replacement() {
        let rgbs: Vec<Rgb> = (1..=10).map(|i| Rgb::new(i, i, i)).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let sampled = sample_rgbs(&rgbs, 4, &mut rng);
        assert_eq!(sampled.len(), 4);
        let unique: HashSet<_> = sampled.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(sampled.iter().all(|c| rgbs.contains(c)));
    }

    #[test]
    fn transparent_icon_yields_empty_palette() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 40]));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_palette(&img, 3, &mut rng).is_empty());
        assert_eq!(with_fallback(Vec::new(), 3), DEFAULT_PALETTE[..3].to_vec());
    }

    #[test]
    fn short_palette_is_padded_and_size_clamped() {
        let one = vec![Rgb::new(1, 2, 3)];
        let padded = with_fallback(one, 3);
        assert_eq!(padded.len(), 3);
        assert_eq!(padded[0], Rgb::new(1, 2, 3));
        assert_eq!(padded[1], DEFAULT_PALETTE[0]);

        let img = icon(&[[1, 1, 1, 255], [2, 2, 2, 255], [3, 3, 3, 255], [4, 4, 4, 255], [5, 5, 5, 255]]);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(sample_palette(&img, 10, &mut rng).len(), MAX_PALETTE);
        assert_eq!(sample_palette(&img, 0, &mut rng).len(), MIN_PALETTE);
    }
}
