//! Decoded images ready to draw.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec2;
use image::RgbaImage;
use thiserror::Error;

/// Failure to turn an asset filename into a decoded image.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to read asset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode asset {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded RGBA image plus the name it was resolved from.
///
/// Cloning is cheap: the pixel buffer is shared.
#[derive(Debug, Clone)]
pub struct Sprite {
    name: String,
    image: Arc<RgbaImage>,
}

impl Sprite {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image: Arc::new(image),
        }
    }

    /// Decode an encoded image (PNG/JPEG) from memory.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, AssetError> {
        let name = name.into();
        let image = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Decode {
                name: name.clone(),
                source,
            })?
            .to_rgba8();
        Ok(Self::new(name, image))
    }

    /// Read and decode an image file.
    pub fn open(path: &Path) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(path.display().to_string())
            } else {
                AssetError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let sprite = Self::from_bytes(name, &bytes)?;
        log::debug!("Loaded {} ({}x{})", sprite.name, sprite.image.width(), sprite.image.height());
        Ok(sprite)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> f32 {
        self.image.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.image.height() as f32
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn sprite_reports_image_size() {
        let sprite = Sprite::new("rocket-sm.png", RgbaImage::from_pixel(12, 20, Rgba([255, 0, 0, 255])));
        assert_eq!(sprite.size(), Vec2::new(12.0, 20.0));
        assert_eq!(sprite.name(), "rocket-sm.png");
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = Sprite::from_bytes("btc.png", b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn png_round_trips_through_decoder() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let sprite = Sprite::from_bytes("icon.png", &bytes).unwrap();
        assert_eq!(sprite.image().get_pixel(2, 2), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Sprite::open(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }
}
