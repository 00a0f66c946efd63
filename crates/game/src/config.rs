//! Game configuration (canvas, craft, regions, orbits). Loaded from config.ron at startup.

use engine_core::round_to;
use procgen::OrbitalLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Craft handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftTuning {
    /// Speed ceiling in pixels per tick.
    pub max_speed: f32,
    /// Speed change per boost/unboost step.
    pub boost_power: f32,
    /// Degrees turned per steering input.
    pub steering: f32,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            boost_power: 0.1,
            steering: 5.0,
        }
    }
}

impl CraftTuning {
    /// Speed ceiling rounded down to a multiple of 0.1.
    pub fn speed_cap(&self) -> f32 {
        ((self.max_speed * 10.0 + 1e-3).floor() / 10.0).max(0.0)
    }

    /// Boost step rounded to a multiple of 0.1, at least 0.1.
    pub fn boost_step(&self) -> f32 {
        round_to(self.boost_power, 1).max(0.1)
    }
}

/// Galaxy footprint and gradient settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyTuning {
    pub width: f32,
    pub height: f32,
    /// Fraction of the half-width reserved for the actionable target.
    pub target_percent: f32,
    /// Colors sampled from the representative icon (2..=4).
    pub color_variety: usize,
}

impl Default for GalaxyTuning {
    fn default() -> Self {
        Self {
            width: 240.0,
            height: 240.0,
            target_percent: 0.4,
            color_variety: 3,
        }
    }
}

/// Cryptoid size and target settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoidTuning {
    pub min_radius: i32,
    pub max_radius: i32,
    /// Target radius as a fraction of the visual radius.
    pub target_percent: f32,
}

impl Default for CryptoidTuning {
    fn default() -> Self {
        Self {
            min_radius: 5,
            max_radius: 25,
            target_percent: 0.6,
        }
    }
}

/// Orbital path spacing inside a galaxy view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitTuning {
    pub base_radius: f32,
    pub radius_step: f32,
    pub offset_step: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        let layout = OrbitalLayout::default();
        Self {
            base_radius: layout.base_radius,
            radius_step: layout.radius_step,
            offset_step: layout.offset_step,
        }
    }
}

/// Smallest spacing between neighboring orbits.
const MIN_RADIUS_STEP: f32 = 1.0;

impl From<OrbitTuning> for OrbitalLayout {
    fn from(t: OrbitTuning) -> Self {
        if t.radius_step < MIN_RADIUS_STEP {
            log::warn!("Orbit radius_step {} too small, using {}", t.radius_step, MIN_RADIUS_STEP);
        }
        OrbitalLayout {
            base_radius: t.base_radius.max(0.0),
            radius_step: t.radius_step.max(MIN_RADIUS_STEP),
            offset_step: t.offset_step,
        }
    }
}

/// Persistent game settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    /// Canvas height in pixels.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Seed for galaxy placement, palettes, radii and orbit angles.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Directory holding icons and craft sprites. Placeholders are generated when unset.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    /// RON catalog of galaxies and cryptoids. The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Frames the headless binary runs before exiting.
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
    #[serde(default)]
    pub craft: CraftTuning,
    #[serde(default)]
    pub galaxy: GalaxyTuning,
    #[serde(default)]
    pub cryptoid: CryptoidTuning,
    #[serde(default)]
    pub orbits: OrbitTuning,
}

fn default_canvas_width() -> u32 {
    1280
}
fn default_canvas_height() -> u32 {
    720
}
fn default_seed() -> u64 {
    0xC0FFEE
}
fn default_max_frames() -> u64 {
    1800
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            seed: default_seed(),
            assets_dir: None,
            catalog: None,
            max_frames: default_max_frames(),
            craft: CraftTuning::default(),
            galaxy: GalaxyTuning::default(),
            cryptoid: CryptoidTuning::default(),
            orbits: OrbitTuning::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    pub fn canvas_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.canvas_width as f32, self.canvas_height as f32)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}
