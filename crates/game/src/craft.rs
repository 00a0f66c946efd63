//! Craft kinematic state.
//!
//! Heading is in degrees, clockwise from straight up, always in `[0, 360)`.
//! Speed is in pixels per tick, always in `[0, max_speed]` and quantized to
//! one decimal place.

use engine_core::{degrees_to_radians, normalize_degrees, round_to, Vec2};

use crate::config::CraftTuning;

/// Which view the craft is cruising in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CraftMode {
    #[default]
    InCryptoverse,
    InGalaxy,
}

/// Screen edge the craft arrives from when entering a galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl EntryEdge {
    /// Edge for an approach heading: 45..=135 left, 135..225 top,
    /// 225..=315 right, otherwise bottom.
    pub fn from_heading(heading: f32) -> Self {
        if (45.0..=135.0).contains(&heading) {
            EntryEdge::Left
        } else if heading > 135.0 && heading < 225.0 {
            EntryEdge::Top
        } else if (225.0..=315.0).contains(&heading) {
            EntryEdge::Right
        } else {
            EntryEdge::Bottom
        }
    }

    /// Canonical heading after arriving from this edge.
    pub fn heading(&self) -> f32 {
        match self {
            EntryEdge::Left => 90.0,
            EntryEdge::Top => 180.0,
            EntryEdge::Right => 270.0,
            EntryEdge::Bottom => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Craft {
    /// Center of the craft in canvas pixels.
    pub position: Vec2,
    heading: f32,
    speed: f32,
    pub mode: CraftMode,
    /// Set on leaving a galaxy; cleared once no galaxy target contains the craft.
    pub leaving_galaxy: bool,
    /// Set on entering a cryptoid; cleared once no cryptoid target contains the craft.
    pub leaving_cryptoid: bool,
    /// Width and height of the active sprite.
    pub size: Vec2,
}

impl Craft {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            heading: 0.0,
            speed: 0.0,
            mode: CraftMode::InCryptoverse,
            leaving_galaxy: false,
            leaving_cryptoid: false,
            size: Vec2::ZERO,
        }
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_idle(&self) -> bool {
        self.speed == 0.0
    }

    /// One unit step along the heading.
    pub fn advance(&mut self) {
        let theta = degrees_to_radians(self.heading);
        self.position += Vec2::new(theta.sin(), -theta.cos()) * self.speed;
    }

    /// Rotate by `degrees` (negative turns left).
    pub fn turn(&mut self, degrees: f32) {
        self.heading = normalize_degrees(self.heading + degrees);
    }

    /// Point the craft at an absolute heading.
    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = normalize_degrees(degrees);
    }

    /// Speed up by one step, rounding before capping at the speed ceiling.
    pub fn boost(&mut self, tuning: &CraftTuning) {
        self.speed = round_to(self.speed + tuning.boost_step(), 1).min(tuning.speed_cap());
        self.check_invariants(tuning);
    }

    pub fn unboost(&mut self, tuning: &CraftTuning) {
        self.speed = round_to(self.speed - tuning.boost_step(), 1).max(0.0);
        self.check_invariants(tuning);
    }

    pub fn halt(&mut self) {
        self.speed = 0.0;
    }

    /// Whether the center is outside `[0, bounds]` on either axis.
    pub fn is_out_of_bounds(&self, bounds: Vec2) -> bool {
        let p = self.position;
        p.x > bounds.x || p.y < 0.0 || p.y > bounds.y || p.x < 0.0
    }

    /// Toroidal wrap, each axis independently.
    pub fn wrap(&mut self, bounds: Vec2) {
        if self.position.x > bounds.x {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = bounds.x;
        }
        if self.position.y < 0.0 {
            self.position.y = bounds.y;
        } else if self.position.y > bounds.y {
            self.position.y = 0.0;
        }
    }

    /// Move just inside the edge matching the approach heading and snap the heading.
    pub fn arrive_from_edge(&mut self, bounds: Vec2) -> EntryEdge {
        let edge = EntryEdge::from_heading(self.heading);
        let (w, h) = (self.size.x, self.size.y);
        self.position = match edge {
            EntryEdge::Left => Vec2::new(w, bounds.y / 2.0),
            EntryEdge::Top => Vec2::new(bounds.x / 2.0, h / 2.0),
            EntryEdge::Right => Vec2::new(bounds.x - w * 2.0, bounds.y / 2.0),
            EntryEdge::Bottom => Vec2::new(bounds.x / 2.0, bounds.y - h / 2.0),
        };
        self.heading = edge.heading();
        edge
    }

    fn check_invariants(&self, tuning: &CraftTuning) {
        debug_assert!(
            self.speed >= 0.0 && self.speed <= tuning.speed_cap(),
            "speed {} outside [0, {}]",
            self.speed,
            tuning.speed_cap()
        );
        debug_assert!((0.0..360.0).contains(&self.heading), "heading {} outside [0, 360)", self.heading);
    }
}
