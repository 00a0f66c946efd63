//! Core types and utilities for the Cryptoverse navigation core.
//!
//! This crate provides the foundational pieces used across all crates:
//! - Angle, rounding, and random sampling helpers
//! - 2D shapes with point containment
//! - The frame `Ticker` abstraction that drives the animation loop

pub mod geometry;
pub mod shape;
pub mod time;

pub use geometry::*;
pub use shape::*;
pub use time::*;

// Re-export commonly used types
pub use glam::Vec2;
