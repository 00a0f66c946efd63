//! Procedural generation for the Cryptoverse: icon palettes, orbital layouts,
//! and galaxy placement.

pub mod palette;
pub mod star_system;
pub mod universe;

pub use palette::*;
pub use star_system::*;
pub use universe::*;
