//! Drawing surfaces for the Cryptoverse views.
//!
//! The host composites three layers: a background layer for regions and
//! orbital paths, an interaction layer for hover overlays, and a craft layer.
//! Each layer is a [`Surface`]; [`DrawList`] records commands for the host to
//! rasterize and doubles as the surface used in tests.

pub mod draw_list;
pub mod sprite;
pub mod surface;

pub use draw_list::*;
pub use sprite::*;
pub use surface::*;
