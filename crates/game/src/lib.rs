//! Cryptoverse navigation core: galaxies and cryptoids as hit-testable
//! regions, a craft flown between them, and the view transitions that follow.

pub mod assets;
pub mod config;
pub mod controller;
pub mod craft;
pub mod cryptoid;
pub mod data;
pub mod galaxy;
pub mod hover;
pub mod region;
pub mod session;
pub mod state;
pub mod system;

pub use assets::{AssetSource, DirectoryAssets, MemoryAssets, PlaceholderAssets};
pub use config::GameConfig;
pub use controller::CraftController;
pub use craft::{Craft, CraftMode};
pub use cryptoid::Cryptoid;
pub use data::{Catalog, CryptoidData, GalaxyData};
pub use galaxy::Galaxy;
pub use region::Region;
pub use session::Cryptoverse;
pub use state::{CryptoidId, GalaxyId, ViewCommand, ViewEvent, ViewState};
