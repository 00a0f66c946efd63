//! Shared view state: which galaxy and cryptoid are in focus, and the regions
//! of the current views.
//!
//! Mutations only happen through [`ViewState::apply`] (or the named setters
//! that wrap it). Each applied command queues a [`ViewEvent`], which the
//! session drains to regenerate views and which tests use to assert the exact
//! transition sequence.

use crate::craft::Craft;
use crate::cryptoid::Cryptoid;
use crate::galaxy::Galaxy;

/// Index into [`ViewState::galaxies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GalaxyId(pub usize);

/// Index into [`ViewState::cryptoids`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CryptoidId(pub usize);

/// A typed mutation of the view state.
#[derive(Debug, Clone)]
pub enum ViewCommand {
    SetCurrentGalaxy(Option<GalaxyId>),
    SetCurrentCryptoid(Option<CryptoidId>),
    SetGalaxies(Vec<Galaxy>),
    SetCryptoids(Vec<Cryptoid>),
    SetRocket(Option<Craft>),
    SetShowInventory(bool),
    SetTotalCryptoids(usize),
}

/// What an applied command changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    CurrentGalaxyChanged {
        previous: Option<GalaxyId>,
        current: Option<GalaxyId>,
    },
    CurrentCryptoidChanged {
        previous: Option<CryptoidId>,
        current: Option<CryptoidId>,
    },
    GalaxiesReplaced(usize),
    CryptoidsReplaced(usize),
    RocketUpdated,
    InventoryToggled(bool),
    TotalCryptoids(usize),
}

#[derive(Debug, Default)]
pub struct ViewState {
    galaxies: Vec<Galaxy>,
    cryptoids: Vec<Cryptoid>,
    current_galaxy: Option<GalaxyId>,
    current_cryptoid: Option<CryptoidId>,
    rocket: Option<Craft>,
    show_inventory: bool,
    total_cryptoids: Option<usize>,
    events: Vec<ViewEvent>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command, queue its event, and return it.
    pub fn apply(&mut self, command: ViewCommand) -> ViewEvent {
        let event = match command {
            ViewCommand::SetCurrentGalaxy(current) => {
                debug_assert!(
                    current.map_or(true, |id| id.0 < self.galaxies.len()),
                    "current galaxy out of range"
                );
                let previous = std::mem::replace(&mut self.current_galaxy, current);
                ViewEvent::CurrentGalaxyChanged { previous, current }
            }
            ViewCommand::SetCurrentCryptoid(current) => {
                debug_assert!(
                    current.map_or(true, |id| id.0 < self.cryptoids.len()),
                    "current cryptoid out of range"
                );
                let previous = std::mem::replace(&mut self.current_cryptoid, current);
                ViewEvent::CurrentCryptoidChanged { previous, current }
            }
            ViewCommand::SetGalaxies(galaxies) => {
                self.galaxies = galaxies;
                ViewEvent::GalaxiesReplaced(self.galaxies.len())
            }
            ViewCommand::SetCryptoids(cryptoids) => {
                self.cryptoids = cryptoids;
                ViewEvent::CryptoidsReplaced(self.cryptoids.len())
            }
            ViewCommand::SetRocket(craft) => {
                self.rocket = craft;
                ViewEvent::RocketUpdated
            }
            ViewCommand::SetShowInventory(show) => {
                self.show_inventory = show;
                ViewEvent::InventoryToggled(show)
            }
            ViewCommand::SetTotalCryptoids(total) => {
                self.total_cryptoids = Some(total);
                ViewEvent::TotalCryptoids(total)
            }
        };
        self.events.push(event);
        event
    }

    pub fn set_current_galaxy(&mut self, galaxy: Option<GalaxyId>) -> ViewEvent {
        self.apply(ViewCommand::SetCurrentGalaxy(galaxy))
    }

    pub fn set_current_cryptoid(&mut self, cryptoid: Option<CryptoidId>) -> ViewEvent {
        self.apply(ViewCommand::SetCurrentCryptoid(cryptoid))
    }

    pub fn set_galaxies(&mut self, galaxies: Vec<Galaxy>) -> ViewEvent {
        self.apply(ViewCommand::SetGalaxies(galaxies))
    }

    pub fn set_cryptoids(&mut self, cryptoids: Vec<Cryptoid>) -> ViewEvent {
        self.apply(ViewCommand::SetCryptoids(cryptoids))
    }

    pub fn set_rocket(&mut self, craft: Option<Craft>) -> ViewEvent {
        self.apply(ViewCommand::SetRocket(craft))
    }

    pub fn set_show_inventory(&mut self, show: bool) -> ViewEvent {
        self.apply(ViewCommand::SetShowInventory(show))
    }

    pub fn set_total_cryptoids(&mut self, total: usize) -> ViewEvent {
        self.apply(ViewCommand::SetTotalCryptoids(total))
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn galaxies(&self) -> &[Galaxy] {
        &self.galaxies
    }

    pub fn cryptoids(&self) -> &[Cryptoid] {
        &self.cryptoids
    }

    pub fn galaxy(&self, id: GalaxyId) -> Option<&Galaxy> {
        self.galaxies.get(id.0)
    }

    pub fn cryptoid(&self, id: CryptoidId) -> Option<&Cryptoid> {
        self.cryptoids.get(id.0)
    }

    pub fn current_galaxy_id(&self) -> Option<GalaxyId> {
        self.current_galaxy
    }

    pub fn current_galaxy(&self) -> Option<&Galaxy> {
        self.current_galaxy.and_then(|id| self.galaxy(id))
    }

    pub fn current_cryptoid_id(&self) -> Option<CryptoidId> {
        self.current_cryptoid
    }

    pub fn current_cryptoid(&self) -> Option<&Cryptoid> {
        self.current_cryptoid.and_then(|id| self.cryptoid(id))
    }

    pub fn rocket(&self) -> Option<&Craft> {
        self.rocket.as_ref()
    }

    pub fn show_inventory(&self) -> bool {
        self.show_inventory
    }

    pub fn total_cryptoids(&self) -> Option<usize> {
        self.total_cryptoids
    }
}
