//! The Cryptoverse session: owns the view state, canvas layers, craft
//! controller and asset source, and regenerates views when the current galaxy
//! changes.

use engine_core::{Ticker, Vec2};
use input::{ElementState, KeyCode, KeyEvent};
use procgen::{place_galaxies, OrbitalLayout, SystemLayout};
use rand::{rngs::StdRng, SeedableRng};
use renderer::{AssetError, Layers, Surface};

use crate::assets::AssetSource;
use crate::config::GameConfig;
use crate::controller::CraftController;
use crate::data::Catalog;
use crate::galaxy::Galaxy;
use crate::hover::HoverTracker;
use crate::region::Region;
use crate::state::{GalaxyId, ViewEvent, ViewState};
use crate::system::{draw_system, StarSystem};

pub struct Cryptoverse<T: Ticker> {
    config: GameConfig,
    assets: Box<dyn AssetSource>,
    rng: StdRng,
    state: ViewState,
    layers: Layers,
    controller: CraftController<T>,
    hover: HoverTracker,
    system: Option<SystemLayout>,
    transitions: Vec<ViewEvent>,
}

impl<T: Ticker> Cryptoverse<T> {
    /// Place and generate every galaxy, draw the cryptoverse, and spawn an idle
    /// craft at the canvas center.
    ///
    /// Galaxies whose icon fails to load are logged and left inert. A missing
    /// craft sprite is an error.
    pub fn new(config: GameConfig, catalog: &Catalog, assets: Box<dyn AssetSource>, ticker: T) -> Result<Self, AssetError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let canvas = config.canvas_size();
        let mut layers = Layers::new(canvas.x, canvas.y);
        let mut state = ViewState::new();

        let galaxy_size = Vec2::new(config.galaxy.width, config.galaxy.height);
        let centers = place_galaxies(catalog.galaxies.len(), canvas, galaxy_size, &mut rng);
        let galaxies: Vec<Galaxy> = catalog
            .galaxies
            .iter()
            .zip(centers)
            .map(|(data, center)| {
                let mut galaxy = Galaxy::new(data.clone(), center, &config.galaxy);
                if let Err(e) = galaxy.generate(assets.as_ref(), &mut rng) {
                    log::error!("Galaxy {}: {}", data.name, e);
                }
                galaxy
            })
            .collect();
        log::info!(
            "Cryptoverse {}x{}: {} galaxies, {} cryptoids",
            config.canvas_width,
            config.canvas_height,
            galaxies.len(),
            catalog.total_cryptoids()
        );
        state.set_galaxies(galaxies);
        state.set_total_cryptoids(catalog.total_cryptoids());
        draw_galaxies(&state, &mut layers.background);

        let controller = CraftController::spawn(
            canvas / 2.0,
            config.craft,
            assets.as_ref(),
            ticker,
            &mut state,
            &mut layers.craft,
        )?;

        let mut session = Self {
            config,
            assets,
            rng,
            state,
            layers,
            controller,
            hover: HoverTracker::new(),
            system: None,
            transitions: Vec::new(),
        };
        session.process_events();
        Ok(session)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn controller(&self) -> &CraftController<T> {
        &self.controller
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Orbital layout of the galaxy being shown, if any.
    pub fn system(&self) -> Option<&SystemLayout> {
        self.system.as_ref()
    }

    /// Forward a key event to the craft. `I` toggles the inventory flag.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if event.key == KeyCode::KeyI && event.state == ElementState::Pressed {
            let show = !self.state.show_inventory();
            self.state.set_show_inventory(show);
        }
        self.controller.handle_key(event, &mut self.layers.craft);
        self.process_events();
    }

    /// Pointer moved over the interaction layer.
    pub fn pointer_moved(&mut self, point: Vec2) {
        let overlay = &mut self.layers.interaction;
        if self.state.current_galaxy_id().is_some() {
            self.hover.pointer_moved(point, self.state.cryptoids(), overlay);
        } else {
            self.hover.pointer_moved(point, self.state.galaxies(), overlay);
        }
    }

    /// Present one frame. Returns true if the craft loop ticked.
    pub fn frame(&mut self) -> bool {
        let ticked = self.controller.frame(&mut self.state, &mut self.layers.craft);
        self.process_events();
        ticked
    }

    /// View events seen since the last call, in order.
    pub fn drain_transitions(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.transitions)
    }

    fn process_events(&mut self) {
        loop {
            let events = self.state.drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                if let ViewEvent::CurrentGalaxyChanged { previous, current } = event {
                    if previous != current {
                        match current {
                            Some(id) => self.show_system(id),
                            None => self.show_cryptoverse(),
                        }
                    }
                }
                self.transitions.push(event);
            }
        }
    }

    fn show_system(&mut self, id: GalaxyId) {
        let Some(galaxy) = self.state.galaxy(id) else {
            log::error!("Current galaxy {:?} does not exist", id);
            return;
        };
        let orbits = OrbitalLayout::from(self.config.orbits);
        let system = StarSystem::generate(
            galaxy,
            self.config.canvas_size(),
            &orbits,
            &self.config.cryptoid,
            self.assets.as_ref(),
            &mut self.rng,
        );
        self.hover.reset(&mut self.layers.interaction);
        self.state.set_current_cryptoid(None);
        self.state.set_cryptoids(system.cryptoids);
        self.layers.background.clear();
        draw_system(&system.layout, self.state.cryptoids(), &mut self.layers.background);
        self.system = Some(system.layout);
    }

    fn show_cryptoverse(&mut self) {
        self.hover.reset(&mut self.layers.interaction);
        self.state.set_current_cryptoid(None);
        self.state.set_cryptoids(Vec::new());
        self.system = None;
        draw_galaxies(&self.state, &mut self.layers.background);
    }
}

fn draw_galaxies(state: &ViewState, surface: &mut dyn Surface) {
    surface.clear();
    for galaxy in state.galaxies() {
        galaxy.draw(surface);
    }
}
