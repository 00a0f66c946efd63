//! Craft controller: turns key events and presented frames into craft motion
//! and view transitions.
//!
//! Each tick runs, in order: kinematic update, containment evaluation, redraw.
//! The loop only ticks while the [`Ticker`] is running; it is started by the
//! first thrust from idle and stopped whenever the craft comes to rest.

use engine_core::{Ticker, Vec2};
use input::{CraftAction, InputState, KeyEvent};
use renderer::{AssetError, Sprite, Surface};

use crate::assets::{AssetSource, CRAFT_LARGE, CRAFT_SMALL};
use crate::config::CraftTuning;
use crate::craft::{Craft, CraftMode};
use crate::region::{last_containing, Region};
use crate::state::{CryptoidId, GalaxyId, ViewState};

pub struct CraftController<T: Ticker> {
    craft: Craft,
    tuning: CraftTuning,
    small: Sprite,
    large: Sprite,
    input: InputState,
    ticker: T,
}

impl<T: Ticker> CraftController<T> {
    /// Load both craft sprites, place an idle craft at `position`, draw it and
    /// publish it to the view state.
    pub fn spawn(
        position: Vec2,
        tuning: CraftTuning,
        assets: &dyn AssetSource,
        ticker: T,
        state: &mut ViewState,
        layer: &mut dyn Surface,
    ) -> Result<Self, AssetError> {
        let small = assets.load(CRAFT_SMALL)?;
        let large = assets.load(CRAFT_LARGE)?;
        let mut craft = Craft::new(position);
        craft.size = small.size();

        let controller = Self {
            craft,
            tuning,
            small,
            large,
            input: InputState::new(),
            ticker,
        };
        controller.draw(layer);
        state.set_rocket(Some(controller.craft));
        Ok(controller)
    }

    pub fn craft(&self) -> &Craft {
        &self.craft
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Update the pressed-key set, then apply every held binding once.
    pub fn handle_key(&mut self, event: KeyEvent, layer: &mut dyn Surface) {
        self.input.process_event(event);
        for action in self.input.held_actions() {
            match action {
                CraftAction::TurnLeft => self.turn(-self.tuning.steering, layer),
                CraftAction::TurnRight => self.turn(self.tuning.steering, layer),
                CraftAction::Thrust => {
                    if self.craft.is_idle() {
                        self.launch();
                    } else {
                        self.craft.boost(&self.tuning);
                    }
                }
                CraftAction::Decelerate => {
                    self.craft.unboost(&self.tuning);
                    if self.craft.is_idle() {
                        self.stop();
                    }
                }
            }
        }
    }

    /// Record a presented frame. Returns true if the frame ticked.
    pub fn frame(&mut self, state: &mut ViewState, layer: &mut dyn Surface) -> bool {
        if !self.ticker.frame() {
            return false;
        }
        self.craft.advance();
        self.evaluate_containment(state, layer.size());
        self.draw(layer);
        true
    }

    /// Boost from rest and start the loop. The first step lands on the next frame.
    pub fn launch(&mut self) {
        self.craft.boost(&self.tuning);
        if self.craft.is_idle() {
            log::warn!("Craft cannot launch: max speed {} rounds to zero", self.tuning.max_speed);
            return;
        }
        self.ticker.start();
        log::debug!(
            "Craft launched at ({:.1}, {:.1}) heading {}",
            self.craft.position.x,
            self.craft.position.y,
            self.craft.heading()
        );
    }

    /// Halt the craft and cancel the pending tick.
    pub fn stop(&mut self) {
        self.craft.halt();
        self.ticker.stop();
    }

    /// Clear the craft layer and draw the active sprite centered and rotated.
    pub fn draw(&self, layer: &mut dyn Surface) {
        layer.clear();
        let sprite = self.active_sprite();
        layer.draw_sprite(
            sprite,
            self.craft.position - self.craft.size / 2.0,
            self.craft.size,
            self.craft.heading(),
        );
    }

    fn active_sprite(&self) -> &Sprite {
        match self.craft.mode {
            CraftMode::InCryptoverse => &self.small,
            CraftMode::InGalaxy => &self.large,
        }
    }

    fn turn(&mut self, degrees: f32, layer: &mut dyn Surface) {
        self.craft.turn(degrees);
        if self.craft.is_idle() {
            // no loop to pick this up
            self.craft.advance();
            self.draw(layer);
        }
    }

    fn evaluate_containment(&mut self, state: &mut ViewState, bounds: Vec2) {
        debug_assert_eq!(
            self.craft.mode == CraftMode::InGalaxy,
            state.current_galaxy_id().is_some(),
            "craft mode out of sync with current galaxy"
        );
        match self.craft.mode {
            CraftMode::InCryptoverse => {
                match last_containing(state.galaxies(), self.craft.position) {
                    Some(i) if !self.craft.leaving_galaxy => self.enter_galaxy(GalaxyId(i), state, bounds),
                    Some(_) => {}
                    None => self.craft.leaving_galaxy = false,
                }
                if self.craft.mode == CraftMode::InCryptoverse {
                    self.craft.wrap(bounds);
                }
            }
            CraftMode::InGalaxy => {
                if self.craft.is_out_of_bounds(bounds) {
                    self.leave_galaxy(state);
                    return;
                }
                match last_containing(state.cryptoids(), self.craft.position) {
                    Some(i) if !self.craft.leaving_cryptoid => self.enter_cryptoid(CryptoidId(i), state),
                    Some(_) => {}
                    None => self.leave_cryptoid(),
                }
            }
        }
    }

    fn enter_galaxy(&mut self, id: GalaxyId, state: &mut ViewState, bounds: Vec2) {
        self.stop();
        state.set_current_galaxy(Some(id));
        self.craft.mode = CraftMode::InGalaxy;
        self.craft.leaving_cryptoid = false;
        self.craft.size = self.large.size();
        let edge = self.craft.arrive_from_edge(bounds);
        if let Some(galaxy) = state.galaxy(id) {
            log::info!("Entered galaxy {} from the {:?} edge", galaxy.name(), edge);
        }
        state.set_rocket(Some(self.craft));
    }

    fn leave_galaxy(&mut self, state: &mut ViewState) {
        self.craft.leaving_galaxy = true;
        self.stop();
        let left = state.current_galaxy_id();
        state.set_current_galaxy(None);
        self.craft.mode = CraftMode::InCryptoverse;
        self.craft.leaving_cryptoid = false;
        self.craft.size = self.small.size();
        if let Some(galaxy) = left.and_then(|id| state.galaxy(id)) {
            self.craft.position = galaxy.center();
            log::info!("Left galaxy {}", galaxy.name());
        }
        state.set_rocket(Some(self.craft));
    }

    fn enter_cryptoid(&mut self, id: CryptoidId, state: &mut ViewState) {
        self.stop();
        state.set_current_cryptoid(Some(id));
        self.craft.leaving_cryptoid = true;
        if let Some(cryptoid) = state.cryptoid(id) {
            log::info!("Reached cryptoid {} ({})", cryptoid.name(), cryptoid.symbol());
        }
        state.set_rocket(Some(self.craft));
    }

    fn leave_cryptoid(&mut self) {
        self.craft.leaving_cryptoid = false;
    }
}
