//! Input handling for the craft: key state, bindings, and replayable scripts.

pub mod script;

pub use script::*;

use std::collections::HashSet;

/// A discrete key-state change, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub state: ElementState,
}

impl KeyEvent {
    pub fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
        }
    }

    pub fn released(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Released,
        }
    }
}

/// Craft control bound to a pair of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CraftAction {
    /// Arrow left / A: turn by negative steering.
    TurnLeft,
    /// Arrow right / D: turn by positive steering.
    TurnRight,
    /// Arrow up / W: launch or boost.
    Thrust,
    /// Arrow down / S: unboost, stopping at zero.
    Decelerate,
}

impl CraftAction {
    /// All actions, in the order they are applied after a key event.
    pub const ALL: [CraftAction; 4] = [
        CraftAction::TurnLeft,
        CraftAction::TurnRight,
        CraftAction::Thrust,
        CraftAction::Decelerate,
    ];

    pub fn keys(&self) -> [KeyCode; 2] {
        match self {
            CraftAction::TurnLeft => [KeyCode::ArrowLeft, KeyCode::KeyA],
            CraftAction::TurnRight => [KeyCode::ArrowRight, KeyCode::KeyD],
            CraftAction::Thrust => [KeyCode::ArrowUp, KeyCode::KeyW],
            CraftAction::Decelerate => [KeyCode::ArrowDown, KeyCode::KeyS],
        }
    }

    /// Action bound to `key`, if any.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.keys().contains(&key))
    }
}

/// Tracks which keys are held.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        log::trace!("Key {:?} {:?}", key, state);
        match state {
            ElementState::Pressed => {
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process a key event.
    pub fn process_event(&mut self, event: KeyEvent) {
        self.process_keyboard(event.key, event.state);
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Whether either key bound to `action` is held.
    pub fn is_action_held(&self, action: CraftAction) -> bool {
        action.keys().iter().any(|key| self.is_key_held(*key))
    }

    /// Held actions in application order.
    pub fn held_actions(&self) -> Vec<CraftAction> {
        CraftAction::ALL
            .into_iter()
            .filter(|action| self.is_action_held(*action))
            .collect()
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
