// Key binding lookup

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to demo actions
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// Build a table from (key, action) pairs. A key listed twice keeps its
    /// last action.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
