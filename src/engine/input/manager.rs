// Input manager - tracks held keys and how long they have been held

use super::action::ActiveInput;
use super::config::KeyBindings;
use crate::config::ACTIVATION_THRESHOLD;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A key that is currently down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    key: KeyCode,
    /// Ticks since the press, counting the first tick as 1
    ticks: u32,
}

/// Collects winit keyboard events between ticks and reports which actions
/// have been held long enough to count
pub struct InputManager {
    bindings: KeyBindings,

    /// Held keys in press order
    held: Vec<HeldKey>,

    /// Minimum hold, in ticks, before a key is reported (exclusive)
    threshold: u32,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::default(),
            held: Vec::new(),
            threshold: ACTIVATION_THRESHOLD,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed => {
                    // OS key repeat must not restart the hold timer
                    if !event.repeat {
                        self.press_key(key_code);
                    }
                }
                ElementState::Released => self.release_key(key_code),
            }
        }
    }

    /// Register a key press
    pub(crate) fn press_key(&mut self, key: KeyCode) {
        if !self.is_held(key) {
            self.held.push(HeldKey { key, ticks: 0 });
        }
    }

    /// Register a key release
    pub(crate) fn release_key(&mut self, key: KeyCode) {
        self.held.retain(|held| held.key != key);
    }

    /// Advance hold timers by one tick. Call once per update, before
    /// reading `active_inputs`.
    pub fn tick(&mut self) {
        for held in &mut self.held {
            held.ticks = held.ticks.saturating_add(1);
        }
    }

    /// Bound actions whose keys have been held longer than the threshold,
    /// in press order. Unbound keys are skipped.
    pub fn active_inputs(&self) -> Vec<ActiveInput> {
        self.held
            .iter()
            .filter(|held| held.ticks > self.threshold)
            .filter_map(|held| {
                self.bindings
                    .get_action(held.key)
                    .map(|action| ActiveInput::new(action, held.ticks))
            })
            .collect()
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.held.iter().any(|held| held.key == key)
    }

    /// Drop every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Action;

    fn hold(manager: &mut InputManager, ticks: u32) {
        for _ in 0..ticks {
            manager.tick();
        }
    }

    fn held_ticks(manager: &InputManager, key: KeyCode) -> u32 {
        manager
            .held
            .iter()
            .find(|held| held.key == key)
            .map(|held| held.ticks)
            .unwrap_or(0)
    }

    #[test]
    fn test_key_counts_ticks_while_held() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyA);
        assert_eq!(held_ticks(&manager, KeyCode::KeyA), 0);

        hold(&mut manager, 3);
        assert_eq!(held_ticks(&manager, KeyCode::KeyA), 3);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyA);

        hold(&mut manager, 5);
        assert!(manager.active_inputs().is_empty());

        manager.tick();
        assert_eq!(
            manager.active_inputs(),
            vec![ActiveInput::new(Action::MoveLeft, 6)]
        );
    }

    #[test]
    fn test_repeat_press_keeps_timer() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyD);
        hold(&mut manager, 4);
        manager.press_key(KeyCode::KeyD);

        assert_eq!(held_ticks(&manager, KeyCode::KeyD), 4);
    }

    #[test]
    fn test_release_resets() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyD);
        hold(&mut manager, 10);
        manager.release_key(KeyCode::KeyD);

        assert!(!manager.is_held(KeyCode::KeyD));
        assert_eq!(held_ticks(&manager, KeyCode::KeyD), 0);
        assert!(manager.active_inputs().is_empty());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyQ);
        hold(&mut manager, 20);

        assert!(manager.is_held(KeyCode::KeyQ));
        assert!(manager.active_inputs().is_empty());
    }

    #[test]
    fn test_active_inputs_in_press_order() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyF);
        manager.tick();
        manager.press_key(KeyCode::KeyD);
        hold(&mut manager, 6);

        let actions: Vec<Action> = manager
            .active_inputs()
            .iter()
            .map(|input| input.action)
            .collect();
        assert_eq!(actions, vec![Action::Attack1, Action::MoveRight]);
    }

    #[test]
    fn test_release_all() {
        let mut manager = InputManager::new();
        manager.press_key(KeyCode::KeyA);
        manager.press_key(KeyCode::KeyW);
        manager.release_all();

        assert!(!manager.is_held(KeyCode::KeyA));
        assert!(!manager.is_held(KeyCode::KeyW));
    }
}
