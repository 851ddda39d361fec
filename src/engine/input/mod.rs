// Input handling system
//
// Tracks which keys are held and for how many ticks, and maps them to demo
// actions through a fixed binding table.
//
// ## Architecture
//
// - `action`: Demo actions and default key bindings
// - `config`: Key binding lookup
// - `manager`: Held-key tracking and activation threshold
//
// ## Usage Example
//
// ```rust
// use engine::input::InputManager;
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per fixed update
// input.tick();
// let active = input.active_inputs();
// ```

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::{Action, ActiveInput};
pub use manager::InputManager;
