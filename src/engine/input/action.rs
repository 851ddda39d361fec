// Demo action definitions and default key mappings

use winit::keyboard::KeyCode;

/// Represents everything a key can ask the character to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (also plays the running animation)
    MoveRight,
    MoveLeft,
    MoveUp,
    MoveDown,

    // Animations
    Jump,
    Attack1,
    Attack2,
    Attack3,
    Idle,
    Die,

    // Authoring controls
    OriginUp,
    OriginDown,
    CommitOrigin,
    EnterEdit,
}

/// An action whose key has been held past the activation threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveInput {
    pub action: Action,
    /// Ticks the key has been held, including the current one
    pub held_ticks: u32,
}

impl ActiveInput {
    pub fn new(action: Action, held_ticks: u32) -> Self {
        Self { action, held_ticks }
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD)
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyW, Action::MoveUp),
        (KeyCode::KeyS, Action::MoveDown),
        // Animations
        (KeyCode::Space, Action::Jump),
        (KeyCode::KeyF, Action::Attack1),
        (KeyCode::KeyG, Action::Attack2),
        (KeyCode::KeyH, Action::Attack3),
        (KeyCode::KeyE, Action::Idle),
        (KeyCode::KeyX, Action::Die),
        // Authoring
        (KeyCode::ArrowUp, Action::OriginUp),
        (KeyCode::ArrowDown, Action::OriginDown),
        (KeyCode::Enter, Action::CommitOrigin),
        (KeyCode::KeyZ, Action::EnterEdit),
    ]
}
