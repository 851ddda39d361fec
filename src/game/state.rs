// Per-tick animation state of the character

use super::animation::{AnimationConfig, AnimationKind, AnimationLibrary};
use glam::IVec2;

/// Everything the renderer needs to draw the character, plus the authoring
/// flags. Plain value: the selector takes one and returns the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    /// Animation whose config was copied in last
    pub active: AnimationKind,
    pub origin: IVec2,
    pub frame_count: u32,
    pub frame_rate: u32,
    /// Mirror the frame horizontally when drawing
    pub flip: bool,
    /// Horizontal direction sign (+1 right, -1 left)
    pub x_direction: i32,
    /// Vertical direction sign (+1 down, -1 up)
    pub y_direction: i32,
    /// Horizontal offset magnitude (ticks the move key was held)
    pub x_movement: u32,
    /// Vertical offset magnitude (ticks the move key was held)
    pub y_movement: u32,
    /// Suspends the return-to-idle reset
    pub edit_mode: bool,
    pub library: AnimationLibrary,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(AnimationLibrary::default())
    }
}

impl AnimationState {
    /// Idle state using the given library
    pub fn new(library: AnimationLibrary) -> Self {
        let idle = library.get(AnimationKind::Idle);
        Self {
            active: AnimationKind::Idle,
            origin: idle.origin,
            frame_count: idle.frame_count,
            frame_rate: idle.frame_rate,
            flip: false,
            x_direction: 1,
            y_direction: 1,
            x_movement: 0,
            y_movement: 0,
            edit_mode: false,
            library,
        }
    }

    /// Currently playing animation parameters
    pub fn config(&self) -> AnimationConfig {
        AnimationConfig {
            origin: self.origin,
            frame_count: self.frame_count,
            frame_rate: self.frame_rate,
        }
    }

    /// Copy an animation's config from the library into the state
    pub fn apply(&mut self, kind: AnimationKind) {
        let config = self.library.get(kind);
        self.active = kind;
        self.origin = config.origin;
        self.frame_count = config.frame_count;
        self.frame_rate = config.frame_rate;
    }

    /// Debug overlay line: origin, frame count, rate and direction signs
    pub fn overlay_text(&self) -> String {
        format!(
            "{} : {} : {} : {} : {}, {}",
            self.origin.x,
            self.origin.y,
            self.frame_count,
            self.frame_rate,
            self.x_direction,
            self.y_direction
        )
    }
}
