// Character animation demo
//
// - `animation`: sprite-sheet animation configs
// - `state`: per-tick animation state value
// - `selector`: input -> next animation state
// - `frame`: animation state -> draw command

pub mod animation;
pub mod frame;
pub mod selector;
pub mod state;

use crate::engine::input::ActiveInput;
use crate::engine::renderer::DrawCommand;
use animation::AnimationLibrary;
use state::AnimationState;

/// Output of one update: what to draw this tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Visible frame within the current animation
    pub index: u32,
    pub draw: DrawCommand,
    /// Debug overlay line
    pub overlay: String,
}

/// Owns the tick counter and the animation state between ticks
#[derive(Debug, Default)]
pub struct Game {
    tick: u64,
    state: AnimationState,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one fixed update: select the animation from input, pick the
    /// frame to draw, then return to idle if the animation looped
    pub fn update(&mut self, inputs: &[ActiveInput]) -> Frame {
        self.tick += 1;

        let selected = selector::select(self.state, inputs);
        let frame = render_frame(self.tick, &selected);
        self.state = selector::settle(selected, frame.index);
        frame
    }

    /// What to draw before the next update runs
    pub fn current_frame(&self) -> Frame {
        render_frame(self.tick, &self.state)
    }

    /// Number of updates run so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.state.library
    }
}

fn render_frame(tick: u64, state: &AnimationState) -> Frame {
    let (index, draw) = frame::draw_command(tick, state);
    Frame {
        index,
        draw,
        overlay: state.overlay_text(),
    }
}
