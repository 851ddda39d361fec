// Animation selection from held input
//
// Pure functions: each tick takes the previous `AnimationState` and returns
// the next one.

use super::animation::AnimationKind;
use super::state::AnimationState;
use crate::engine::input::{Action, ActiveInput};
use log::debug;

/// Animation an action plays, if any
pub fn animation_for(action: Action) -> Option<AnimationKind> {
    match action {
        Action::MoveRight | Action::MoveLeft | Action::MoveUp | Action::MoveDown => {
            Some(AnimationKind::Running)
        }
        Action::Jump => Some(AnimationKind::Jump),
        Action::Attack1 => Some(AnimationKind::Attack1),
        Action::Attack2 => Some(AnimationKind::Attack2),
        Action::Attack3 => Some(AnimationKind::Attack3),
        Action::Idle => Some(AnimationKind::Idle),
        Action::Die => Some(AnimationKind::Die),
        Action::OriginUp | Action::OriginDown | Action::CommitOrigin | Action::EnterEdit => None,
    }
}

/// Whether the sprite must be mirrored to move along `direction`. The
/// adventurer artwork faces right.
pub fn flip_for(direction: i32) -> bool {
    direction < 0
}

/// Apply one tick of active input to the animation state.
///
/// The highest-priority animation among the active keys wins. Movement is
/// applied independently of that choice; when opposite directions are both
/// held the longer hold wins, ties going to right/down. Authoring controls
/// run last, once per tick each, in press order.
pub fn select(state: AnimationState, inputs: &[ActiveInput]) -> AnimationState {
    let mut next = state;

    let winner = inputs
        .iter()
        .filter_map(|input| animation_for(input.action))
        .max_by_key(|kind| kind.priority());
    if let Some(kind) = winner {
        if next.active != kind {
            debug!("animation {} -> {}", next.active.name(), kind.name());
        }
        next.apply(kind);
    }

    let held = |action: Action| {
        inputs
            .iter()
            .find(|input| input.action == action)
            .map(|input| input.held_ticks)
    };

    match (held(Action::MoveRight), held(Action::MoveLeft)) {
        (Some(right), Some(left)) if left > right => move_horizontal(&mut next, -1, left),
        (Some(right), _) => move_horizontal(&mut next, 1, right),
        (None, Some(left)) => move_horizontal(&mut next, -1, left),
        (None, None) => {}
    }

    match (held(Action::MoveDown), held(Action::MoveUp)) {
        (Some(down), Some(up)) if up > down => move_vertical(&mut next, -1, up),
        (Some(down), _) => move_vertical(&mut next, 1, down),
        (None, Some(up)) => move_vertical(&mut next, -1, up),
        (None, None) => {}
    }

    for input in inputs {
        match input.action {
            Action::OriginUp => next.origin.y -= 1,
            Action::OriginDown => next.origin.y += 1,
            Action::CommitOrigin => {
                next.library.commit_origin_y(next.active, next.origin.y);
                debug!(
                    "committed origin y {} to {}",
                    next.origin.y,
                    next.active.name()
                );
            }
            Action::EnterEdit => {
                if !next.edit_mode {
                    debug!("edit mode on");
                }
                next.edit_mode = true;
            }
            _ => {}
        }
    }

    next
}

fn move_horizontal(state: &mut AnimationState, direction: i32, ticks: u32) {
    state.x_direction = direction;
    state.x_movement = ticks;
    state.flip = flip_for(direction);
}

fn move_vertical(state: &mut AnimationState, direction: i32, ticks: u32) {
    state.y_direction = direction;
    state.y_movement = ticks;
}

/// Return to idle once the current animation has looped back to its first
/// frame. Suspended while in edit mode. Only the animation parameters are
/// reset; position and facing are kept.
pub fn settle(state: AnimationState, frame_index: u32) -> AnimationState {
    if state.edit_mode || frame_index != 0 {
        return state;
    }

    let mut next = state;
    if next.active != AnimationKind::Idle {
        debug!("animation {} -> idle (loop restart)", next.active.name());
    }
    next.apply(AnimationKind::Idle);
    next
}
