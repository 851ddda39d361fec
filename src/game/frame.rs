// Frame selection and placement for the character sprite

use super::animation::{AnimationConfig, AnimationKind, AnimationLibrary};
use super::state::AnimationState;
use crate::config::{FRAME_HEIGHT, FRAME_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::math::{frame_index, signed_offset};
use crate::engine::assets::{FrameRect, SpriteSheet};
use crate::engine::renderer::DrawCommand;
use glam::{Affine2, Vec2};

/// Sheet region of frame `index` of an animation
pub fn source_rect(config: &AnimationConfig, index: u32) -> FrameRect {
    FrameRect::new(
        config.origin.x + (index * FRAME_WIDTH) as i32,
        config.origin.y,
        FRAME_WIDTH,
        FRAME_HEIGHT,
    )
}

/// Frames of the library that fall outside the sheet, as (animation, index)
pub fn missing_frames(sheet: &SpriteSheet, library: &AnimationLibrary) -> Vec<(AnimationKind, u32)> {
    AnimationKind::ALL
        .iter()
        .flat_map(|&kind| {
            let config = library.get(kind);
            (0..config.frame_count)
                .filter(move |&index| sheet.frame(source_rect(&config, index)).is_none())
                .map(move |index| (kind, index))
        })
        .collect()
}

/// Top-left screen position of the character: screen center shifted by the
/// signed movement on each axis
pub fn sprite_position(state: &AnimationState) -> Vec2 {
    let center = Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0);
    center
        + Vec2::new(
            signed_offset(state.x_movement, state.x_direction),
            signed_offset(state.y_movement, state.y_direction),
        )
}

/// Frame-local to screen transform, mirrored about the frame's vertical
/// center line when the state is flipped
pub fn sprite_transform(state: &AnimationState) -> Affine2 {
    let translate = Affine2::from_translation(sprite_position(state));
    if !state.flip {
        return translate;
    }

    let half = Vec2::new(FRAME_WIDTH as f32 / 2.0, 0.0);
    let mirror = Affine2::from_translation(half)
        * Affine2::from_scale(Vec2::new(-1.0, 1.0))
        * Affine2::from_translation(-half);
    translate * mirror
}

/// Frame to show at `tick` and the draw command for it
pub fn draw_command(tick: u64, state: &AnimationState) -> (u32, DrawCommand) {
    let index = frame_index(tick, state.frame_rate, state.frame_count);
    let command = DrawCommand {
        source: source_rect(&state.config(), index),
        transform: sprite_transform(state),
    };
    (index, command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::animation::{AnimationKind, DIE};
    use approx::assert_relative_eq;
    use glam::IVec2;
    use image::RgbaImage;

    #[test]
    fn test_first_tick_uses_origin() {
        let state = AnimationState::default();
        let (index, command) = draw_command(0, &state);

        assert_eq!(index, 0);
        assert_eq!(command.source, FrameRect::new(0, 0, 32, 32));
    }

    #[test]
    fn test_tick_25_is_third_frame() {
        let state = AnimationState::default();
        let (index, command) = draw_command(25, &state);

        assert_eq!(index, 2);
        assert_eq!(command.source.origin, IVec2::new(64, 0));
    }

    #[test]
    fn test_source_rect_uses_row_origin() {
        let rect = source_rect(&DIE, 6);
        assert_eq!(rect, FrameRect::new(192, 192, 32, 32));
    }

    #[test]
    fn test_full_sheet_has_every_frame() {
        // 8 columns, 7 rows of 32px frames
        let sheet = SpriteSheet::from_image(RgbaImage::new(256, 224));
        assert!(missing_frames(&sheet, &AnimationLibrary::adventurer()).is_empty());
    }

    #[test]
    fn test_short_sheet_reports_missing_rows() {
        // Only the idle and running rows
        let sheet = SpriteSheet::from_image(RgbaImage::new(256, 64));
        let missing = missing_frames(&sheet, &AnimationLibrary::adventurer());

        assert!(missing.contains(&(AnimationKind::Attack1, 0)));
        assert!(missing.contains(&(AnimationKind::Die, 6)));
        assert!(!missing.iter().any(|(kind, _)| *kind == AnimationKind::Idle));
        assert!(!missing.iter().any(|(kind, _)| *kind == AnimationKind::Running));
        // attack1..3 and jump (8+8+8+6) plus die (7)
        assert_eq!(missing.len(), 37);
    }

    #[test]
    fn test_committed_origin_above_sheet_is_missing() {
        let sheet = SpriteSheet::from_image(RgbaImage::new(256, 224));
        let mut library = AnimationLibrary::adventurer();
        library.commit_origin_y(AnimationKind::Idle, -1);

        let missing = missing_frames(&sheet, &library);
        assert_eq!(missing.len(), 8);
        assert!(missing.iter().all(|(kind, _)| *kind == AnimationKind::Idle));
    }

    #[test]
    fn test_unmoved_sprite_sits_at_screen_center() {
        let state = AnimationState::default();
        let corners = draw_command(0, &state).1.corners();

        assert_relative_eq!(corners[0].x, 160.0);
        assert_relative_eq!(corners[0].y, 120.0);
        assert_relative_eq!(corners[2].x, 192.0);
        assert_relative_eq!(corners[2].y, 152.0);
    }

    #[test]
    fn test_movement_offsets_position() {
        let mut state = AnimationState::default();
        state.x_direction = -1;
        state.x_movement = 6;
        state.y_direction = -1;
        state.y_movement = 10;

        let position = sprite_position(&state);
        assert_relative_eq!(position.x, 154.0);
        assert_relative_eq!(position.y, 110.0);
    }

    #[test]
    fn test_flip_mirrors_in_place() {
        let mut state = AnimationState::default();
        state.apply(AnimationKind::Running);
        state.flip = true;

        let corners = draw_command(0, &state).1.corners();
        // Frame-local left edge lands on the right side of the same box
        assert_relative_eq!(corners[0].x, 192.0);
        assert_relative_eq!(corners[1].x, 160.0);
        assert_relative_eq!(corners[0].y, 120.0);
        assert_relative_eq!(corners[3].y, 152.0);
    }
}
