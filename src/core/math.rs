// Frame arithmetic helpers

/// Index of the frame visible at `tick` for an animation that holds each
/// frame for `frame_rate` ticks and has `frame_count` frames.
///
/// Always lands in `[0, frame_count)`. A zero rate or count is treated as 1
/// so a malformed config can never divide by zero.
pub fn frame_index(tick: u64, frame_rate: u32, frame_count: u32) -> u32 {
    let rate = u64::from(frame_rate.max(1));
    let count = u64::from(frame_count.max(1));
    ((tick / rate) % count) as u32
}

/// Signed offset of `magnitude` along `direction` (-1 or +1)
pub fn signed_offset(magnitude: u32, direction: i32) -> f32 {
    magnitude as f32 * direction.signum() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_first_tick() {
        assert_eq!(frame_index(0, 10, 8), 0);
    }

    #[test]
    fn test_frame_index_mid_animation() {
        assert_eq!(frame_index(25, 10, 8), 2);
    }

    #[test]
    fn test_frame_index_wraps() {
        // 8 frames * 10 ticks = 80 ticks per cycle
        assert_eq!(frame_index(80, 10, 8), 0);
        assert_eq!(frame_index(95, 10, 8), 1);
    }

    #[test]
    fn test_frame_index_always_in_range() {
        for rate in 1..=20 {
            for count in 1..=9 {
                for tick in 0..500 {
                    let index = frame_index(tick, rate, count);
                    assert!(index < count);
                    assert_eq!(index as u64, (tick / rate as u64) % count as u64);
                }
            }
        }
    }

    #[test]
    fn test_frame_index_zero_guards() {
        assert_eq!(frame_index(7, 0, 8), 7);
        assert_eq!(frame_index(7, 10, 0), 0);
    }

    #[test]
    fn test_signed_offset() {
        assert_eq!(signed_offset(6, -1), -6.0);
        assert_eq!(signed_offset(6, 1), 6.0);
        assert_eq!(signed_offset(0, -1), 0.0);
    }
}
