/// Fixed-tick scheduler
///
/// Converts wall-clock frame time into a whole number of fixed updates so the
/// animation advances at the same tick rate regardless of display refresh.
use std::time::{Duration, Instant};

/// Updates per second
const TICKS_PER_SECOND: u32 = 60;
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// Maximum number of catch-up ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed-tick timing state
pub struct GameLoop {
    /// Time not yet consumed by whole ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frames rendered
    frame_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_count: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.advance(frame_time)
    }

    /// Feed elapsed time and get back how many ticks it pays for
    fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop backlog we refused to simulate instead of carrying it forward
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::debug!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
