// Demo-wide constants

/// Logical screen width in pixels
pub const SCREEN_WIDTH: u32 = 320;
/// Logical screen height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Width of a single frame in the sprite sheet
pub const FRAME_WIDTH: u32 = 32;
/// Height of a single frame in the sprite sheet
pub const FRAME_HEIGHT: u32 = 32;

/// Keys must be held strictly longer than this many ticks to count
pub const ACTIVATION_THRESHOLD: u32 = 5;

/// Startup settings for the demo window and assets
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: &'static str,
    pub logical_width: u32,
    pub logical_height: u32,
    /// Window size multiplier applied to the logical resolution
    pub scale: u32,
    pub sprite_sheet_path: &'static str,
}

impl DemoConfig {
    /// Initial window size in logical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.logical_width * self.scale,
            self.logical_height * self.scale,
        )
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Animation (Rust Demo)",
            logical_width: SCREEN_WIDTH,
            logical_height: SCREEN_HEIGHT,
            scale: 2,
            sprite_sheet_path: "assets/adventurer_sprite_sheet.png",
        }
    }
}
