// Frame regions inside a sprite sheet

use glam::{IVec2, Vec2};

/// A rectangular region of the sprite sheet, in sheet pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    /// Top-left corner. Signed because authoring controls can push the
    /// origin above the sheet.
    pub origin: IVec2,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,
}

impl FrameRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            width,
            height,
        }
    }

    /// Bottom-right corner (exclusive)
    pub fn max(&self) -> IVec2 {
        self.origin + IVec2::new(self.width as i32, self.height as i32)
    }

    /// Check if the region lies entirely within a sheet of the given size
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        let max = self.max();
        self.origin.x >= 0
            && self.origin.y >= 0
            && max.x <= sheet_width as i32
            && max.y <= sheet_height as i32
    }

    /// UV coordinates (0.0 to 1.0) of the region's corners for a sheet of
    /// the given size, as (min, max)
    pub fn uv_bounds(&self, sheet_width: u32, sheet_height: u32) -> (Vec2, Vec2) {
        let size = Vec2::new(sheet_width.max(1) as f32, sheet_height.max(1) as f32);
        let uv_min = self.origin.as_vec2() / size;
        let uv_max = self.max().as_vec2() / size;
        (uv_min, uv_max)
    }
}
