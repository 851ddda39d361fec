// Fixed logical-resolution camera

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Projects a fixed logical screen (origin top-left, y down) onto the
/// whole surface, whatever size the window is
#[derive(Debug, Clone)]
pub struct Camera {
    /// Logical width in pixels
    logical_width: u32,
    /// Logical height in pixels
    logical_height: u32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    pub fn new(logical_width: u32, logical_height: u32) -> Self {
        let view_proj = Mat4::orthographic_rh(
            0.0,
            logical_width as f32,
            logical_height as f32, // bottom
            0.0,                   // top
            -1.0,
            1.0,
        );
        Self {
            logical_width,
            logical_height,
            view_proj,
        }
    }

    /// Logical screen size for a host window of any size
    pub fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (self.logical_width, self.logical_height)
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Vec2, Vec3};

    fn to_clip(camera: &Camera, position: Vec2) -> Vec2 {
        camera
            .view_proj_matrix()
            .transform_point3(Vec3::new(position.x, position.y, 0.0))
            .truncate()
    }

    #[test]
    fn test_layout_ignores_window_size() {
        let camera = Camera::new(320, 240);
        assert_eq!(camera.layout(640, 480), (320, 240));
        assert_eq!(camera.layout(1920, 1017), (320, 240));
    }

    #[test]
    fn test_top_left_maps_to_clip_top_left() {
        let camera = Camera::new(320, 240);
        let clip = to_clip(&camera, Vec2::ZERO);
        assert_relative_eq!(clip.x, -1.0);
        assert_relative_eq!(clip.y, 1.0);
    }

    #[test]
    fn test_center_maps_to_clip_origin() {
        let camera = Camera::new(320, 240);
        let clip = to_clip(&camera, Vec2::new(160.0, 120.0));
        assert_relative_eq!(clip.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(clip.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_bottom_right() {
        let camera = Camera::new(320, 240);
        let clip = to_clip(&camera, Vec2::new(320.0, 240.0));
        assert_relative_eq!(clip.x, 1.0);
        assert_relative_eq!(clip.y, -1.0);
    }
}
