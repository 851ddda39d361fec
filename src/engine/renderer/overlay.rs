// Debug text overlay drawn with egui on top of the scene

use egui::{Align2, Color32, FontId, Id, LayerId, Order, Pos2, Rect, ViewportId};
use glam::Vec2;

/// Font size of the overlay line, in logical pixels
const FONT_SIZE: f32 = 8.0;

/// Everything one overlay frame needs on the GPU side
pub struct OverlayFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    screen: egui_wgpu::ScreenDescriptor,
}

/// Egui points per surface pixel so that one point is one logical pixel of
/// the fixed screen
pub fn pixels_per_point(surface: [u32; 2], logical: [u32; 2]) -> f32 {
    let x = surface[0] as f32 / logical[0].max(1) as f32;
    let y = surface[1] as f32 / logical[1].max(1) as f32;
    x.min(y).max(f32::EPSILON)
}

/// Frame input for egui: no events, just the screen size
pub fn raw_input(surface: [u32; 2], pixels_per_point: f32) -> egui::RawInput {
    let mut raw = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(
            Pos2::ZERO,
            egui::vec2(
                surface[0] as f32 / pixels_per_point,
                surface[1] as f32 / pixels_per_point,
            ),
        )),
        ..Default::default()
    };
    raw.viewports
        .entry(ViewportId::ROOT)
        .or_default()
        .native_pixels_per_point = Some(pixels_per_point);
    raw
}

/// Paint `text` with its top-left corner at `position`
pub fn draw_text(ctx: &egui::Context, position: Vec2, text: &str) {
    ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("debug_overlay")))
        .text(
            Pos2::new(position.x, position.y),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(FONT_SIZE),
            Color32::WHITE,
        );
}

/// Renders one line of debug text per frame at a fixed screen position
pub struct TextOverlay {
    context: egui::Context,
    renderer: egui_wgpu::Renderer,
    position: Vec2,
    logical: [u32; 2],
}

impl TextOverlay {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        logical: [u32; 2],
        position: Vec2,
    ) -> Self {
        Self {
            context: egui::Context::default(),
            renderer: egui_wgpu::Renderer::new(device, format, None, 1),
            position,
            logical,
        }
    }

    /// Lay out the text for a surface of `surface` pixels
    pub fn prepare(&self, text: &str, surface: [u32; 2]) -> OverlayFrame {
        let pixels_per_point = pixels_per_point(surface, self.logical);
        let output = self
            .context
            .run(raw_input(surface, pixels_per_point), |ctx| {
                draw_text(ctx, self.position, text)
            });

        let primitives = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);

        OverlayFrame {
            primitives,
            textures_delta: output.textures_delta,
            screen: egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface,
                pixels_per_point: output.pixels_per_point,
            },
        }
    }

    /// Upload font textures and vertex data. Returns the command buffers
    /// egui wants submitted before the frame's own encoder.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        frame: &OverlayFrame,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.primitives, &frame.screen)
    }

    pub fn paint<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, frame: &'a OverlayFrame) {
        self.renderer
            .render(render_pass, &frame.primitives, &frame.screen);
    }

    /// Free textures egui no longer needs
    pub fn cleanup(&mut self, frame: &OverlayFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn painted_text(output: &egui::FullOutput) -> Vec<(Pos2, String)> {
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some((text.pos, text.galley.text().to_string())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_pixels_per_point_matches_window_scale() {
        assert_relative_eq!(pixels_per_point([640, 480], [320, 240]), 2.0);
        assert_relative_eq!(pixels_per_point([320, 240], [320, 240]), 1.0);
        // Non-uniform stretch keeps the whole logical screen visible
        assert_relative_eq!(pixels_per_point([1280, 480], [320, 240]), 2.0);
    }

    #[test]
    fn test_raw_input_covers_logical_screen() {
        let raw = raw_input([640, 480], 2.0);
        let rect = raw.screen_rect.unwrap();
        assert_relative_eq!(rect.width(), 320.0);
        assert_relative_eq!(rect.height(), 240.0);
        assert_eq!(
            raw.viewports[&ViewportId::ROOT].native_pixels_per_point,
            Some(2.0)
        );
    }

    #[test]
    fn test_text_is_painted_at_position() {
        let ctx = egui::Context::default();
        let output = ctx.run(raw_input([640, 480], 2.0), |ctx| {
            draw_text(ctx, Vec2::new(10.0, 20.0), "0 : 32 : 8 : 10 : -1, 1")
        });

        let painted = painted_text(&output);
        assert_eq!(painted.len(), 1);
        assert_eq!(painted[0].0, Pos2::new(10.0, 20.0));
        assert_eq!(painted[0].1, "0 : 32 : 8 : 10 : -1, 1");
    }
}
