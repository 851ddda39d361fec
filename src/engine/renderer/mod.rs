// Rendering system using wgpu

mod camera;
mod overlay;
mod sprite;
mod texture;
mod vertex;

pub use camera::{Camera, CameraUniform};
pub use overlay::TextOverlay;
pub use sprite::{DrawCommand, SpriteRenderer};
pub use texture::Texture;
pub use vertex::Vertex;

use crate::engine::assets::SpriteSheet;
use anyhow::Result;
use glam::Vec2;
use log::{info, warn};
use std::sync::Arc;
use winit::window::Window;

/// Where the debug overlay line starts, in logical pixels
const OVERLAY_POSITION: Vec2 = Vec2::new(10.0, 20.0);

/// Main renderer responsible for initializing wgpu and drawing each frame
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    camera: Camera,
    sprite_renderer: SpriteRenderer,
    overlay: TextOverlay,
}

impl Renderer {
    /// Create a renderer for the window and upload the sprite sheet
    pub async fn new(
        window: Arc<Window>,
        sheet: &SpriteSheet,
        logical_width: u32,
        logical_height: u32,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let camera = Camera::new(logical_width, logical_height);
        let sheet_texture = Texture::from_image(&device, &queue, sheet.image(), Some("Sprite Sheet"))?;
        let sprite_renderer = SpriteRenderer::new(&device, surface_format, &camera, &sheet_texture)?;
        let overlay = TextOverlay::new(
            &device,
            surface_format,
            [logical_width, logical_height],
            OVERLAY_POSITION,
        );

        info!(
            "Renderer initialized: {}x{} surface, {}x{} logical",
            size.width, size.height, logical_width, logical_height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera,
            sprite_renderer,
            overlay,
        })
    }

    /// Resize the surface. The logical screen is stretched to fit.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let (logical_width, logical_height) =
                self.camera.layout(new_size.width, new_size.height);
            info!(
                "Renderer resized to {}x{} (logical {}x{})",
                new_size.width, new_size.height, logical_width, logical_height
            );
        }
    }

    /// Render one frame: the sprite, then the debug overlay on top
    pub fn render(&mut self, command: &DrawCommand, overlay_text: &str) -> Result<()> {
        self.sprite_renderer.prepare(&self.queue, command);
        let overlay_frame = self
            .overlay
            .prepare(overlay_text, [self.config.width, self.config.height]);

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Skip this frame and try again with a fresh surface
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Surface timed out, dropping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer.render(&mut render_pass);
        }

        let overlay_commands =
            self.overlay
                .upload(&self.device, &self.queue, &mut encoder, &overlay_frame);

        {
            let mut overlay_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.overlay.paint(&mut overlay_pass, &overlay_frame);
        }

        self.overlay.cleanup(&overlay_frame);

        self.queue.submit(
            overlay_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        Ok(())
    }
}
