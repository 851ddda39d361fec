use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    error::EventLoopError,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::DemoConfig;
use engine::assets::SpriteSheet;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::Renderer;
use game::frame::missing_frames;
use game::Game;

fn main() -> Result<()> {
    // Initialize logger (RUST_LOG overrides the default level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting sprite animator...");

    let config = DemoConfig::default();

    // The demo is useless without its sprite sheet, so fail fast
    let sheet = SpriteSheet::load(config.sprite_sheet_path).map_err(|e| {
        error!("Failed to load sprite sheet: {}", e);
        e
    })?;

    let event_loop = EventLoop::new()?;
    let (window_width, window_height) = config.window_size();
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(window_width, window_height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        &sheet,
        config.logical_width,
        config.logical_height,
    ))?;

    let mut input = InputManager::new();
    let mut game = Game::new();
    let mut game_loop = GameLoop::new();
    let mut latest = game.current_frame();

    for (kind, index) in missing_frames(&sheet, game.library()) {
        warn!("Frame {} of {} lies outside the sprite sheet", index, kind.name());
    }

    // Set by the event loop when rendering fails, returned once it stops
    let mut fatal: Option<anyhow::Error> = None;
    let fatal_slot = &mut fatal;

    let loop_result = event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                info!(
                    "Close requested after {} ticks ({} frames), shutting down...",
                    game.tick(),
                    game_loop.frame_count()
                );
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
            WindowEvent::Focused(false) => input.release_all(),
            WindowEvent::KeyboardInput { event, .. } => input.process_keyboard_event(&event),
            WindowEvent::RedrawRequested => {
                for _ in 0..game_loop.begin_frame() {
                    input.tick();
                    latest = game.update(&input.active_inputs());
                }

                if let Err(e) = renderer.render(&latest.draw, &latest.overlay) {
                    error!("Render failed: {:#}", e);
                    *fatal_slot = Some(e);
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            // Request redraw on next frame
            window.request_redraw();
        }
        _ => {}
    });

    run_outcome(loop_result, fatal)
}

/// Exit result once the event loop has stopped: a loop failure first, then
/// whatever error made the loop exit
fn run_outcome(
    loop_result: Result<(), EventLoopError>,
    fatal: Option<anyhow::Error>,
) -> Result<()> {
    loop_result.map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;
    fatal.map_or(Ok(()), Err)
}
