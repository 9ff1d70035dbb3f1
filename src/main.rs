//! Breakout entry point
//!
//! Opens the window, samples the keyboard and runs the frame loop:
//! input, physics, batch rebuild when blocks change, render.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use breakout::Settings;
use breakout::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use breakout::renderer::{DrawBatch, RenderState, scene};
use breakout::sim::{FrameInput, GameState, tick};

/// Game instance holding all state
struct Game {
    settings: Settings,
    state: GameState,
    batch: DrawBatch,
    input: FrameInput,
    last_frame: Option<Instant>,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Fatal error that ended the event loop
    error: Option<anyhow::Error>,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let state = GameState::from_settings(&settings);
        let batch = DrawBatch::from_drawables(&scene(&state));
        Self {
            settings,
            state,
            batch,
            input: FrameInput::default(),
            last_frame: None,
            window: None,
            render_state: None,
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(ARENA_WIDTH, ARENA_HEIGHT));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to get adapter")?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let mut render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.present_mode(),
        ))?;
        render_state.upload_batch(&self.batch);

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let pressed = event.state == ElementState::Pressed;
        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyA | KeyCode::ArrowLeft) => self.input.left = pressed,
            PhysicalKey::Code(KeyCode::KeyD | KeyCode::ArrowRight) => self.input.right = pressed,
            PhysicalKey::Code(KeyCode::Escape) if pressed => {
                log::info!("Escape pressed, exiting");
                event_loop.exit();
            }
            _ => {}
        }
    }

    /// Advance the simulation and draw one frame
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let outcome = tick(&mut self.state, &self.input, dt);

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let drawables = scene(&self.state);
        if outcome.blocks_changed {
            self.batch.rebuild(&drawables);
            render_state.upload_batch(&self.batch);
        }
        let calls = self.batch.draw_calls(&drawables);

        match render_state.render(&calls) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
            }
            Err(e) => {
                self.fail(event_loop, anyhow::Error::new(e).context("Render failed"));
            }
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout starting...");

    let settings = Settings::load();
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(settings);
    event_loop
        .run_app(&mut game)
        .context("Event loop terminated abnormally")?;

    match game.error.take() {
        Some(e) => Err(e),
        None => {
            log::info!(
                "Breakout exiting, {} blocks destroyed",
                game.state.blocks_destroyed
            );
            Ok(())
        }
    }
}
