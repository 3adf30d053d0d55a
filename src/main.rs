//! Jellytide - a deep-sea jellyfish drifting to real ocean measurements
//!
//! Wave height, direction, period and current speed from a marine record
//! drive the creature, the particulate and the glow around it.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use jellytide::cli::Args;
use jellytide::display::DisplaySystem;
use jellytide::frame::FrameSource;
use jellytide::params::RenderConfig;
use jellytide::playback::Playback;
use jellytide::recording;
use jellytide::scene::SceneRenderer;
use jellytide::wave::load_wave_csv;

const WINDOW_TITLE: &str = "Marine Creature Visualization";

/// Main application state
struct App {
    // Window and presentation
    window: Option<Arc<Window>>,
    display: Option<DisplaySystem>,

    // Scene
    frames: FrameSource,

    // Configuration
    render_config: RenderConfig,

    // Frame pacing
    next_frame_at: Instant,

    // First fatal error, reported after the event loop exits
    failure: Option<anyhow::Error>,
}

impl App {
    fn new(frames: FrameSource, render_config: RenderConfig) -> Self {
        Self {
            window: None,
            display: None,
            frames,
            render_config,
            next_frame_at: Instant::now(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{:#}", err);
        self.failure.get_or_insert(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame_at {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame_at += self.render_config.frame_interval();
            if self.next_frame_at < now {
                // Fell behind; don't try to catch up with a burst of frames
                self.next_frame_at = now + self.render_config.frame_interval();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame_at));
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(event_loop, anyhow::Error::new(err).context("creating window"));
                return;
            }
        };

        let display = match pollster::block_on(DisplaySystem::new(
            Arc::clone(&window),
            self.frames.size(),
        )) {
            Ok(display) => display,
            Err(err) => {
                self.fail(event_loop, anyhow::Error::new(err).context("initializing display"));
                return;
            }
        };

        info!("Jellytide is running");
        info!("Press SPACE to pause, ESC to quit");

        self.window = Some(window);
        self.display = Some(display);
        self.next_frame_at = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::Space => {
                    self.frames.playback.toggle_pause();
                }
                _ => {}
            },
            WindowEvent::Resized(size) => {
                if let Some(display) = &mut self.display {
                    display.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render_frame() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }
}

impl App {
    /// Render, upload and present a single frame
    fn render_frame(&mut self) -> Result<()> {
        let Some(display) = &mut self.display else {
            return Ok(());
        };

        // A paused scene keeps showing the last uploaded frame
        if !self.frames.playback.is_paused() {
            let canvas = self.frames.next_frame().context("rendering frame")?;
            display.upload(&canvas);
        }

        match display.render() {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                display.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(anyhow::anyhow!("GPU out of memory")),
            Err(err) => {
                warn!("Render error: {:?}", err);
                Ok(())
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let render_config = args.render_config();
    let playback_config = args.playback_config();

    let samples = load_wave_csv(&playback_config.data_path)
        .with_context(|| format!("loading wave data from {}", playback_config.data_path.display()))?;
    let playback = Playback::from_config(samples, &playback_config).context("starting playback")?;
    let mut frames = FrameSource::new(playback, SceneRenderer::default(), render_config.clone());

    if let Some(recording_config) = args.recording_config() {
        recording::record(&mut frames, &recording_config).context("recording frames")?;
        return Ok(());
    }

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App::new(frames, render_config);
    event_loop.run_app(&mut app).context("running event loop")?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
