//! Rendering and recording configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas edge length (pixels); frames are always square
    pub canvas_size: u32,

    /// Initial window width (pixels); the canvas is scaled to fit
    pub window_width: u32,

    /// Initial window height (pixels)
    pub window_height: u32,

    /// Playback rate (frames per second)
    pub fps: u32,

    /// Gaussian blur sigma applied to finished frames (pixels, 0 disables)
    pub blur_sigma: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1920,
            window_width: 960,
            window_height: 960,
            fps: 30,
            blur_sigma: 2.5,
        }
    }
}

impl RenderConfig {
    /// Wall-clock time budget of one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds of playback)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32, output_dir: PathBuf, fps: u32) -> Self {
        Self {
            duration_secs,
            output_dir,
            fps,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs.max(0.0) * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a numbered frame
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame_num))
    }
}
