//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::params::{PlaybackConfig, RecordingConfig, RenderConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "jellytide")]
#[command(about = "Deep-sea jellyfish animated by ocean wave measurements", long_about = None)]
pub struct Args {
    /// Wave record in open-meteo marine CSV layout
    #[arg(long, value_name = "CSV", default_value = "open-meteo-54.54N10.21E0m.csv")]
    pub data: PathBuf,

    /// Canvas edge length (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1920")]
    pub size: u32,

    /// Frames per second
    #[arg(long, value_name = "FPS", default_value = "30")]
    pub fps: u32,

    /// Frames spent blending between consecutive samples
    #[arg(long, value_name = "FRAMES", default_value = "60")]
    pub interp_steps: u32,

    /// Gaussian blur sigma applied to each frame (0 disables)
    #[arg(long, value_name = "SIGMA", default_value = "2.5")]
    pub blur: f32,

    /// Record frames to PNG instead of opening a window (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Output directory for recorded frames
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output_dir: PathBuf,
}

impl Args {
    /// Rendering configuration from the command line
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            canvas_size: self.size.max(1),
            fps: self.fps.max(1),
            blur_sigma: self.blur,
            ..RenderConfig::default()
        }
    }

    /// Playback configuration from the command line
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            data_path: self.data.clone(),
            interp_steps: self.interp_steps,
            ..PlaybackConfig::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            info!("Recording mode: {:.1}s to {}", duration, self.output_dir.display());
            RecordingConfig::new(duration, self.output_dir.clone(), self.fps.max(1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_configs() {
        let args = Args::parse_from(["jellytide"]);
        let render = args.render_config();
        assert_eq!(render.canvas_size, 1920);
        assert_eq!(render.fps, 30);
        assert_eq!(render.blur_sigma, 2.5);
        assert_eq!(args.playback_config().interp_steps, 60);
        assert_eq!(args.playback_config().data_path, PlaybackConfig::default().data_path);
        assert!(args.recording_config().is_none());
    }

    #[test]
    fn test_record_flags() {
        let args = Args::parse_from([
            "jellytide",
            "--record",
            "2",
            "--fps",
            "24",
            "--output-dir",
            "out",
            "--size",
            "512",
            "--blur",
            "0",
        ]);
        let recording = args.recording_config().unwrap();
        assert_eq!(recording.total_frames(), 48);
        assert_eq!(recording.output_dir, PathBuf::from("out"));
        assert_eq!(args.render_config().canvas_size, 512);
        assert_eq!(args.render_config().blur_sigma, 0.0);
    }
}
