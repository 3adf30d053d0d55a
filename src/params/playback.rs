//! Playback and dataset configuration.

use std::path::PathBuf;

/// How the wave record is read and stepped through
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// CSV export with hourly marine data (open-meteo layout)
    pub data_path: PathBuf,

    /// Frames spent blending from one sample to the next
    /// 60 frames @ 30 FPS = 2 s per hourly sample
    pub interp_steps: u32,

    /// Offset of the bell along the wave direction (reference pixels)
    pub direction_offset_px: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("open-meteo-54.54N10.21E0m.csv"),
            interp_steps: 60,
            direction_offset_px: 60.0,
        }
    }
}
