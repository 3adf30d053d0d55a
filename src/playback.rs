//! Playback state: scene time, the current sample and pause.

use glam::Vec2;
use log::{debug, info};

use crate::error::SceneError;
use crate::params::PlaybackConfig;
use crate::scene::REFERENCE_CANVAS_PX;
use crate::wave::{interpolate, InterpolatedParams, SceneTime, WaveSample};

/// Bell rest position as a fraction of canvas height
const BELL_REST_Y_FRAC: f32 = 0.42;

/// Steps through a wave record, blending `interp_steps` frames between samples
#[derive(Debug, Clone)]
pub struct Playback {
    samples: Vec<WaveSample>,
    t: SceneTime,
    index: usize,
    interp_steps: u64,
    paused: bool,
    direction_offset_px: f32,
}

impl Playback {
    /// Start at the first sample; fails on an empty record
    pub fn new(samples: Vec<WaveSample>, interp_steps: u32) -> Result<Self, SceneError> {
        if samples.is_empty() {
            return Err(SceneError::EmptyDataset);
        }
        info!(
            "Playback over {} samples, {} frames per sample",
            samples.len(),
            interp_steps.max(1)
        );
        Ok(Self {
            samples,
            t: SceneTime::default(),
            index: 0,
            interp_steps: interp_steps.max(1) as u64,
            paused: false,
            direction_offset_px: PlaybackConfig::default().direction_offset_px,
        })
    }

    /// Build from a loaded record and the playback configuration
    pub fn from_config(samples: Vec<WaveSample>, config: &PlaybackConfig) -> Result<Self, SceneError> {
        Ok(Self::new(samples, config.interp_steps)?.with_direction_offset(config.direction_offset_px))
    }

    /// Distance the bell shifts along the wave direction (reference pixels)
    pub fn with_direction_offset(mut self, offset_px: f32) -> Self {
        self.direction_offset_px = offset_px;
        self
    }

    pub fn time(&self) -> SceneTime {
        self.t
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Blend fraction toward the next sample
    pub fn frac(&self) -> f32 {
        (self.t.0 % self.interp_steps) as f32 / self.interp_steps as f32
    }

    /// Wave parameters for the current frame
    pub fn params(&self) -> Result<InterpolatedParams, SceneError> {
        interpolate(&self.samples, self.index, self.frac())
    }

    /// Move one frame forward, stepping to the next sample on each interpolation boundary
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        self.t = self.t.next();
        if self.t.0 % self.interp_steps == 0 {
            self.index = (self.index + 1) % self.samples.len();
            debug!(
                "Sample {} ({}) at t={}",
                self.index, self.samples[self.index].timestamp, self.t.0
            );
        }
    }

    /// Flip the pause state; returns true when now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!("Playback {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Bell center for a canvas: the rest position nudged along the current wave direction
    pub fn bell_center(&self, width: u32, height: u32) -> Vec2 {
        let direction = self
            .params()
            .map(|p| p.sanitized().wave_direction)
            .unwrap_or(0.0)
            .to_radians();
        let unit = width.min(height) as f32 / REFERENCE_CANVAS_PX;
        let shift = (self.direction_offset_px * unit * Vec2::new(direction.cos(), direction.sin())).trunc();
        Vec2::new((width / 2) as f32, (height as f32 * BELL_REST_Y_FRAC).trunc()) + shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: &str, height: f32, direction: f32) -> WaveSample {
        WaveSample {
            timestamp: time.to_string(),
            wave_height: height,
            wave_direction: direction,
            wave_period: 8.0,
            current_speed: 0.3,
        }
    }

    fn playback(steps: u32) -> Playback {
        Playback::new(
            vec![sample("a", 1.0, 90.0), sample("b", 2.0, 180.0), sample("c", 3.0, 0.0)],
            steps,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_record_rejected() {
        assert_eq!(Playback::new(Vec::new(), 60).unwrap_err(), SceneError::EmptyDataset);
    }

    #[test]
    fn test_starts_on_first_sample() {
        let playback = playback(60);
        let params = playback.params().unwrap();
        assert_eq!(params.wave_height, 1.0);
        assert_eq!(params.timestamp, "a");
        assert_eq!(playback.time(), SceneTime(0));
    }

    #[test]
    fn test_advances_sample_every_interp_steps() {
        let mut playback = playback(4);
        for _ in 0..3 {
            playback.advance();
        }
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.frac(), 0.75);
        playback.advance();
        assert_eq!(playback.index(), 1);
        assert_eq!(playback.params().unwrap().wave_height, 2.0);
    }

    #[test]
    fn test_wraps_to_first_sample() {
        let mut playback = playback(2);
        for _ in 0..6 {
            playback.advance();
        }
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.time(), SceneTime(6));
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut playback = playback(2);
        playback.advance();
        assert!(playback.toggle_pause());
        playback.advance();
        playback.advance();
        assert_eq!(playback.time(), SceneTime(1));
        assert!(!playback.toggle_pause());
        playback.advance();
        assert_eq!(playback.time(), SceneTime(2));
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let mut playback = playback(0);
        playback.advance();
        assert_eq!(playback.index(), 1);
    }

    #[test]
    fn test_bell_center_follows_direction() {
        let playback = playback(60);
        // 90° points down the canvas (y grows downward)
        assert_eq!(playback.bell_center(1920, 1920), Vec2::new(960.0, 806.0 + 60.0));

        let scaled = playback.bell_center(960, 960);
        assert_eq!(scaled, Vec2::new(480.0, 403.0 + 30.0));
    }
}
