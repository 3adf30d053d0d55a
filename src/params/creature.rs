//! Creature shape parameters.

use std::ops::Range;

/// Upper bound on height-driven tentacles (a 20m sea already gives ~1800)
const MAX_EXTRA_TENTACLES: f32 = 4096.0;

/// Jellyfish body layout and animation constants
#[derive(Debug, Clone)]
pub struct CreatureParams {
    /// Bell half-width as a fraction of canvas width
    pub bell_radius_x_frac: f32,

    /// Bell half-height as a fraction of canvas height
    pub bell_radius_y_frac: f32,

    /// Side margin as a fraction of canvas width (telemetry sits half a margin beside the bell)
    pub side_margin_frac: f32,

    /// Concentric dot contours in the bell
    pub bell_layers: u32,

    /// Dots on the outermost contour (inner contours get fewer)
    pub bell_edge_dots: u32,

    /// Every n-th contour carries radial and arc detail lines
    pub detail_every: u32,

    /// Points along the trunk
    pub trunk_points: u32,

    /// Trunk length as a fraction of canvas height
    pub trunk_length_frac: f32,

    /// Tentacles in flat water
    pub base_tentacles: u32,

    /// Extra tentacles per meter of wave height
    pub tentacles_per_meter: f32,

    /// Segment count range per tentacle (end exclusive)
    pub tentacle_segments: Range<u32>,

    /// Seed for the stable per-tentacle segment counts
    pub tentacle_seed: u64,

    /// Salt mixed with scene time for sparkle and afterimage rolls
    pub sparkle_salt: u64,
}

impl Default for CreatureParams {
    fn default() -> Self {
        Self {
            bell_radius_x_frac: 0.12,
            bell_radius_y_frac: 0.06,
            side_margin_frac: 0.23,
            bell_layers: 56,
            bell_edge_dots: 420,
            detail_every: 7,
            trunk_points: 90,
            trunk_length_frac: 0.32,
            base_tentacles: 24,
            tentacles_per_meter: 90.0,
            tentacle_segments: 12..22,
            tentacle_seed: 2024,
            sparkle_salt: 0x6a09_e667,
        }
    }
}

impl CreatureParams {
    /// Number of tentacles for a wave height (meters); never below the base count
    pub fn tentacle_count(&self, wave_height_m: f32) -> u32 {
        let extra = (wave_height_m.max(0.0) * self.tentacles_per_meter).floor();
        if extra.is_finite() {
            self.base_tentacles
                .saturating_add(extra.min(MAX_EXTRA_TENTACLES) as u32)
        } else {
            self.base_tentacles
        }
    }
}
