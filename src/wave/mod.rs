//! Wave measurements: the sample record, per-frame interpolated parameters and scene time.

mod interpolate;
mod loader;

pub use interpolate::interpolate;
pub use loader::{load_wave_csv, parse_wave_csv, ParsedRecord};

use std::f64::consts::TAU;

/// Shortest wave period (seconds) used as a divisor anywhere in the scene
pub const MIN_WAVE_PERIOD_S: f32 = 0.5;

/// Longest wave period (seconds) the scene animates
pub const MAX_WAVE_PERIOD_S: f32 = 60.0;

/// Tallest significant wave height (meters) the scene responds to
pub const MAX_WAVE_HEIGHT_M: f32 = 30.0;

/// Fastest current (m/s) the scene responds to
pub const MAX_CURRENT_SPEED_MS: f32 = 10.0;

/// One row of the marine record
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSample {
    /// Source timestamp, kept verbatim
    pub timestamp: String,
    /// Significant wave height (meters)
    pub wave_height: f32,
    /// Mean wave direction (degrees)
    pub wave_direction: f32,
    /// Wave period (seconds)
    pub wave_period: f32,
    /// Ocean current velocity (m/s)
    pub current_speed: f32,
}

/// Wave parameters blended for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedParams {
    /// Timestamp of the sample being blended away from
    pub timestamp: String,
    pub wave_height: f32,
    pub wave_direction: f32,
    pub wave_period: f32,
    pub current_speed: f32,
}

impl InterpolatedParams {
    /// Copy with every field forced into the range the renderers expect.
    ///
    /// Height, period and speed are clamped into
    /// `0..=`[`MAX_WAVE_HEIGHT_M`], [`MIN_WAVE_PERIOD_S`]`..=`[`MAX_WAVE_PERIOD_S`]
    /// and `0..=`[`MAX_CURRENT_SPEED_MS`]; the direction is wrapped into [0, 360).
    /// NaN and infinities become the floor value of their field.
    pub fn sanitized(&self) -> Self {
        let direction = if self.wave_direction.is_finite() {
            self.wave_direction.rem_euclid(360.0)
        } else {
            0.0
        };
        Self {
            timestamp: self.timestamp.clone(),
            wave_height: finite_or_zero(self.wave_height).clamp(0.0, MAX_WAVE_HEIGHT_M),
            wave_direction: direction,
            wave_period: finite_or_zero(self.wave_period).clamp(MIN_WAVE_PERIOD_S, MAX_WAVE_PERIOD_S),
            current_speed: finite_or_zero(self.current_speed).clamp(0.0, MAX_CURRENT_SPEED_MS),
        }
    }
}

impl From<&WaveSample> for InterpolatedParams {
    fn from(sample: &WaveSample) -> Self {
        Self {
            timestamp: sample.timestamp.clone(),
            wave_height: sample.wave_height,
            wave_direction: sample.wave_direction,
            wave_period: sample.wave_period,
            current_speed: sample.current_speed,
        }
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Frame counter driving all periodic motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SceneTime(pub u64);

impl SceneTime {
    /// Angle `t * rate` (radians) reduced into [0, 2π).
    ///
    /// The product is formed in f64 so consecutive frames stay distinct long
    /// after the frame count outgrows f32's integer range.
    pub fn phase(self, rate: f64) -> f32 {
        (self.0 as f64 * rate).rem_euclid(TAU) as f32
    }

    /// Distance covered at `rate` per frame, wrapped into `[0, period)`.
    /// A non-positive period yields 0.
    pub fn travel(self, rate: f32, period: f32) -> f32 {
        if period.is_nan() || period <= 0.0 {
            return 0.0;
        }
        (self.0 as f64 * f64::from(rate)).rem_euclid(f64::from(period)) as f32
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(height: f32, direction: f32, period: f32, speed: f32) -> InterpolatedParams {
        InterpolatedParams {
            timestamp: "2024-01-01T00:00".to_string(),
            wave_height: height,
            wave_direction: direction,
            wave_period: period,
            current_speed: speed,
        }
    }

    #[test]
    fn test_sanitized_clamps_degenerate_values() {
        let clean = params(-1.0, -90.0, 0.0, -0.2).sanitized();
        assert_eq!(clean.wave_height, 0.0);
        assert_eq!(clean.wave_direction, 270.0);
        assert_eq!(clean.wave_period, MIN_WAVE_PERIOD_S);
        assert_eq!(clean.current_speed, 0.0);
    }

    #[test]
    fn test_sanitized_replaces_nan() {
        let clean = params(f32::NAN, f32::INFINITY, f32::NAN, f32::NAN).sanitized();
        assert_eq!(clean.wave_height, 0.0);
        assert_eq!(clean.wave_direction, 0.0);
        assert_eq!(clean.wave_period, MIN_WAVE_PERIOD_S);
        assert_eq!(clean.current_speed, 0.0);
    }

    #[test]
    fn test_sanitized_caps_extreme_values() {
        let clean = params(1e30, 1e30, 1e30, 1e30).sanitized();
        assert_eq!(clean.wave_height, MAX_WAVE_HEIGHT_M);
        assert!((0.0..360.0).contains(&clean.wave_direction));
        assert_eq!(clean.wave_period, MAX_WAVE_PERIOD_S);
        assert_eq!(clean.current_speed, MAX_CURRENT_SPEED_MS);
    }

    #[test]
    fn test_phase_stays_distinct_past_f32_integer_range() {
        let late = SceneTime(1 << 24);
        assert_ne!(late.phase(1.0 / 80.0), late.next().phase(1.0 / 80.0));
        assert_ne!(late.travel(0.5, 1920.0), late.next().travel(0.5, 1920.0));
    }

    #[test]
    fn test_phase_is_reduced() {
        let phase = SceneTime(u64::MAX).phase(0.02);
        assert!((0.0..std::f32::consts::TAU + 1e-3).contains(&phase));
        assert_eq!(SceneTime(100).phase(0.0), 0.0);
        assert!((SceneTime(100).phase(0.01) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_travel_wraps_and_handles_empty_period() {
        assert!((SceneTime(10).travel(3.0, 25.0) - 5.0).abs() < 1e-4);
        assert_eq!(SceneTime(10).travel(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let valid = params(1.5, 359.0, 8.0, 0.3);
        assert_eq!(valid.sanitized(), valid);
    }
}
