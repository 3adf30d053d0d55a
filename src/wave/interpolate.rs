//! Linear blending between consecutive wave samples.

use super::{InterpolatedParams, WaveSample};
use crate::error::SceneError;

/// Blend `samples[index]` toward the following sample (wrapping at the end).
///
/// `frac` is the position between the two samples, 0 at `samples[index]`.
/// The timestamp is taken from `samples[index]` unblended.
pub fn interpolate(
    samples: &[WaveSample],
    index: usize,
    frac: f32,
) -> Result<InterpolatedParams, SceneError> {
    if samples.is_empty() {
        return Err(SceneError::EmptyDataset);
    }
    let index = index % samples.len();
    let current = &samples[index];
    let next = &samples[(index + 1) % samples.len()];
    let lerp = |a: f32, b: f32| a * (1.0 - frac) + b * frac;

    Ok(InterpolatedParams {
        timestamp: current.timestamp.clone(),
        wave_height: lerp(current.wave_height, next.wave_height),
        wave_direction: lerp(current.wave_direction, next.wave_direction),
        wave_period: lerp(current.wave_period, next.wave_period),
        current_speed: lerp(current.current_speed, next.current_speed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: &str, height: f32, direction: f32, period: f32, speed: f32) -> WaveSample {
        WaveSample {
            timestamp: time.to_string(),
            wave_height: height,
            wave_direction: direction,
            wave_period: period,
            current_speed: speed,
        }
    }

    fn pair() -> Vec<WaveSample> {
        vec![
            sample("2024-01-01T00:00", 1.0, 90.0, 8.0, 0.3),
            sample("2024-01-01T01:00", 2.0, 180.0, 6.0, 0.6),
        ]
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        assert_eq!(interpolate(&[], 0, 0.0), Err(SceneError::EmptyDataset));
    }

    #[test]
    fn test_frac_zero_returns_current_sample() {
        let samples = pair();
        let params = interpolate(&samples, 0, 0.0).unwrap();
        assert_eq!(params, InterpolatedParams::from(&samples[0]));
    }

    #[test]
    fn test_midpoint_is_mean() {
        let params = interpolate(&pair(), 0, 0.5).unwrap();
        assert_eq!(params.wave_height, 1.5);
        assert_eq!(params.wave_direction, 135.0);
        assert_eq!(params.wave_period, 7.0);
        assert!((params.current_speed - 0.45).abs() < 1e-6);
        assert_eq!(params.timestamp, "2024-01-01T00:00");
    }

    #[test]
    fn test_approaches_next_sample() {
        let params = interpolate(&pair(), 0, 0.999).unwrap();
        assert!((params.wave_height - 2.0).abs() < 0.01);
        assert!((params.wave_direction - 180.0).abs() < 0.1);
        assert!((params.wave_period - 6.0).abs() < 0.01);
        assert!((params.current_speed - 0.6).abs() < 0.01);
    }

    #[test]
    fn test_last_index_wraps_to_first() {
        let samples = pair();
        let params = interpolate(&samples, 1, 0.5).unwrap();
        assert_eq!(params.wave_height, 1.5);
        assert_eq!(params.timestamp, samples[1].timestamp);

        let near_start = interpolate(&samples, 1, 0.999).unwrap();
        assert!((near_start.wave_height - samples[0].wave_height).abs() < 0.01);
    }

    #[test]
    fn test_single_sample_blends_with_itself() {
        let samples = vec![sample("t", 0.4, 10.0, 5.0, 0.1)];
        let params = interpolate(&samples, 0, 0.7).unwrap();
        assert!((params.wave_height - 0.4).abs() < 1e-6);
        assert!((params.wave_period - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_largest_index_wraps_without_overflow() {
        let samples = pair();
        let params = interpolate(&samples, usize::MAX, 0.0).unwrap();
        assert_eq!(params, InterpolatedParams::from(&samples[usize::MAX % 2]));
        let blended = interpolate(&samples, usize::MAX, 1.0).unwrap();
        assert_eq!(blended.wave_height, samples[(usize::MAX % 2 + 1) % 2].wave_height);
    }
}
