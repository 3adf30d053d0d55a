//! Marine snow: falling particulate, reshuffled every frame.

use glam::Vec2;
use log::warn;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::MarineSnowParams;
use crate::scene::{random, SceneGeometry};
use crate::wave::{InterpolatedParams, SceneTime};

/// Flake radii (reference pixels) and their weights
const FLAKE_RADII: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const FLAKE_WEIGHTS: [f32; 5] = [0.6, 0.15, 0.1, 0.1, 0.05];

/// Ceiling on height-driven extra flakes
const MAX_EXTRA_FLAKES: f32 = 20_000.0;

pub fn flake_count(wave_height_m: f32, params: &MarineSnowParams) -> u32 {
    let extra = (wave_height_m.max(0.0) * params.count_per_meter).floor();
    if extra.is_finite() {
        params.base_count + extra.min(MAX_EXTRA_FLAKES) as u32
    } else {
        params.base_count
    }
}

pub(super) fn render(
    canvas: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    snow: &MarineSnowParams,
) {
    let sizes = match WeightedIndex::new(FLAKE_WEIGHTS) {
        Ok(sizes) => sizes,
        Err(err) => {
            warn!("Marine snow disabled: {}", err);
            return;
        }
    };
    let mut rng = random::fixed_stream(t.0 % snow.seed_period.max(1));
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let speed = params.current_speed;
    let reference_height = geometry.to_reference(geometry.height);

    for i in 0..flake_count(params.wave_height, snow) {
        let x = random::int_in(&mut rng, 0, w);
        let base_y = random::int_in(&mut rng, 0, h) as f32;
        let drift = snow.drift_px_per_current * speed * (t.phase(0.02) + i as f32 * 0.1).sin();
        let fall = t.travel(snow.fall_px + snow.fall_px_per_current * speed, reference_height);
        let y = (base_y + geometry.px(fall + drift)).rem_euclid(geometry.height.max(1.0));

        let radius = FLAKE_RADII[sizes.sample(&mut rng)];
        let brightness = (40 + rng.gen_range(0..60)) as f32;
        let alpha = (80 + rng.gen_range(0..80)) as f32;
        let color = rgba(brightness, brightness + 12.0, brightness + 20.0, alpha);

        if radius <= 1.0 {
            canvas.put_opaque(x, y as i32, color);
        } else {
            let r = geometry.radius(radius);
            canvas.fill_circle(Vec2::new(x as f32, y), r, color, BlendMode::Over);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CreatureParams;

    #[test]
    fn test_flake_count_follows_height() {
        let params = MarineSnowParams::default();
        assert_eq!(flake_count(0.0, &params), 250);
        assert_eq!(flake_count(1.5, &params), 370);
        assert_eq!(flake_count(f32::INFINITY, &params), 250);
    }

    #[test]
    fn test_same_frame_same_snow() {
        let geometry = SceneGeometry::new(64, 64, Vec2::splat(32.0), &CreatureParams::default());
        let params = InterpolatedParams {
            timestamp: String::new(),
            wave_height: 0.5,
            wave_direction: 0.0,
            wave_period: 6.0,
            current_speed: 0.4,
        };
        let draw = |t| {
            let mut canvas = Canvas::new(64, 64);
            render(&mut canvas, &geometry, &params, SceneTime(t), &MarineSnowParams::default());
            canvas.into_image()
        };
        assert_eq!(draw(7), draw(7));
        assert_ne!(draw(7), draw(8));
    }
}
