//! Hydrothermal vents: pulsing base glow and rising heat plumes.

use glam::Vec2;
use image::Rgba;
use rand::Rng;

use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::VentParams;
use crate::scene::{random, SceneGeometry};
use crate::wave::{InterpolatedParams, SceneTime};

/// Fixed horizontal jitter of each vent (reference pixels)
pub fn vent_jitter(params: &VentParams) -> Vec<f32> {
    let mut rng = random::fixed_stream(params.seed);
    (0..params.count)
        .map(|_| {
            if params.jitter_px > 0.0 {
                rng.gen_range(-params.jitter_px..params.jitter_px)
            } else {
                0.0
            }
        })
        .collect()
}

/// Plume particle color by age: hot orange near the vent, mineral blue higher up
fn heat_color(heat: f32, age_factor: f32) -> Rgba<u8> {
    if age_factor < 0.3 {
        rgba(heat + 40.0, (heat / 1.5).floor() + 20.0, (heat / 3.0).floor(), heat)
    } else if age_factor < 0.7 {
        rgba(heat + 20.0, heat + 10.0, (heat / 2.0).floor(), heat)
    } else {
        rgba((heat / 2.0).floor(), (heat / 1.5).floor(), heat + 15.0, heat)
    }
}

fn halo(color: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    Rgba([r / 2, g / 2, b / 2, a / 2])
}

pub(super) fn render(
    canvas: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    vents: &VentParams,
) {
    let lifetime = vents.particle_lifetime.max(1) as u64;
    let ceiling = (geometry.height / 3.0).floor();

    for (id, jitter) in vent_jitter(vents).into_iter().enumerate() {
        let fid = id as f32;
        let x = geometry.width * (0.1 + fid * 0.2)
            + geometry.px(jitter + 30.0 * (t.phase(0.015) + fid).sin());
        let y = geometry.height - geometry.px(15.0);
        let activity = 0.7 + 0.5 * (t.phase(0.08) + fid * 1.5).sin();

        let particles = (30.0 + activity * 40.0).trunc() as u64;
        for p in 0..particles {
            let age = (t.0.wrapping_add(p * 8).wrapping_add(id as u64 * 100) % lifetime) as f32;
            let age_factor = age / lifetime as f32;
            let rise = age * (3.0 + activity * 1.5);
            let drift = 15.0 * (age * 0.15 + p as f32 * 0.4).sin()
                + params.current_speed * 20.0 * (age * 0.08).sin();
            let position = Vec2::new(x + geometry.px(drift), y - geometry.px(rise));
            if position.y <= ceiling {
                continue;
            }

            let size = (5.0 * activity * (1.0 - age_factor)).trunc().max(1.0);
            let heat = (activity * 70.0 * (1.0 - age_factor)).trunc();
            let color = heat_color(heat, age_factor);

            if size <= 1.0 {
                canvas.put_opaque(position.x as i32, position.y as i32, color);
                continue;
            }
            let radius = geometry.radius(size);
            if size > 2.0 {
                // core and a half-intensity halo of twice the radius, each pixel blended once
                canvas.fill_rings(position, 2, Vec2::splat(radius as f32), BlendMode::Over, |ring| {
                    if ring == 1 {
                        color
                    } else {
                        halo(color)
                    }
                });
            } else {
                canvas.fill_circle(position, radius, color, BlendMode::Over);
            }
        }

        let intensity = (activity * 100.0).trunc();
        let glow_radius = geometry.radius(12.0 + activity * 8.0);
        base_glow(canvas, Vec2::new(x, y), glow_radius, intensity);
    }
}

/// Stacked 2:1 ellipses, outermost first; each is blended separately so the
/// glow builds up toward the vent mouth
fn base_glow(canvas: &mut Canvas, center: Vec2, glow_radius: i32, intensity: f32) {
    for ring in (1..=glow_radius).rev() {
        let alpha = (intensity * (ring as f32 / glow_radius as f32) * 0.6).trunc();
        let color = rgba(alpha + 25.0, (alpha / 1.5).floor(), (alpha / 3.0).floor(), alpha);
        canvas.fill_ellipse(center, 3.0 * ring as f32, 1.5 * ring as f32, color, BlendMode::Over);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_is_stable_and_bounded() {
        let params = VentParams::default();
        let jitter = vent_jitter(&params);
        assert_eq!(jitter, vent_jitter(&params));
        assert_eq!(jitter.len(), 5);
        assert!(jitter.iter().all(|j| j.abs() < params.jitter_px));
    }

    #[test]
    fn test_zero_jitter() {
        let params = VentParams {
            jitter_px: 0.0,
            ..VentParams::default()
        };
        assert!(vent_jitter(&params).iter().all(|j| *j == 0.0));
    }

    #[test]
    fn test_heat_color_bands() {
        assert_eq!(heat_color(60.0, 0.1), Rgba([100, 60, 20, 60]));
        assert_eq!(heat_color(60.0, 0.5), Rgba([80, 70, 30, 60]));
        assert_eq!(heat_color(60.0, 0.9), Rgba([30, 40, 75, 60]));
    }

    #[test]
    fn test_base_glow_builds_toward_center() {
        let mut canvas = Canvas::new(80, 40);
        base_glow(&mut canvas, Vec2::new(40.0, 20.0), 10, 100.0);
        let center = canvas.pixel(40, 20).unwrap();
        // inside the outermost ellipse only
        let rim = canvas.pixel(40 + 29, 20).unwrap();
        assert_eq!(rim[3], 60);
        assert!(center[3] > rim[3]);
        assert_eq!(canvas.pixel(0, 0).unwrap()[3], 0);
    }
}
