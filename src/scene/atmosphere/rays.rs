//! Filtered sunlight shafts fading with depth.

use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::LightRayParams;
use crate::scene::SceneGeometry;
use crate::wave::{InterpolatedParams, SceneTime};

pub(super) fn render(
    canvas: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    rays: &LightRayParams,
) {
    let depth = (geometry.height * rays.depth_fraction).floor() as i32;
    if depth <= 0 {
        return;
    }
    let half_width = geometry
        .px(5.0 + (params.wave_height * 2.5).floor())
        .min(geometry.width)
        .round()
        .max(1.0) as i32;

    for i in 0..rays.count {
        let i = i as f32;
        let x = geometry.width * (0.05 + i * 0.07) + geometry.px(rays.sway_px) * (t.phase(0.02) + i).sin();
        let x = x as i32;
        let ray_alpha = (25.0 + 15.0 * (t.phase(0.06) + i * 0.5).sin()).trunc();

        for y in 0..depth {
            let fade = 1.0 - y as f32 / depth as f32;
            let alpha = (ray_alpha * fade * fade).trunc();
            if alpha > 0.0 {
                let half = (alpha / 2.0).floor();
                let color = rgba(half + 5.0, half + 8.0, alpha + 15.0, alpha);
                canvas.hline(y, x - half_width, x + half_width - 1, color, BlendMode::Over);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CreatureParams;
    use glam::Vec2;

    #[test]
    fn test_rays_stay_in_upper_part() {
        let geometry = SceneGeometry::new(300, 300, Vec2::splat(150.0), &CreatureParams::default());
        let params = InterpolatedParams {
            timestamp: String::new(),
            wave_height: 0.0,
            wave_direction: 0.0,
            wave_period: 8.0,
            current_speed: 0.0,
        };
        let mut canvas = Canvas::new(300, 300);
        render(&mut canvas, &geometry, &params, SceneTime(0), &LightRayParams::default());
        let lit_rows: Vec<i32> = (0..300)
            .filter(|&y| (0..300).any(|x| canvas.pixel(x, y).map_or(false, |p| p[3] > 0)))
            .collect();
        assert!(!lit_rows.is_empty());
        assert!(lit_rows.iter().all(|y| *y < 200));
    }
}
