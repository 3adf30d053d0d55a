//! Sediment band and scattered debris along the sea floor.

use glam::Vec2;
use rand::Rng;

use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::SedimentParams;
use crate::scene::{random, SceneGeometry};
use crate::wave::SceneTime;

pub(super) fn render(canvas: &mut Canvas, geometry: &SceneGeometry, t: SceneTime, params: &SedimentParams) {
    if canvas.height() <= params.min_canvas_height || params.step_px <= 0.0 {
        return;
    }
    let floor_y = geometry.height - geometry.px(params.floor_offset_px);
    let grain_w = geometry.px(6.0).round().max(1.0) as i32;
    let grain_h = geometry.px(3.0).round().max(1.0) as i32;
    let reference_width = geometry.to_reference(geometry.width);
    let debris_every = params.debris_every.max(1) as usize;
    let mut debris_rng = random::fixed_stream(params.seed);

    let mut grain = 0usize;
    let mut xr = 0.0f32;
    while xr < reference_width {
        let x = geometry.px(xr).floor();
        let y = floor_y + geometry.px(8.0 * (xr * 0.02 + t.phase(0.01)).sin());

        let alpha = (25.0 + 15.0 * (xr * 0.05 + t.phase(0.02)).sin()).trunc();
        let color = rgba((alpha / 2.0).floor(), (alpha / 1.5).floor(), alpha + 5.0, alpha);
        canvas.fill_rect(x as i32, y as i32, grain_w, grain_h, color, BlendMode::Over);

        if grain % debris_every == 0 {
            let size = debris_rng.gen_range(3..8) as f32;
            let alpha = (20 + debris_rng.gen_range(0..20)) as f32;
            let color = rgba(
                (alpha / 3.0).floor(),
                (alpha / 2.0).floor(),
                (alpha / 1.5).floor(),
                alpha,
            );
            let top = y.trunc() - geometry.px((size / 2.0).floor());
            let center = Vec2::new(x + geometry.px(size), top + geometry.px(size / 2.0));
            canvas.fill_ellipse(center, geometry.px(size), geometry.px(size / 2.0), color, BlendMode::Over);
        }

        grain += 1;
        xr += params.step_px;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CreatureParams;

    fn draw(size: u32) -> Canvas {
        let geometry = SceneGeometry::new(size, size, Vec2::splat(size as f32 / 2.0), &CreatureParams::default());
        let mut canvas = Canvas::new(size, size);
        render(&mut canvas, &geometry, SceneTime(3), &SedimentParams::default());
        canvas
    }

    #[test]
    fn test_short_canvas_has_no_floor() {
        assert!(draw(100).image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_floor_band_sits_at_bottom() {
        let canvas = draw(400);
        assert!(canvas.image().pixels().any(|p| p[3] > 0));
        for y in 0..350 {
            for x in 0..400 {
                assert_eq!(canvas.pixel(x, y).unwrap()[3], 0, "unexpected sediment at ({x}, {y})");
            }
        }
    }
}
