//! Kelp forest silhouettes swaying in the distance.

use glam::Vec2;
use rand::Rng;

use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::KelpParams;
use crate::scene::{random, SceneGeometry};
use crate::wave::SceneTime;

/// Fixed layout of one frond
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KelpFrond {
    /// Root position (pixels)
    pub base: Vec2,
    /// Stalk height (pixels)
    pub height: f32,
    /// Sway amplitude at the tip (reference pixels)
    pub sway_amplitude: f32,
    /// Sway rate (radians per frame)
    pub sway_rate: f32,
}

/// Frond layout for a canvas; identical on every call
pub fn kelp_fronds(geometry: &SceneGeometry, params: &KelpParams) -> Vec<KelpFrond> {
    let (w, h) = (geometry.width as i32, geometry.height as i32);
    let mut rng = random::fixed_stream(params.seed);
    (0..params.fronds)
        .map(|_| {
            let x = random::int_in(&mut rng, w / 10, 9 * w / 10);
            let root_depth = rng.gen_range(10..80) as f32;
            let height = random::int_in(&mut rng, h / 2, 4 * h / 5);
            let sway_amplitude = (25 + rng.gen_range(0..20)) as f32;
            let sway_rate = 0.015 + rng.gen::<f32>() * 0.02;
            KelpFrond {
                base: Vec2::new(x as f32, geometry.height - geometry.px(root_depth)),
                height: height as f32,
                sway_amplitude,
                sway_rate,
            }
        })
        .collect()
}

impl KelpFrond {
    /// Point at `frac` (0 root, 1 tip) along frond `index`
    fn point(&self, geometry: &SceneGeometry, index: usize, frac: f32, t: SceneTime) -> Vec2 {
        let sway = self.sway_amplitude * (t.phase(f64::from(self.sway_rate)) + frac * 4.0 + index as f32 * 0.7).sin();
        Vec2::new(
            self.base.x + geometry.px(sway) * frac * frac,
            self.base.y - self.height * frac,
        )
    }
}

pub(super) fn render(canvas: &mut Canvas, geometry: &SceneGeometry, t: SceneTime, params: &KelpParams) {
    let segments = params.segments.max(1);

    for (index, frond) in kelp_fronds(geometry, params).iter().enumerate() {
        let mut previous = frond.point(geometry, index, 0.0, t);
        for seg in 1..segments {
            let frac = seg as f32 / segments as f32;
            let point = frond.point(geometry, index, frac, t);

            let width = geometry.px((4.0 + 3.0 * (1.0 - frac)).trunc());
            let alpha = (40.0 + 25.0 * (1.0 - frac)).trunc();
            let color = rgba(
                (alpha / 3.0).floor(),
                (alpha / 1.5).floor(),
                (alpha / 4.0).floor(),
                alpha,
            );
            canvas.thick_line(previous, point, width, color, BlendMode::Over);
            previous = point;
        }
    }
}
