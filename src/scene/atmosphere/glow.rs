//! Distant bioluminescent creatures: fixed sites with pulsing glow.

use glam::Vec2;
use rand::Rng;

use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::BioluminescenceParams;
use crate::scene::{random, SceneGeometry};
use crate::wave::SceneTime;

/// Channel offsets of the hue variants, cycled by site index
const HUES: [[f32; 3]; 6] = [
    [0.0, 15.0, 35.0],  // blue
    [15.0, 0.0, 30.0],  // purple
    [10.0, 25.0, 12.0], // green
    [20.0, 8.0, 8.0],   // red
    [8.0, 18.0, 25.0],  // cyan
    [15.0, 12.0, 0.0],  // magenta
];

/// A glow site: fixed position and base brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSite {
    pub position: Vec2,
    pub base: f32,
}

/// Site layout for a canvas; identical on every call
pub fn glow_sites(width: u32, height: u32, params: &BioluminescenceParams) -> Vec<GlowSite> {
    let (w, h) = (width as i32, height as i32);
    let mut rng = random::fixed_stream(params.seed);
    (0..params.count)
        .map(|_| {
            let x = random::int_in(&mut rng, w / 8, 7 * w / 8);
            let y = random::int_in(&mut rng, h / 6, h);
            GlowSite {
                position: Vec2::new(x as f32, y as f32),
                base: (50 + rng.gen_range(0..40)) as f32,
            }
        })
        .collect()
}

pub(super) fn render(canvas: &mut Canvas, geometry: &SceneGeometry, t: SceneTime, params: &BioluminescenceParams) {
    let sites = glow_sites(canvas.width(), canvas.height(), params);

    for (i, site) in sites.iter().enumerate() {
        let pulse = 0.4 + 0.8 * (t.phase(f64::from(params.pulse_rate)) + i as f32 * 0.8).sin();
        let intensity = (pulse * site.base).trunc();
        let [dr, dg, db] = HUES[i % HUES.len()];

        let glow_radius = geometry.radius(6.0 + (pulse * 5.0).trunc());
        canvas.fill_rings(site.position, glow_radius, Vec2::ONE, BlendMode::Over, |ring| {
            let alpha = (intensity * (ring as f32 / glow_radius as f32) * 0.8).trunc();
            rgba(intensity + dr, intensity + dg, intensity + db, alpha)
        });
    }
}
