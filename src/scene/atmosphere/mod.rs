//! Ambient deep-sea effects painted over the backdrop gradient.
//!
//! Paint order: marine snow, bioluminescent glow, light rays, kelp shadows,
//! hydrothermal vents, floor sediment. Each effect owns its random stream.

mod glow;
mod kelp;
mod rays;
mod sediment;
mod snow;
mod vents;

pub use glow::{glow_sites, GlowSite};
pub use kelp::{kelp_fronds, KelpFrond};
pub use vents::vent_jitter;

use super::SceneGeometry;
use crate::canvas::Canvas;
use crate::params::AtmosphereParams;
use crate::wave::{InterpolatedParams, SceneTime};

/// Paint every atmosphere effect in order
pub fn render_atmosphere(
    canvas: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    atmosphere: &AtmosphereParams,
) {
    snow::render(canvas, geometry, params, t, &atmosphere.marine_snow);
    glow::render(canvas, geometry, t, &atmosphere.bioluminescence);
    rays::render(canvas, geometry, params, t, &atmosphere.light_rays);
    kelp::render(canvas, geometry, t, &atmosphere.kelp);
    vents::render(canvas, geometry, params, t, &atmosphere.vents);
    sediment::render(canvas, geometry, t, &atmosphere.sediment);
}
