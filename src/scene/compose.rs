//! Frame composition: an explicit, ordered list of layers and how each one blends.

use glam::Vec2;
use log::trace;

use super::{creature, render_background, telemetry, SceneGeometry};
use crate::canvas::{BlendMode, Canvas};
use crate::params::{AtmosphereParams, CreatureParams};
use crate::wave::{InterpolatedParams, SceneTime};

/// Layers of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Gradient, wave silhouettes and atmosphere; fully opaque
    Backdrop,
    /// Jellyfish body on a transparent layer
    Creature,
    /// Wave readings on a transparent layer
    Telemetry,
}

/// Paint order, bottom to top
pub const PAINT_ORDER: [LayerKind; 3] = [LayerKind::Backdrop, LayerKind::Creature, LayerKind::Telemetry];

impl LayerKind {
    /// How the finished layer lands on the frame
    pub fn blend(self) -> BlendMode {
        match self {
            LayerKind::Backdrop => BlendMode::Replace,
            LayerKind::Creature | LayerKind::Telemetry => BlendMode::Over,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Backdrop => "backdrop",
            LayerKind::Creature => "creature",
            LayerKind::Telemetry => "telemetry",
        }
    }
}

/// Scene generator holding the tunable effect parameters
#[derive(Debug, Clone, Default)]
pub struct SceneRenderer {
    pub atmosphere: AtmosphereParams,
    pub creature: CreatureParams,
}

impl SceneRenderer {
    pub fn new(atmosphere: AtmosphereParams, creature: CreatureParams) -> Self {
        Self { atmosphere, creature }
    }

    /// Draw one complete frame into `canvas`, replacing its contents.
    ///
    /// Output depends only on canvas size, `bell_center`, `params` and `t`.
    pub fn render_frame(&self, canvas: &mut Canvas, bell_center: Vec2, params: &InterpolatedParams, t: SceneTime) {
        let params = params.sanitized();
        let geometry = SceneGeometry::new(canvas.width(), canvas.height(), bell_center, &self.creature);

        for kind in PAINT_ORDER {
            let layer = self.render_layer(kind, &geometry, &params, t);
            trace!("Compositing {} layer at t={}", kind.name(), t.0);
            canvas.composite(&layer, kind.blend());
        }
    }

    fn render_layer(
        &self,
        kind: LayerKind,
        geometry: &SceneGeometry,
        params: &InterpolatedParams,
        t: SceneTime,
    ) -> Canvas {
        let mut layer = Canvas::new(geometry.width as u32, geometry.height as u32);
        match kind {
            LayerKind::Backdrop => render_background(&mut layer, geometry, params, t, &self.atmosphere),
            LayerKind::Creature => creature::render_creature(&mut layer, geometry, params, t, &self.creature),
            LayerKind::Telemetry => telemetry::render_telemetry(&mut layer, geometry, params),
        }
        layer
    }
}

/// Render a frame with the default scene parameters
pub fn render_frame(canvas: &mut Canvas, bell_center: Vec2, params: &InterpolatedParams, t: SceneTime) {
    SceneRenderer::default().render_frame(canvas, bell_center, params, t);
}
