//! Per-frame procedural scene: backdrop, atmosphere, creature and telemetry.
//!
//! Every renderer here is a pure function of (canvas size, bell center, wave
//! parameters, scene time). Nothing reads pixels from a previous frame.

pub mod atmosphere;
mod background;
pub mod compose;
pub mod creature;
pub mod random;
pub mod telemetry;

use glam::Vec2;

use crate::params::CreatureParams;

pub use background::{gradient_color, render_background};
pub use compose::{render_frame, LayerKind, SceneRenderer, PAINT_ORDER};

/// Edge length of the canvas the scene constants were tuned on (pixels)
pub const REFERENCE_CANVAS_PX: f32 = 1920.0;

/// Frame layout derived once from canvas size and bell position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneGeometry {
    pub width: f32,
    pub height: f32,
    /// Bell center (pixels)
    pub center: Vec2,
    /// Bell semi-axes (pixels)
    pub bell_radius: Vec2,
    /// Side margin (pixels)
    pub margin: f32,
    /// Trunk length (pixels)
    pub trunk_length: f32,
    /// Canvas pixels per reference pixel
    pub unit: f32,
}

impl SceneGeometry {
    pub fn new(width: u32, height: u32, center: Vec2, creature: &CreatureParams) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            width: w,
            height: h,
            center,
            bell_radius: Vec2::new(
                (w * creature.bell_radius_x_frac).floor(),
                (h * creature.bell_radius_y_frac).floor(),
            ),
            margin: (w * creature.side_margin_frac).floor(),
            trunk_length: (h * creature.trunk_length_frac).floor(),
            unit: w.min(h) / REFERENCE_CANVAS_PX,
        }
    }

    /// Reference length in canvas pixels
    pub fn px(&self, reference: f32) -> f32 {
        reference * self.unit
    }

    /// Canvas position in reference pixels, for spatial frequencies
    pub fn to_reference(&self, canvas_px: f32) -> f32 {
        if self.unit > 0.0 {
            canvas_px / self.unit
        } else {
            0.0
        }
    }

    /// Integer radius for a reference radius, truncated like the reference sizes.
    /// Radii that exist at reference size stay at least one pixel wide.
    pub fn radius(&self, reference: f32) -> i32 {
        let r = reference.trunc();
        if r < 1.0 || !r.is_finite() {
            0
        } else {
            ((r * self.unit).round() as i32).max(1)
        }
    }
}
