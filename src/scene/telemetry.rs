//! Live wave readings printed beside the bell.

use glam::Vec2;
use image::Rgba;

use super::SceneGeometry;
use crate::canvas::{BlendMode, Canvas};
use crate::font;
use crate::wave::InterpolatedParams;

const TEXT_COLOR: Rgba<u8> = Rgba([120, 180, 255, 255]);

/// Line spacing relative to the font's line height
const LINE_SPACING: f32 = 1.18;

/// Font pixel scale at the reference canvas size
const REFERENCE_TEXT_SCALE: f32 = 2.0;

/// The four telemetry lines, top to bottom
pub fn telemetry_lines(params: &InterpolatedParams) -> [String; 4] {
    [
        format!("Wave Height: {:.2} m", params.wave_height),
        format!("Wave Dir: {:.0}°", params.wave_direction),
        format!("Wave Period: {:.2} s", params.wave_period),
        format!("Current Speed: {:.2} m/s", params.current_speed),
    ]
}

/// Top-left corner of the text block, kept on-canvas when the bell drifts right
pub fn text_anchor(geometry: &SceneGeometry, block_width: f32) -> Vec2 {
    let x = geometry.center.x + geometry.bell_radius.x + geometry.margin / 2.0;
    let y = geometry.center.y - geometry.bell_radius.y + geometry.px(80.0);
    Vec2::new(x.min(geometry.width - block_width).max(0.0), y)
}

pub fn render_telemetry(layer: &mut Canvas, geometry: &SceneGeometry, params: &InterpolatedParams) {
    let scale = (REFERENCE_TEXT_SCALE * geometry.unit).round().max(1.0) as i32;
    let line_height = (font::LINE_HEIGHT as f32 * scale as f32 * LINE_SPACING).trunc();
    let lines = telemetry_lines(params);
    let block_width = lines
        .iter()
        .map(|line| font::text_width(line) * scale)
        .max()
        .unwrap_or(0) as f32;

    let anchor = text_anchor(geometry, block_width);
    for (i, line) in lines.iter().enumerate() {
        let origin = anchor + Vec2::new(0.0, i as f32 * line_height);
        layer.draw_text(origin, line, scale, TEXT_COLOR, BlendMode::Replace);
    }
}
