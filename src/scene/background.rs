//! Depth gradient and rolling wave silhouettes behind everything else.

use glam::Vec2;
use image::Rgba;

use super::{atmosphere, SceneGeometry};
use crate::canvas::{rgba, BlendMode, Canvas};
use crate::params::AtmosphereParams;
use crate::wave::{InterpolatedParams, SceneTime, MIN_WAVE_PERIOD_S};

/// One translucent wave band
struct WaveLayer {
    /// Amplitude in calm water (reference pixels)
    amplitude: f32,
    /// Extra amplitude per meter of wave height
    amplitude_per_meter: f32,
    /// Spatial frequency (radians per reference pixel)
    frequency: f32,
    speed: f32,
    alpha: u8,
    /// Resting line as a fraction of canvas height
    offset_frac: f32,
}

const WAVE_LAYERS: [WaveLayer; 3] = [
    WaveLayer {
        amplitude: 15.0,
        amplitude_per_meter: 8.0,
        frequency: 0.003,
        speed: 0.8,
        alpha: 15,
        offset_frac: 0.7,
    },
    WaveLayer {
        amplitude: 12.0,
        amplitude_per_meter: 6.0,
        frequency: 0.005,
        speed: 1.2,
        alpha: 10,
        offset_frac: 0.8,
    },
    WaveLayer {
        amplitude: 8.0,
        amplitude_per_meter: 4.0,
        frequency: 0.008,
        speed: 1.6,
        alpha: 8,
        offset_frac: 0.9,
    },
];

/// Horizontal spacing of silhouette vertices (reference pixels)
const WAVE_STEP_PX: f32 = 5.0;

/// Opaque backdrop color of canvas row `y`
pub fn gradient_color(y: f32, geometry: &SceneGeometry, params: &InterpolatedParams, t: SceneTime) -> Rgba<u8> {
    let depth = if geometry.height > 0.0 { y / geometry.height } else { 0.0 };
    let period = params.wave_period.max(MIN_WAVE_PERIOD_S);
    let influence = 0.02 * (0.01 * geometry.to_reference(y) + t.phase(f64::from(period) / 50.0)).sin();

    rgba(
        (1.0 + 4.0 * depth).trunc() + influence * 2.0,
        (3.0 + 8.0 * depth).trunc() + influence * 3.0,
        (8.0 + 20.0 * depth).trunc() + influence * 5.0,
        255.0,
    )
}

/// Paint the gradient, the wave silhouettes, then every atmosphere effect
pub fn render_background(
    canvas: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    atmosphere: &AtmosphereParams,
) {
    let width = canvas.width() as i32;
    for y in 0..canvas.height() as i32 {
        let color = gradient_color(y as f32, geometry, params, t);
        canvas.hline(y, 0, width - 1, color, BlendMode::Replace);
    }

    for layer in &WAVE_LAYERS {
        draw_wave_layer(canvas, geometry, params, t, layer);
    }

    atmosphere::render_atmosphere(canvas, geometry, params, t, atmosphere);
}

fn draw_wave_layer(
    canvas: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    layer: &WaveLayer,
) {
    let period = params.wave_period.max(MIN_WAVE_PERIOD_S);
    let rate = f64::from(layer.speed) * f64::from(period) / 30.0;
    let phase = t.phase(rate);
    let slow_phase = t.phase(rate * 0.7);
    let amplitude = geometry.px(layer.amplitude + layer.amplitude_per_meter * params.wave_height);
    let offset = geometry.height * layer.offset_frac;

    let reference_width = geometry.to_reference(geometry.width);
    let steps = ((reference_width + 10.0) / WAVE_STEP_PX).floor() as usize;
    let mut outline: Vec<Vec2> = (0..=steps)
        .map(|i| {
            let xr = i as f32 * WAVE_STEP_PX;
            let y = offset
                + amplitude * (xr * layer.frequency + phase).sin()
                + amplitude * 0.3 * (xr * layer.frequency * 2.3 + slow_phase).sin();
            Vec2::new(geometry.px(xr), y.trunc())
        })
        .collect();
    outline.push(Vec2::new(geometry.width, geometry.height));
    outline.push(Vec2::new(0.0, geometry.height));

    let [r, g, b, _] = gradient_color(offset, geometry, params, t).0;
    let color = rgba(
        r as f32 + 3.0,
        g as f32 + 5.0,
        b as f32 + 8.0,
        layer.alpha as f32,
    );
    canvas.fill_polygon(&outline, color, BlendMode::Over);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CreatureParams;

    fn calm() -> InterpolatedParams {
        InterpolatedParams {
            timestamp: String::new(),
            wave_height: 0.0,
            wave_direction: 0.0,
            wave_period: 8.0,
            current_speed: 0.0,
        }
    }

    fn geometry(size: u32) -> SceneGeometry {
        SceneGeometry::new(size, size, Vec2::splat(size as f32 / 2.0), &CreatureParams::default())
    }

    #[test]
    fn test_gradient_darkest_at_top() {
        let g = geometry(1920);
        let top = gradient_color(0.0, &g, &calm(), SceneTime(0));
        let bottom = gradient_color(1919.0, &g, &calm(), SceneTime(0));
        assert!(top[2] < bottom[2]);
        assert!(bottom[2] <= 28);
        assert_eq!(top[3], 255);
    }

    #[test]
    fn test_zero_period_does_not_divide_by_zero() {
        let mut params = calm();
        params.wave_period = 0.0;
        let g = geometry(64);
        let color = gradient_color(10.0, &g, &params, SceneTime(500));
        assert_eq!(color[3], 255);
    }

    #[test]
    fn test_wave_layers_brighten_lower_rows() {
        let g = geometry(200);
        let mut canvas = Canvas::new(200, 200);
        for layer in &WAVE_LAYERS {
            draw_wave_layer(&mut canvas, &g, &calm(), SceneTime(0), layer);
        }
        assert_eq!(canvas.pixel(100, 10).unwrap()[3], 0);
        assert!(canvas.pixel(100, 195).unwrap()[3] > 0);
    }
}
