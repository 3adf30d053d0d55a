//! Jellyfish body: a dotted bell, an S-curved trunk and a mist of tentacles.
//!
//! Each part produces a list of [`Mark`]s (pure geometry plus color) which is
//! then painted in Replace mode onto a transparent layer. Mirrored marks are
//! also painted reflected across the bell's vertical axis, with the same color.

mod bell;
mod tentacles;
mod trunk;

pub use bell::bell_marks;
pub use tentacles::{tentacle_marks, tentacle_segment_counts};
pub use trunk::trunk_marks;

use glam::Vec2;
use image::Rgba;
use rand::Rng;

use super::{random, SceneGeometry};
use crate::canvas::{BlendMode, Canvas};
use crate::params::CreatureParams;
use crate::wave::{InterpolatedParams, SceneTime};

/// Drawable primitive of the creature
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Dot { center: Vec2, radius: i32 },
    Line { from: Vec2, to: Vec2 },
}

impl Shape {
    /// Reflection across the vertical line `x = axis_x`
    pub fn reflected(&self, axis_x: f32) -> Shape {
        let flip = |p: Vec2| Vec2::new(2.0 * axis_x - p.x, p.y);
        match *self {
            Shape::Dot { center, radius } => Shape::Dot {
                center: flip(center),
                radius,
            },
            Shape::Line { from, to } => Shape::Line {
                from: flip(from),
                to: flip(to),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    pub shape: Shape,
    pub color: Rgba<u8>,
    /// Also painted reflected across the bell axis
    pub mirrored: bool,
}

impl Mark {
    pub fn mirrored(shape: Shape, color: Rgba<u8>) -> Self {
        Self {
            shape,
            color,
            mirrored: true,
        }
    }

    pub fn single(shape: Shape, color: Rgba<u8>) -> Self {
        Self {
            shape,
            color,
            mirrored: false,
        }
    }
}

/// Replace a color's alpha
fn with_alpha(color: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let [r, g, b, _] = color.0;
    Rgba([r, g, b, alpha.clamp(0.0, 255.0) as u8])
}

/// Bernoulli roll used for sparkles and afterimages
fn roll<R: Rng>(rng: &mut R, probability: f32) -> bool {
    rng.gen::<f32>() < probability
}

/// Paint the whole creature onto a transparent layer
pub fn render_creature(
    layer: &mut Canvas,
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    creature: &CreatureParams,
) {
    let mut sparkle = random::frame_stream(t, creature.sparkle_salt);

    let mut marks = bell_marks(geometry, t, creature, &mut sparkle);
    marks.extend(trunk_marks(geometry, t, creature, &mut sparkle));
    marks.extend(tentacle_marks(geometry, params, t, creature, &mut sparkle));

    for mark in &marks {
        paint(layer, &mark.shape, mark.color);
        if mark.mirrored {
            paint(layer, &mark.shape.reflected(geometry.center.x), mark.color);
        }
    }
}

fn paint(layer: &mut Canvas, shape: &Shape, color: Rgba<u8>) {
    match *shape {
        Shape::Dot { center, radius } => layer.fill_circle(center, radius, color, BlendMode::Replace),
        Shape::Line { from, to } => layer.line(from, to, color, BlendMode::Replace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SceneGeometry {
        SceneGeometry::new(480, 480, Vec2::new(251.5, 201.0), &CreatureParams::default())
    }

    fn calm() -> InterpolatedParams {
        InterpolatedParams {
            timestamp: String::new(),
            wave_height: 0.0,
            wave_direction: 0.0,
            wave_period: 8.0,
            current_speed: 0.0,
        }
    }

    fn points(shape: &Shape) -> Vec<Vec2> {
        match *shape {
            Shape::Dot { center, .. } => vec![center],
            Shape::Line { from, to } => vec![from, to],
        }
    }

    #[test]
    fn test_reflection_mirrors_about_axis() {
        let g = geometry();
        let creature = CreatureParams::default();
        let t = SceneTime(17);
        let mut rng = random::fixed_stream(1);
        let mut marks = bell_marks(&g, t, &creature, &mut rng);
        marks.extend(trunk_marks(&g, t, &creature, &mut rng));
        marks.extend(tentacle_marks(&g, &calm(), t, &creature, &mut rng));

        let mirrored: Vec<&Mark> = marks.iter().filter(|m| m.mirrored).collect();
        assert!(mirrored.iter().any(|m| matches!(m.shape, Shape::Dot { .. })));
        assert!(mirrored.iter().any(|m| matches!(m.shape, Shape::Line { .. })));

        let axis = g.center.x;
        for mark in mirrored {
            let reflected = mark.shape.reflected(axis);
            assert_eq!(
                std::mem::discriminant(&reflected),
                std::mem::discriminant(&mark.shape)
            );
            if let (Shape::Dot { radius, .. }, Shape::Dot { radius: mirrored_radius, .. }) = (mark.shape, reflected) {
                assert_eq!(radius, mirrored_radius);
            }
            for (p, m) in points(&mark.shape).into_iter().zip(points(&reflected)) {
                // equal distance on opposite sides of the axis, same row
                assert!(((p.x - axis) + (m.x - axis)).abs() < 1e-3, "{p} vs {m}");
                assert_eq!(p.y, m.y);
            }
            for (p, back) in points(&mark.shape).into_iter().zip(points(&reflected.reflected(axis))) {
                assert!((p - back).length() < 1e-3);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let g = geometry();
        let draw = || {
            let mut layer = Canvas::new(480, 480);
            render_creature(&mut layer, &g, &calm(), SceneTime(40), &CreatureParams::default());
            layer.into_image()
        };
        let first = draw();
        assert!(first.pixels().any(|p| p[3] > 0));
        assert_eq!(first, draw());
    }

    #[test]
    fn test_creature_leaves_corners_transparent() {
        let g = geometry();
        let mut layer = Canvas::new(480, 480);
        render_creature(&mut layer, &g, &calm(), SceneTime(0), &CreatureParams::default());
        assert_eq!(layer.pixel(0, 0).unwrap()[3], 0);
        assert_eq!(layer.pixel(479, 0).unwrap()[3], 0);
    }
}
