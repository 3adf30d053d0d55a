//! Bell: stacked dotted contours forming the dome, plus fixed detail lines across it.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;

use super::{roll, Mark, Shape};
use crate::canvas::rgba;
use crate::params::CreatureParams;
use crate::scene::SceneGeometry;
use crate::wave::SceneTime;

/// Dome of concentric dot contours, icy at the rim and deep blue inside
pub fn bell_marks<R: Rng>(
    geometry: &SceneGeometry,
    t: SceneTime,
    creature: &CreatureParams,
    sparkle: &mut R,
) -> Vec<Mark> {
    let center = geometry.center;
    let layers = creature.bell_layers;
    let last = layers.saturating_sub(1).max(1) as f32;
    let mut marks = Vec::new();

    for layer in 0..layers {
        let frac = layer as f32 / last;
        let radius = geometry.bell_radius * (1.0 - 0.18 * frac);
        let dots = (creature.bell_edge_dots as f32 * (1.0 - 0.7 * frac) + 40.0).trunc() as u32;

        let blue = (200.0 + 55.0 * (1.0 - frac)).trunc();
        let white = (220.0 - 110.0 * frac).trunc();
        let cyan = (200.0 + 40.0 * (frac * 3.0 + t.phase(1.0 / 220.0)).sin()).trunc();
        let alpha = (100.0 - 55.0 * frac).trunc();

        for i in 0..dots {
            let theta = -PI * (i as f32 / dots as f32) * (1.08 - 0.12 * frac)
                - 0.08 * (t.phase(1.0 / 80.0) + layer as f32 * 0.2).sin();
            let x = center.x + radius.x * theta.cos() + geometry.px(18.0 * (frac * 2.5 + t.phase(1.0 / 120.0)).sin());
            let mut y = center.y
                + radius.y * theta.sin()
                + geometry.px(18.0 * frac + 12.0 * (theta * 2.0 + t.phase(1.0 / 90.0)).sin());
            if frac > 0.2 && frac < 0.8 {
                y -= geometry.px(18.0 * (4.0 * theta + t.phase(1.0 / 60.0) + frac * 6.0).sin());
            }
            let size = geometry.radius(2.0 + 2.5 * (1.0 - frac) + 1.5 * (theta * 2.0 + t.phase(1.0 / 100.0)).sin());

            let mut color = if frac < 0.18 {
                rgba(210.0, 230.0, 255.0, alpha + 50.0)
            } else if frac > 0.7 {
                rgba(80.0, 150.0, blue + 80.0, alpha)
            } else {
                rgba(
                    white * 0.4 + cyan * 0.1 + blue * 0.05,
                    150.0 + 25.0 * (theta + t.phase(1.0 / 300.0)).cos() + cyan * 0.15,
                    blue * 0.9 + cyan * 0.25 + 40.0,
                    alpha + 25.0,
                )
            };
            let sparkle_chance = if frac < 0.25 {
                0.04
            } else if frac < 0.6 {
                0.02
            } else {
                0.01
            };
            if roll(sparkle, sparkle_chance) {
                color = rgba(245.0, 245.0, 255.0, color[3] as f32 + 70.0);
            }

            marks.push(Mark::mirrored(
                Shape::Dot {
                    center: Vec2::new(x, y),
                    radius: size,
                },
                color,
            ));
        }

        if creature.detail_every > 0 && layer % creature.detail_every == 0 && layer > 0 && layer + 1 < layers {
            detail_lines(&mut marks, center, radius, alpha);
        }
    }

    marks
}

/// Radial spokes and flat chords across the upper dome; symmetric by construction
fn detail_lines(marks: &mut Vec<Mark>, center: Vec2, radius: Vec2, alpha: f32) {
    let spoke = rgba(80.0, 180.0, 255.0, alpha * 0.32);
    for j in 0..12 {
        let phi = PI - j as f32 * PI / 6.0;
        let dir = Vec2::new(phi.cos(), phi.sin());
        marks.push(Mark::single(
            Shape::Line {
                from: center + radius * dir,
                to: center + radius * 0.7 * dir,
            },
            spoke,
        ));
    }

    let chord = rgba(30.0, 100.0, 255.0, alpha * 0.18);
    let span = PI * 1.96 / 8.0;
    let inner = radius * 0.7;
    for j in 0..8 {
        let phi0 = PI * 0.98 - j as f32 * span;
        let phi1 = phi0 - span;
        let y = center.y - (inner.y * ((phi0 + phi1) / 2.0).sin()).abs();
        marks.push(Mark::single(
            Shape::Line {
                from: Vec2::new(center.x + inner.x * phi0.cos(), y),
                to: Vec2::new(center.x + inner.x * phi1.cos(), y),
            },
            chord,
        ));
    }
}
