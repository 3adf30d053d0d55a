//! Tentacles: fans of dot segments whose number grows with wave height.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;

use super::{roll, with_alpha, Mark, Shape};
use crate::canvas::rgba;
use crate::params::CreatureParams;
use crate::scene::{random, SceneGeometry};
use crate::wave::{InterpolatedParams, SceneTime};

/// Segment count of each tentacle, stable from frame to frame
pub fn tentacle_segment_counts(count: u32, creature: &CreatureParams) -> Vec<u32> {
    let mut rng = random::fixed_stream(creature.tentacle_seed);
    let segments = &creature.tentacle_segments;
    (0..count)
        .map(|_| {
            if segments.is_empty() {
                segments.start
            } else {
                rng.gen_range(segments.clone())
            }
        })
        .collect()
}

/// Tentacle trails fanning out from the lower rim; more tentacles in rougher seas
pub fn tentacle_marks<R: Rng>(
    geometry: &SceneGeometry,
    params: &InterpolatedParams,
    t: SceneTime,
    creature: &CreatureParams,
    sparkle: &mut R,
) -> Vec<Mark> {
    let count = creature.tentacle_count(params.wave_height);
    let mut marks = Vec::new();

    for (k, segments) in tentacle_segment_counts(count, creature).into_iter().enumerate() {
        let fk = k as f32;
        let frac = if count > 1 { fk / (count - 1) as f32 } else { 0.5 };
        let theta = PI * (0.12 + 0.76 * frac);
        let mut tip = geometry.center + geometry.bell_radius * 0.82 * Vec2::new(theta.cos(), theta.sin());
        let last = segments.saturating_sub(1).max(1) as f32;

        for j in 0..segments {
            let fj = j as f32;
            let seg_frac = fj / last;
            let angle = 1.2 * PI + 0.7 * PI * frac + 0.5 * (t.phase(1.0 / 60.0) + fk * 0.3 + fj * 0.2).sin();
            let bend = 0.5 * (fj * 0.5 + t.phase(1.0 / 100.0)).sin();
            let length = geometry.px(60.0 + 32.0 * seg_frac + 18.0 * (fj * 0.7 + t.phase(1.0 / 80.0)).sin());
            let next = tip + length * Vec2::new((angle + bend).cos(), (angle + bend).sin());

            let size = geometry.radius(2.0 + 2.5 * (1.0 - seg_frac) + 1.5 * (fj * 0.7 + t.phase(1.0 / 90.0)).sin());
            let blue = (190.0 + 50.0 * (1.0 - seg_frac)).trunc();
            let white = (180.0 - 90.0 * seg_frac).trunc();
            let purple = (150.0 + 90.0 * (seg_frac * 5.0 + t.phase(1.0 / 60.0) + fk * 0.4 + fj * 0.15).sin()).trunc();
            let alpha = (120.0 - 110.0 * seg_frac).trunc();

            let mut color = rgba(
                white * 0.20 + purple * 0.55 + blue * 0.25,
                white * 0.15 + purple * 0.40 + blue * 0.25,
                blue * 0.80 + purple * 0.20,
                alpha,
            );
            if roll(sparkle, 0.035 * (1.0 - seg_frac) + 0.006) {
                color = rgba(240.0, 240.0, 255.0, alpha + 50.0);
            }
            marks.push(Mark::mirrored(
                Shape::Dot {
                    center: next,
                    radius: size,
                },
                color,
            ));

            if roll(sparkle, 0.5) {
                let fade = (60.0 - 55.0 * seg_frac).trunc();
                marks.push(Mark::mirrored(Shape::Line { from: tip, to: next }, with_alpha(color, fade)));
            }
            tip = next;
        }
    }

    marks
}
