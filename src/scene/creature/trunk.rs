//! Trunk: an S-curved column of dots hanging from the bell, with afterimage streaks.

use glam::Vec2;
use rand::Rng;

use super::{roll, with_alpha, Mark, Shape};
use crate::canvas::rgba;
use crate::params::CreatureParams;
use crate::scene::SceneGeometry;
use crate::wave::SceneTime;

/// S-curved trunk hanging from the bell, dotted with misty afterimage lines
pub fn trunk_marks<R: Rng>(
    geometry: &SceneGeometry,
    t: SceneTime,
    creature: &CreatureParams,
    sparkle: &mut R,
) -> Vec<Mark> {
    let count = creature.trunk_points;
    let last = count.saturating_sub(1).max(1) as f32;
    let base = Vec2::new(geometry.center.x, geometry.center.y + geometry.bell_radius.y * 0.98);
    let mut marks = Vec::with_capacity(count as usize * 2);
    let mut previous: Option<Vec2> = None;

    for i in 0..count {
        let fi = i as f32;
        let frac = fi / last;
        let dx = 60.0 * (frac * 2.5 + t.phase(1.0 / 60.0)).sin() + 40.0 * (frac * 4.0 + t.phase(1.0 / 90.0)).sin();
        let dy = 80.0 * (frac * 2.5 + t.phase(1.0 / 80.0)).sin() + 30.0 * (frac * 5.0 + t.phase(1.0 / 100.0)).sin();
        let point = Vec2::new(
            base.x + geometry.px(dx),
            base.y + geometry.trunk_length * frac * 0.92 + geometry.px(dy),
        );

        let size = geometry.radius(4.0 - 2.5 * frac + 1.5 * (fi * 0.7 + t.phase(1.0 / 80.0)).sin());
        let blue = (210.0 + 40.0 * (1.0 - frac)).trunc();
        let white = (160.0 - 50.0 * frac).trunc();
        let purple = (140.0 + 80.0 * (frac * 3.0 + t.phase(1.0 / 70.0) + fi * 0.05).sin()).trunc();
        let alpha = (180.0 - 150.0 * frac).trunc();

        let mut color = rgba(
            white * 0.25 + purple * 0.50 + blue * 0.25,
            white * 0.20 + purple * 0.35 + blue * 0.25,
            blue * 0.85 + purple * 0.15,
            alpha,
        );
        if roll(sparkle, 0.05 * (1.0 - frac) + 0.01) {
            color = rgba(250.0, 250.0, 255.0, alpha + 40.0);
        }
        marks.push(Mark::mirrored(
            Shape::Dot {
                center: point,
                radius: size,
            },
            color,
        ));

        if let Some(from) = previous {
            if roll(sparkle, 0.7) {
                let fade = (80.0 - 70.0 * frac).trunc();
                marks.push(Mark::mirrored(Shape::Line { from, to: point }, with_alpha(color, fade)));
            }
        }
        previous = Some(point);
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::random;

    #[test]
    fn test_trunk_starts_under_bell_and_hangs_down() {
        let geometry = SceneGeometry::new(1920, 1920, Vec2::new(960.0, 806.0), &CreatureParams::default());
        let marks = trunk_marks(&geometry, SceneTime(0), &CreatureParams::default(), &mut random::fixed_stream(9));
        let dots: Vec<Vec2> = marks
            .iter()
            .filter_map(|m| match m.shape {
                Shape::Dot { center, .. } => Some(center),
                Shape::Line { .. } => None,
            })
            .collect();
        assert_eq!(dots.len(), 90);
        assert!(dots[89].y > dots[0].y + 400.0);
        assert!(marks.iter().all(|m| m.mirrored));
    }

    #[test]
    fn test_afterimages_connect_consecutive_points() {
        let geometry = SceneGeometry::new(960, 960, Vec2::new(480.0, 403.0), &CreatureParams::default());
        let marks = trunk_marks(&geometry, SceneTime(5), &CreatureParams::default(), &mut random::fixed_stream(9));
        let mut last_dot = None;
        for mark in &marks {
            match mark.shape {
                Shape::Dot { center, .. } => last_dot = Some(center),
                Shape::Line { to, .. } => assert_eq!(Some(to), last_dot),
            }
        }
    }
}
