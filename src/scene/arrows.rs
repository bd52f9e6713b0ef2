//! Floor arrows that stream toward the viewer as the camera advances.
//!
//! Arrows are seeded every [`ARROW_SPACING`] units and re-expressed relative to
//! `camera_depth mod ARROW_SPACING`, so the set never runs out: an arrow that
//! passes the camera is replaced by one entering at the far end.

use glam::Vec2;

use crate::core::draw::{DrawOp, Paint};
use crate::core::timer::{ease_in_out, Cycle};
use crate::math::Projection;

pub const ARROW_COUNT: usize = 10;
pub const ARROW_SPACING: f32 = 4.0;
const ARROW_OFFSET: f32 = 2.0;
const MIN_DEPTH: f32 = 1.0;
const MIN_SCALE: f32 = 0.01;
const TIP_LENGTH: f32 = 0.8;
const BASE_HALF_WIDTH: f32 = 0.25;
const STROKE_SCALE: f32 = 8.0;

const PULSE_PERIOD: f32 = 3.0;
const PULSE_STAGGER: f32 = 0.3;
const PULSE_GROUPS: usize = 5;
const PULSE_PEAK_OPACITY: f32 = 0.6;

/// One floor marker in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub index: usize,
    pub depth_ahead: f32,
    pub scale: f32,
    /// left base, tip, right base
    pub points: [Vec2; 3],
    pub stroke_width: f32,
}

/// Animated look of an arrow at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPulse {
    pub opacity: f32,
    pub scale_y: f32,
}

pub fn generate_arrows(projection: &Projection, camera_depth: f32) -> Vec<Arrow> {
    let offset = camera_depth.rem_euclid(ARROW_SPACING);

    (0..ARROW_COUNT)
        .filter_map(|index| {
            let depth_ahead = index as f32 * ARROW_SPACING + ARROW_OFFSET - offset;
            if depth_ahead < MIN_DEPTH {
                return None;
            }

            let scale = projection.scale(depth_ahead);
            if scale < MIN_SCALE {
                return None;
            }

            let tip = projection.project(depth_ahead + TIP_LENGTH, 0.0, 1.0);
            let left = projection.project(depth_ahead, -BASE_HALF_WIDTH, 1.0);
            let right = projection.project(depth_ahead, BASE_HALF_WIDTH, 1.0);

            Some(Arrow {
                index,
                depth_ahead,
                scale,
                points: [left, tip, right],
                stroke_width: (STROKE_SCALE * scale).max(1.0),
            })
        })
        .collect()
}

/// Pulse state `elapsed` seconds after the arrows were last re-seeded
pub fn pulse(index: usize, elapsed: f32) -> ArrowPulse {
    let cycle = Cycle::delayed(PULSE_PERIOD, (index % PULSE_GROUPS) as f32 * PULSE_STAGGER);
    match cycle.phase(elapsed) {
        None => ArrowPulse { opacity: 0.0, scale_y: 0.8 },
        Some(phase) => {
            let t = ease_in_out(phase);
            let rise = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
            ArrowPulse {
                opacity: PULSE_PEAK_OPACITY * ease_in_out(rise),
                scale_y: 0.8 + 0.4 * t,
            }
        }
    }
}

/// Stretch the arrow vertically around its lowest point
fn stretch(points: [Vec2; 3], scale_y: f32) -> [Vec2; 3] {
    let base_y = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    points.map(|p| Vec2::new(p.x, base_y + (p.y - base_y) * scale_y))
}

pub fn arrow_op(arrow: &Arrow, pulse: ArrowPulse, line_color: &str) -> DrawOp {
    DrawOp::Polyline {
        points: stretch(arrow.points, pulse.scale_y).to_vec(),
        paint: Paint::stroke(line_color, arrow.stroke_width).with_opacity(pulse.opacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SceneSettings, Viewport};

    fn projection(num_segments: u32) -> Projection {
        let settings = SceneSettings {
            num_segments,
            perspective_strength: 1.0,
            ..SceneSettings::default()
        };
        Projection::new(&settings, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn arrows_seeded_every_four_units() {
        let arrows = generate_arrows(&projection(40), 0.0);
        let depths: Vec<f32> = arrows.iter().map(|a| a.depth_ahead).collect();
        assert_eq!(depths, vec![2.0, 6.0, 10.0, 14.0, 18.0, 22.0, 26.0, 30.0, 34.0, 38.0]);
    }

    #[test]
    fn arrows_too_close_are_skipped() {
        // offset 1.5 -> first arrow at 0.5
        let arrows = generate_arrows(&projection(40), 1.5);
        assert_eq!(arrows[0].index, 1);
        assert!(arrows.iter().all(|a| a.depth_ahead >= 1.0));
    }

    #[test]
    fn arrows_past_far_end_are_skipped() {
        let arrows = generate_arrows(&projection(10), 0.0);
        assert!(arrows.iter().all(|a| a.scale >= 0.01));
        assert!(arrows.iter().all(|a| a.depth_ahead < 10.0));
    }

    #[test]
    fn tip_points_toward_vanishing_point() {
        let p = projection(40);
        for arrow in generate_arrows(&p, 0.0) {
            let [left, tip, right] = arrow.points;
            assert!(tip.y < left.y);
            assert_eq!(left.y, right.y);
            assert!((tip.x - p.vanishing_point().x).abs() < 1e-3);
        }
    }

    #[test]
    fn stroke_width_has_floor() {
        for arrow in generate_arrows(&projection(40), 0.0) {
            assert!(arrow.stroke_width >= 1.0);
        }
    }

    #[test]
    fn pulse_waits_for_stagger() {
        let p = pulse(3, 0.5); // delay 0.9
        assert_eq!(p.opacity, 0.0);

        let p = pulse(0, 1.5); // mid cycle
        assert!((p.opacity - 0.6).abs() < 1e-5);
        assert!((p.scale_y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn pulse_repeats() {
        let (a, b) = (pulse(7, 1.0), pulse(7, 4.0));
        assert!((a.opacity - b.opacity).abs() < 1e-4);
        assert!((a.scale_y - b.scale_y).abs() < 1e-4);
    }

    #[test]
    fn stretch_keeps_base() {
        let points = [Vec2::new(0.0, 10.0), Vec2::new(5.0, 0.0), Vec2::new(10.0, 10.0)];
        let stretched = stretch(points, 1.2);
        assert_eq!(stretched[0], points[0]);
        assert_eq!(stretched[2], points[2]);
        assert!((stretched[1].y - -2.0).abs() < 1e-5);
    }
}
