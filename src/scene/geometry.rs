use glam::Vec2;

use crate::core::draw::{DrawOp, Paint};
use crate::math::Projection;
use crate::types::Viewport;

/// Frames closer than this are skipped
pub const NEAR_CLIP: f32 = 0.1;

pub const CEILING_COLOR: &str = "#282828";
pub const FLOOR_COLOR: &str = "#202020";
pub const WALL_COLOR: &str = "#1a1a1a";

const FRAME_STROKE_WIDTH: f32 = 1.5;

/// Background planes running from the viewport edges to the far end
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub ceiling: [Vec2; 4],
    pub floor: [Vec2; 4],
    pub left_wall: [Vec2; 4],
    pub right_wall: [Vec2; 4],
}

/// Cross-section outline at one integer depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub segment: u32,
    pub depth_ahead: f32,
    /// top-left, top-right, bottom-right, bottom-left
    pub corners: [Vec2; 4],
    pub opacity: f32,
}

/// Corners of the cross-section at `depth_ahead`: tl, tr, br, bl
fn cross_section(projection: &Projection, depth_ahead: f32) -> [Vec2; 4] {
    [
        projection.project(depth_ahead, -1.0, -1.0),
        projection.project(depth_ahead, 1.0, -1.0),
        projection.project(depth_ahead, 1.0, 1.0),
        projection.project(depth_ahead, -1.0, 1.0),
    ]
}

pub fn background(projection: &Projection, viewport: Viewport, camera_depth: f32) -> Background {
    let (w, h) = (viewport.width, viewport.height);
    let [far_tl, far_tr, far_br, far_bl] =
        cross_section(projection, projection.num_segments() - camera_depth);

    Background {
        ceiling: [Vec2::new(0.0, 0.0), Vec2::new(w, 0.0), far_tr, far_tl],
        floor: [Vec2::new(0.0, h), Vec2::new(w, h), far_br, far_bl],
        left_wall: [Vec2::new(0.0, 0.0), Vec2::new(0.0, h), far_bl, far_tl],
        right_wall: [Vec2::new(w, 0.0), Vec2::new(w, h), far_br, far_tr],
    }
}

/// Nested frame outlines, one per segment that is still ahead of the camera
pub fn frames(projection: &Projection, camera_depth: f32) -> Vec<Frame> {
    let n = projection.num_segments();
    (0..n.max(0.0) as u32)
        .filter_map(|i| {
            let depth_ahead = n - i as f32 - camera_depth;
            if depth_ahead <= NEAR_CLIP {
                return None;
            }
            Some(Frame {
                segment: i,
                depth_ahead,
                corners: cross_section(projection, depth_ahead),
                opacity: (1.0 - depth_ahead / n) * 0.5,
            })
        })
        .collect()
}

pub fn background_ops(background: &Background) -> impl Iterator<Item = DrawOp> {
    [
        (background.ceiling, CEILING_COLOR),
        (background.floor, FLOOR_COLOR),
        (background.left_wall, WALL_COLOR),
        (background.right_wall, WALL_COLOR),
    ]
    .into_iter()
    .map(|(quad, color)| DrawOp::Polygon {
        points: quad.to_vec(),
        paint: Paint::fill(color),
    })
}

pub fn frame_ops<'a>(frames: &'a [Frame], line_color: &'a str) -> impl Iterator<Item = DrawOp> + 'a {
    frames.iter().map(move |frame| DrawOp::Polygon {
        points: frame.corners.to_vec(),
        paint: Paint::stroke(line_color, FRAME_STROKE_WIDTH).with_opacity(frame.opacity),
    })
}
