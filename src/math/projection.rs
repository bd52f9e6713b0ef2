use glam::Vec2;

use crate::types::{SceneSettings, Viewport};

/// Smallest depth a feature can have ahead of the camera
pub const DEPTH_EPSILON: f32 = 0.01;

/// Smallest scale the projection will return
const MIN_SCALE: f32 = 1e-30;

/// Corridor-space to screen-space mapping for one scene and viewport.
///
/// Corridor space has three axes: depth ahead of the camera (in segment
/// units), and lateral/vertical offsets normalized to `[-1, 1]` across the
/// corridor's cross-section. The mapping is pure; a `Projection` can be
/// rebuilt every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    vanishing_point: Vec2,
    half_extent: Vec2,
    num_segments: f32,
    perspective_strength: f32,
}

impl Projection {
    pub fn new(settings: &SceneSettings, viewport: Viewport) -> Self {
        let size = viewport.size();
        Self {
            vanishing_point: settings.vanishing_point() * size,
            half_extent: Vec2::new(settings.corridor_width, settings.corridor_height) * size,
            num_segments: settings.segments(),
            perspective_strength: settings.perspective_strength,
        }
    }

    /// Screen position of the vanishing point
    pub fn vanishing_point(&self) -> Vec2 {
        self.vanishing_point
    }

    pub fn num_segments(&self) -> f32 {
        self.num_segments
    }

    /// Shrink factor for a feature `depth_ahead` units in front of the camera.
    ///
    /// Follows `(remaining / num_segments) ^ perspective_strength` where
    /// `remaining` is the distance left between the feature and the far end of
    /// the corridor. The result lies in `(0, 1]` and strictly decreases as the
    /// feature moves away, so distant features converge on the vanishing point.
    pub fn scale(&self, depth_ahead: f32) -> f32 {
        let depth = if depth_ahead > DEPTH_EPSILON {
            depth_ahead
        } else {
            DEPTH_EPSILON
        };
        let remaining = (self.num_segments - depth).max(0.0);
        let ratio = if self.num_segments > 0.0 {
            remaining / self.num_segments
        } else {
            0.0
        };
        let scale = ratio.powf(self.perspective_strength);
        if scale.is_finite() {
            scale.clamp(MIN_SCALE, 1.0)
        } else {
            MIN_SCALE
        }
    }

    /// Project a corridor-space point onto the screen
    pub fn project(&self, depth_ahead: f32, lateral: f32, vertical: f32) -> Vec2 {
        let scale = self.scale(depth_ahead);
        self.vanishing_point + Vec2::new(lateral, vertical) * self.half_extent * scale
    }
}
