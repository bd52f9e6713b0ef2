use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which wall a door is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Normalized lateral coordinate of the wall
    pub const fn lateral(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Door attached to a corridor segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Unique within the scene, also the navigation target
    pub id: String,
    /// Depth index along the corridor
    pub position: f32,
    pub side: Side,
    /// Part of the highlighted route (cosmetic only)
    #[serde(default)]
    pub is_path: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Door {
    pub fn new(id: impl Into<String>, position: f32, side: Side) -> Self {
        Self {
            id: id.into(),
            position,
            side,
            is_path: false,
            description: None,
        }
    }

    pub fn on_path(mut self, is_path: bool) -> Self {
        self.is_path = is_path;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Tooltip text shown on hover
    pub fn tooltip_text(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Door to {}", self.id))
    }
}

/// Immutable per-scene parameters supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    pub id: String,
    #[serde(rename = "vanishingPointX")]
    pub vanishing_point_x: f32,
    #[serde(rename = "vanishingPointY")]
    pub vanishing_point_y: f32,
    pub corridor_width: f32,
    pub corridor_height: f32,
    pub num_segments: u32,
    pub perspective_strength: f32,
    pub line_color: String,
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl SceneSettings {
    /// Vanishing point as viewport fractions
    pub fn vanishing_point(&self) -> Vec2 {
        Vec2::new(self.vanishing_point_x, self.vanishing_point_y)
    }

    pub fn segments(&self) -> f32 {
        self.num_segments as f32
    }

    /// Largest camera depth the controller allows
    pub fn max_depth(&self) -> f32 {
        (self.segments() - 2.0).max(0.0)
    }

    pub fn door(&self, id: &str) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            id: "START-0".to_string(),
            vanishing_point_x: 0.5,
            vanishing_point_y: 0.5,
            corridor_width: 0.8,
            corridor_height: 0.9,
            num_segments: 40,
            perspective_strength: 1.5,
            line_color: "#00e5ff".to_string(),
            doors: Vec::new(),
        }
    }
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp a point so it stays inside the viewport
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::ZERO, self.size().max(Vec2::ZERO))
    }
}
