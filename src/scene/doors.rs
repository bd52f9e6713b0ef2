//! Door geometry, styling and hover/click interaction.
//!
//! A door is a quad on the left or right wall spanning one segment of depth,
//! with a sign above it carrying the door id. Only doors inside the
//! visibility window get geometry; everything else is omitted, which also
//! absorbs doors positioned outside the corridor.

use glam::Vec2;
use log::debug;

use crate::core::draw::{centroid, contains_point, DrawOp, Paint};
use crate::core::timer::{ease_out, Countdown, Cycle};
use crate::math::Projection;
use crate::types::{Door, Viewport};

/// Vertical coordinate of the door top (door covers the lower 70%)
pub const DOOR_TOP: f32 = 0.3;
pub const DOOR_BOTTOM: f32 = 1.0;
const SIGN_MARGIN: f32 = 0.05;
const SIGN_HEIGHT: f32 = 0.2;

const LABEL_BASE_SIZE: f32 = 30.0;
const LABEL_MIN_SIZE: f32 = 4.0;
const LABEL_EXPONENT: f32 = 0.5;
const LABEL_COLOR: &str = "#000";
const SIGN_OPACITY: f32 = 0.9;

const TOOLTIP_OFFSET: f32 = 10.0;

pub const WOOD_FILL: &str = "#5D4037";
pub const WOOD_STROKE: &str = "#3E2723";
const FRAME_WIDTH: f32 = 2.0;
const HOVER_FRAME_WIDTH: f32 = 4.0;
const PATH_FILL_OPACITY: f32 = 0.2;
const HOVER_GLOW_OPACITY: f32 = 0.8;
const GLOW_CYCLE: Cycle = Cycle::new(2.0);
const GLOW_LOW: f32 = 0.6;
const GLOW_HIGH: f32 = 1.0;

const CLICK_RADIUS: f32 = 10.0;
pub const CLICK_EFFECT_DURATION: f32 = 0.5;
const CLICK_END_SCALE: f32 = 1.5;
pub const NAVIGATE_DELAY: f32 = 0.1;

/// Door is eligible for rendering and interaction
pub fn is_visible(door: &Door, camera_depth: f32, num_segments: f32) -> bool {
    let depth_ahead = door.position - camera_depth;
    depth_ahead > 0.5 && depth_ahead < num_segments - 2.0
}

/// Screen-space geometry of one visible door
#[derive(Debug, Clone, PartialEq)]
pub struct DoorGeometry {
    pub id: String,
    /// leading bottom, leading top, trailing top, trailing bottom
    pub quad: [Vec2; 4],
    /// Same corner order as `quad`
    pub sign: [Vec2; 4],
    pub label_position: Vec2,
    pub font_size: f32,
}

impl DoorGeometry {
    pub fn centroid(&self) -> Vec2 {
        centroid(&self.quad)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        contains_point(&self.quad, point)
    }

    /// Tooltip anchor just above the door's top edge
    pub fn tooltip_anchor(&self) -> Vec2 {
        Vec2::new(self.centroid().x, self.quad[1].y - TOOLTIP_OFFSET)
    }
}

fn wall_quad(projection: &Projection, lateral: f32, leading: f32, top: f32, bottom: f32) -> [Vec2; 4] {
    let trailing = leading - 1.0;
    [
        projection.project(leading, lateral, bottom),
        projection.project(leading, lateral, top),
        projection.project(trailing, lateral, top),
        projection.project(trailing, lateral, bottom),
    ]
}

pub fn door_geometry(projection: &Projection, door: &Door, camera_depth: f32) -> DoorGeometry {
    let lateral = door.side.lateral();
    let leading = door.position - camera_depth;

    let quad = wall_quad(projection, lateral, leading, DOOR_TOP, DOOR_BOTTOM);

    let sign_bottom = DOOR_TOP - SIGN_MARGIN;
    let sign = wall_quad(projection, lateral, leading, sign_bottom - SIGN_HEIGHT, sign_bottom);
    let label_position = Vec2::new((sign[0].x + sign[2].x) / 2.0, (sign[1].y + sign[3].y) / 2.0);

    // dampened so far labels stay legible
    let label_scale = projection.scale(leading).powf(LABEL_EXPONENT);
    let font_size = (LABEL_BASE_SIZE * label_scale).max(LABEL_MIN_SIZE);

    DoorGeometry {
        id: door.id.clone(),
        quad,
        sign,
        label_position,
        font_size,
    }
}

/// Visible doors paired with their geometry, in draw order
pub fn visible_doors<'a>(
    projection: &Projection,
    doors: &'a [Door],
    camera_depth: f32,
) -> Vec<(&'a Door, DoorGeometry)> {
    doors
        .iter()
        .filter(|door| is_visible(door, camera_depth, projection.num_segments()))
        .map(|door| (door, door_geometry(projection, door, camera_depth)))
        .collect()
}

/// Topmost door under `point`; later doors are drawn over earlier ones
pub fn hit_test<'a>(
    doors: &'a [(&'a Door, DoorGeometry)],
    point: Vec2,
) -> Option<&'a (&'a Door, DoorGeometry)> {
    doors.iter().rev().find(|(_, geometry)| geometry.contains(point))
}

/// Per-door render state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Normal,
    OnPath,
    Hovered { on_path: bool },
    Clicked { on_path: bool },
}

impl DoorState {
    pub fn resolve(door: &Door, hovered: bool, clicked: bool) -> Self {
        let on_path = door.is_path;
        match (clicked, hovered, on_path) {
            (true, _, _) => DoorState::Clicked { on_path },
            (false, true, _) => DoorState::Hovered { on_path },
            (false, false, true) => DoorState::OnPath,
            (false, false, false) => DoorState::Normal,
        }
    }

    pub fn on_path(self) -> bool {
        match self {
            DoorState::Normal => false,
            DoorState::OnPath => true,
            DoorState::Hovered { on_path } | DoorState::Clicked { on_path } => on_path,
        }
    }
}

/// Resolved colors and effects for one door
#[derive(Debug, Clone, PartialEq)]
pub struct DoorStyle {
    pub fill: String,
    pub fill_opacity: f32,
    pub stroke: String,
    pub stroke_width: f32,
    /// Opacity of the glow overlay, 0 when absent
    pub glow_opacity: f32,
    /// Glow overlay goes through the blur filter
    pub blur: bool,
}

/// Style for a door state; `elapsed` drives the on-path glow pulse
pub fn door_style(state: DoorState, line_color: &str, elapsed: f32) -> DoorStyle {
    let on_path = state.on_path();
    let (fill, fill_opacity) = if on_path {
        (line_color.to_string(), PATH_FILL_OPACITY)
    } else {
        (WOOD_FILL.to_string(), 1.0)
    };

    match state {
        DoorState::Normal => DoorStyle {
            fill,
            fill_opacity,
            stroke: WOOD_STROKE.to_string(),
            stroke_width: FRAME_WIDTH,
            glow_opacity: 0.0,
            blur: false,
        },
        DoorState::OnPath => DoorStyle {
            fill,
            fill_opacity,
            stroke: line_color.to_string(),
            stroke_width: FRAME_WIDTH,
            glow_opacity: GLOW_CYCLE.oscillate(elapsed, GLOW_LOW, GLOW_HIGH),
            blur: true,
        },
        DoorState::Hovered { .. } | DoorState::Clicked { .. } => DoorStyle {
            fill,
            fill_opacity,
            stroke: line_color.to_string(),
            stroke_width: HOVER_FRAME_WIDTH,
            glow_opacity: HOVER_GLOW_OPACITY,
            blur: on_path,
        },
    }
}

/// Expanding circle played on the clicked door
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEffect {
    pub center: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl ClickEffect {
    pub fn at(center: Vec2, progress: f32) -> Self {
        let t = ease_out(progress);
        Self {
            center,
            scale: 1.0 + (CLICK_END_SCALE - 1.0) * t,
            opacity: 1.0 - t,
        }
    }
}

pub fn door_ops(
    geometry: &DoorGeometry,
    style: &DoorStyle,
    line_color: &str,
    effect: Option<ClickEffect>,
) -> Vec<DrawOp> {
    let mut ops = vec![
        DrawOp::Polygon {
            points: geometry.sign.to_vec(),
            paint: Paint::fill(line_color).with_opacity(SIGN_OPACITY),
        },
        DrawOp::Text {
            position: geometry.label_position,
            text: geometry.id.clone(),
            font_size: geometry.font_size,
            color: LABEL_COLOR.to_string(),
        },
        DrawOp::Polygon {
            points: geometry.quad.to_vec(),
            paint: Paint::fill(style.fill.as_str()).with_opacity(style.fill_opacity),
        },
        DrawOp::Polygon {
            points: geometry.quad.to_vec(),
            paint: Paint::stroke(style.stroke.as_str(), style.stroke_width),
        },
    ];

    if style.glow_opacity > 0.0 {
        ops.push(DrawOp::Polygon {
            points: geometry.quad.to_vec(),
            paint: Paint::fill(line_color)
                .with_opacity(style.glow_opacity)
                .with_glow(style.blur),
        });
    }

    if let Some(effect) = effect {
        ops.push(DrawOp::Circle {
            center: effect.center,
            radius: CLICK_RADIUS,
            scale: effect.scale,
            paint: Paint::fill(line_color).with_opacity(effect.opacity),
        });
    }

    ops
}

/// Hovered door and where its tooltip sits
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub door_id: String,
    pub description: String,
    pub anchor: Vec2,
}

/// Clicked door playing its dismissal effect
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub door_id: String,
    generation: u64,
    effect: Countdown,
    navigate: Countdown,
}

impl Click {
    pub fn progress(&self) -> f32 {
        self.effect.progress()
    }

    pub fn navigation_pending(&self) -> bool {
        self.navigate.is_active()
    }
}

/// Ephemeral hover/click state for one scene
#[derive(Debug, Clone, Default)]
pub struct DoorInteraction {
    hovered: Option<Hover>,
    clicked: Option<Click>,
    generation: u64,
}

impl DoorInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&Hover> {
        self.hovered.as_ref()
    }

    pub fn clicked(&self) -> Option<&Click> {
        self.clicked.as_ref()
    }

    pub fn clicked_id(&self) -> Option<&str> {
        self.clicked.as_ref().map(|c| c.door_id.as_str())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record the hovered door; the tooltip anchor is kept inside the viewport
    pub fn hover(&mut self, door: &Door, geometry: &DoorGeometry, viewport: Viewport) {
        if self.hovered.as_ref().is_some_and(|h| h.door_id == door.id) {
            if let Some(hover) = self.hovered.as_mut() {
                hover.anchor = viewport.clamp(geometry.tooltip_anchor());
            }
            return;
        }
        debug!("hover door {}", door.id);
        self.hovered = Some(Hover {
            door_id: door.id.clone(),
            description: door.tooltip_text(),
            anchor: viewport.clamp(geometry.tooltip_anchor()),
        });
    }

    pub fn clear_hover(&mut self) {
        if let Some(hover) = self.hovered.take() {
            debug!("leave door {}", hover.door_id);
        }
    }

    /// Start the dismissal effect; ignored while another navigation is pending
    pub fn click(&mut self, door_id: &str) -> bool {
        if self.clicked.as_ref().is_some_and(Click::navigation_pending) {
            debug!("ignoring click on {door_id}: navigation already pending");
            return false;
        }
        debug!("click door {door_id}");
        self.clicked = Some(Click {
            door_id: door_id.to_string(),
            generation: self.generation,
            effect: Countdown::started(CLICK_EFFECT_DURATION),
            navigate: Countdown::started(NAVIGATE_DELAY),
        });
        true
    }

    /// Advance click timers; returns the door to navigate to once its delay elapses
    pub fn tick(&mut self, delta: f32) -> Option<String> {
        let generation = self.generation;
        let click = self.clicked.as_mut()?;
        click.effect.tick(delta);
        if click.navigate.tick(delta) && click.generation == generation {
            return Some(click.door_id.clone());
        }
        None
    }

    /// Drop all interaction state and invalidate pending navigation
    pub fn reset(&mut self) {
        self.hovered = None;
        self.clicked = None;
        self.generation = self.generation.wrapping_add(1);
    }
}
