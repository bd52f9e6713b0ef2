use glam::Vec2;
use log::{debug, info};

use crate::core::draw::{DrawList, DrawOp};
use crate::core::timer::Stopwatch;
use crate::math::Projection;
use crate::scene::arrows::{arrow_op, generate_arrows, pulse};
use crate::scene::doors::{
    door_ops, door_style, hit_test, visible_doors, ClickEffect, DoorGeometry, DoorInteraction,
    DoorState,
};
use crate::scene::geometry::{background, background_ops, frame_ops, frames};
use crate::types::{Door, SceneSettings, Viewport};

/// Navigation callback, invoked with the clicked door's id
pub type NavigateFn = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// A door was clicked; waiting for the host to swap scenes
    Navigating,
}

/// Owns the camera and interaction state for one corridor view.
///
/// The host feeds it depth changes, pointer events and frame deltas, and
/// calls [`SceneController::render`] whenever it wants a fresh draw list.
/// Nothing here is thread-safe; keep the controller on one task.
pub struct SceneController {
    settings: SceneSettings,
    viewport: Viewport,
    depth: f32,
    interaction: DoorInteraction,
    /// Drives the on-path glow
    clock: Stopwatch,
    /// Time since the motion cues were last re-seeded
    cue_clock: Stopwatch,
    cue_seed: u64,
    pointer: Option<Vec2>,
    state: ControllerState,
    /// The navigation callback already ran for this scene
    navigated: bool,
    on_navigate: NavigateFn,
}

impl SceneController {
    pub fn new(settings: SceneSettings, viewport: Viewport, on_navigate: NavigateFn) -> Self {
        info!(
            "entering scene {} ({} segments, {} doors)",
            settings.id,
            settings.num_segments,
            settings.doors.len()
        );
        Self {
            settings,
            viewport,
            depth: 0.0,
            interaction: DoorInteraction::new(),
            clock: Stopwatch::new(),
            cue_clock: Stopwatch::new(),
            cue_seed: 0,
            pointer: None,
            state: ControllerState::Idle,
            navigated: false,
            on_navigate,
        }
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn interaction(&self) -> &DoorInteraction {
        &self.interaction
    }

    /// Bumped every time the motion cues restart
    pub fn cue_seed(&self) -> u64 {
        self.cue_seed
    }

    pub fn projection(&self) -> Projection {
        Projection::new(&self.settings, self.viewport)
    }

    /// Swap in a scene description.
    ///
    /// A new scene id, or any scene after a navigation has fired, drops the
    /// camera back to the entrance and clears hover, click and any pending
    /// navigation. Otherwise the same id only refreshes the settings, so route
    /// highlighting can change without a reset.
    pub fn set_scene(&mut self, settings: SceneSettings) {
        let entering = self.navigated || settings.id != self.settings.id;
        self.settings = settings;

        if entering {
            info!(
                "entering scene {} ({} segments, {} doors)",
                self.settings.id,
                self.settings.num_segments,
                self.settings.doors.len()
            );
            self.interaction.reset();
            self.state = ControllerState::Idle;
            self.navigated = false;
            self.clock.restart();
            self.apply_depth(0.0);
            self.cue_clock.restart();
        } else {
            self.apply_depth(self.depth);
        }
        self.refresh_hover();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        debug!("resize {width}x{height}");
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        self.refresh_hover();
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.apply_depth(depth);
        self.refresh_hover();
    }

    pub fn step_forward(&mut self) {
        self.set_depth(self.depth + 1.0);
    }

    pub fn step_backward(&mut self) {
        self.set_depth(self.depth - 1.0);
    }

    fn apply_depth(&mut self, depth: f32) {
        let depth = if depth.is_finite() { depth } else { 0.0 };
        let clamped = depth.clamp(0.0, self.settings.max_depth());
        if clamped != self.depth {
            debug!("camera depth {:.2} -> {:.2}", self.depth, clamped);
            self.depth = clamped;
            self.cue_clock.restart();
            self.cue_seed = self.cue_seed.wrapping_add(1);
        }
    }

    /// Visible doors with their current geometry
    pub fn visible_doors(&self) -> Vec<(&Door, DoorGeometry)> {
        visible_doors(&self.projection(), &self.settings.doors, self.depth)
    }

    pub fn pointer_move(&mut self, position: Vec2) {
        self.pointer = Some(position);
        self.refresh_hover();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.interaction.clear_hover();
    }

    /// Click whatever door is under `position`
    pub fn pointer_down(&mut self, position: Vec2) -> bool {
        self.pointer_move(position);
        let projection = self.projection();
        let doors = visible_doors(&projection, &self.settings.doors, self.depth);
        let target = hit_test(&doors, position).map(|(door, _)| door.id.clone());
        match target {
            Some(id) => self.click_door(&id),
            None => false,
        }
    }

    /// Click a door by id; only visible doors respond
    pub fn click_door(&mut self, id: &str) -> bool {
        if self.state == ControllerState::Navigating {
            return false;
        }
        let visible = self
            .visible_doors()
            .iter()
            .any(|(door, _)| door.id == id);
        if !visible {
            debug!("click on hidden or unknown door {id}");
            return false;
        }
        if self.interaction.click(id) {
            self.state = ControllerState::Navigating;
            true
        } else {
            false
        }
    }

    /// Advance animations by `delta` seconds and fire due navigation
    pub fn tick(&mut self, delta: f32) {
        let delta = delta.max(0.0);
        self.clock.tick(delta);
        self.cue_clock.tick(delta);

        if let Some(door_id) = self.interaction.tick(delta) {
            info!("navigating to {door_id}");
            self.navigated = true;
            (self.on_navigate)(&door_id);
        }
    }

    fn refresh_hover(&mut self) {
        let Some(pointer) = self.pointer else {
            return;
        };
        let projection = self.projection();
        let doors = visible_doors(&projection, &self.settings.doors, self.depth);
        match hit_test(&doors, pointer) {
            Some((door, geometry)) => self.interaction.hover(door, geometry, self.viewport),
            None => self.interaction.clear_hover(),
        }
    }

    /// Build this frame's draw list
    pub fn render(&self) -> DrawList {
        let projection = self.projection();
        let line_color = self.settings.line_color.as_str();
        let mut list = DrawList::new();

        let bg = background(&projection, self.viewport, self.depth);
        list.extend(background_ops(&bg));

        let frames = frames(&projection, self.depth);
        list.extend(frame_ops(&frames, line_color));

        let cue_time = self.cue_clock.elapsed();
        list.extend(
            generate_arrows(&projection, self.depth)
                .iter()
                .map(|arrow| arrow_op(arrow, pulse(arrow.index, cue_time), line_color)),
        );

        let hovered = self.interaction.hovered().map(|h| h.door_id.as_str());
        let clicked = self.interaction.clicked();
        let mut tooltip = None;

        for (door, geometry) in visible_doors(&projection, &self.settings.doors, self.depth) {
            let is_hovered = hovered == Some(door.id.as_str());
            let click = clicked.filter(|c| c.door_id == door.id);
            let state = DoorState::resolve(door, is_hovered, click.is_some());
            let style = door_style(state, line_color, self.clock.elapsed());
            let effect = click
                .filter(|c| c.progress() < 1.0)
                .map(|c| ClickEffect::at(geometry.centroid(), c.progress()));

            list.extend(door_ops(&geometry, &style, line_color, effect));

            if is_hovered {
                tooltip = self.interaction.hovered().map(|h| DrawOp::Tooltip {
                    anchor: h.anchor,
                    text: h.description.clone(),
                    color: line_color.to_string(),
                });
            }
        }

        list.extend(tooltip);
        list
    }
}

impl std::fmt::Debug for SceneController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneController")
            .field("scene", &self.settings.id)
            .field("viewport", &self.viewport)
            .field("depth", &self.depth)
            .field("state", &self.state)
            .field("interaction", &self.interaction)
            .finish()
    }
}
