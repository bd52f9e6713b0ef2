use corridor_view::scene::doors::{is_visible, DoorState};
use corridor_view::{ControllerState, Door, SceneController, SceneSettings, Side, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

type NavigationLog = Rc<RefCell<Vec<String>>>;

/// Scenario scene: ten segments, linear perspective, centered vanishing point
fn scenario(doors: Vec<Door>) -> SceneSettings {
    SceneSettings {
        id: "scenario".into(),
        vanishing_point_x: 0.5,
        vanishing_point_y: 0.5,
        num_segments: 10,
        perspective_strength: 1.0,
        doors,
        ..SceneSettings::default()
    }
}

fn controller(settings: SceneSettings) -> (SceneController, NavigationLog) {
    let log: NavigationLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let controller = SceneController::new(
        settings,
        Viewport::new(800.0, 600.0),
        Box::new(move |id: &str| sink.borrow_mut().push(id.to_string())),
    );
    (controller, log)
}

fn visible_ids(controller: &SceneController) -> Vec<String> {
    controller
        .visible_doors()
        .iter()
        .map(|(door, _)| door.id.clone())
        .collect()
}

// === Visibility window ===

#[cfg(test)]
mod visibility_tests {
    use super::*;

    #[test]
    fn test_window_edges_relative_to_camera() {
        let depth = 3.0;
        let n = 20.0;
        let too_close = Door::new("close", depth + 0.4, Side::Left);
        let near = Door::new("near", depth + 1.0, Side::Left);
        let too_far = Door::new("far", depth + n - 1.0, Side::Right);

        assert!(!is_visible(&too_close, depth, n));
        assert!(is_visible(&near, depth, n));
        assert!(!is_visible(&too_far, depth, n));
    }

    #[test]
    fn test_rendered_door_list_follows_window() {
        let settings = SceneSettings {
            num_segments: 20,
            doors: vec![
                Door::new("close", 3.4, Side::Left),
                Door::new("near", 4.0, Side::Left),
                Door::new("far", 22.0, Side::Right),
            ],
            ..scenario(Vec::new())
        };
        let (mut c, _) = controller(settings);
        c.set_depth(3.0);

        assert_eq!(visible_ids(&c), vec!["near".to_string()]);
        let labels: Vec<String> = c.render().texts().map(str::to_string).collect();
        assert_eq!(labels, vec!["near".to_string()]);
    }

    #[test]
    fn test_doors_outside_corridor_are_ignored() {
        let (c, _) = controller(scenario(vec![
            Door::new("behind", -4.0, Side::Left),
            Door::new("beyond", 40.0, Side::Right),
        ]));
        assert!(visible_ids(&c).is_empty());
    }
}

// === End-to-end scenarios ===

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_left_door_enters_and_leaves_view() {
        let (mut c, _) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));

        c.set_depth(0.0);
        assert_eq!(visible_ids(&c), vec!["A".to_string()]);
        assert!(c.render().texts().any(|t| t == "A"));

        c.set_depth(9.0);
        assert!(visible_ids(&c).is_empty());
        assert!(c.render().texts().all(|t| t != "A"));
    }

    #[test]
    fn test_opposite_doors_are_mirror_images() {
        let (c, _) = controller(scenario(vec![
            Door::new("L", 5.0, Side::Left),
            Door::new("R", 5.0, Side::Right),
        ]));
        let doors = c.visible_doors();
        let left = &doors[0].1;
        let right = &doors[1].1;
        let axis = c.projection().vanishing_point().x;

        for (l, r) in left.quad.iter().zip(&right.quad) {
            assert!((axis - l.x - (r.x - axis)).abs() < 1e-3, "{l} vs {r}");
            assert!((l.y - r.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_path_flag_changes_style_not_geometry() {
        let (mut c, _) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));
        let before = c.visible_doors()[0].1.clone();
        assert!(!c.render().polygons().any(|(_, paint)| paint.glow));

        c.set_scene(scenario(vec![Door::new("A", 5.0, Side::Left).on_path(true)]));
        let after = c.visible_doors()[0].1.clone();

        assert_eq!(before.quad, after.quad);
        assert_eq!(before.sign, after.sign);
        assert!(c.render().polygons().any(|(_, paint)| paint.glow));
        assert_eq!(
            DoorState::resolve(c.visible_doors()[0].0, false, false),
            DoorState::OnPath
        );
    }
}

// === Navigation ===

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn test_scene_change_cancels_pending_navigation() {
        let (mut c, log) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));
        assert!(c.click_door("A"));
        c.tick(0.05);

        c.set_scene(SceneSettings {
            id: "elsewhere".into(),
            ..scenario(vec![Door::new("A", 5.0, Side::Left)])
        });
        c.tick(1.0);

        assert!(log.borrow().is_empty(), "stale navigation fired: {:?}", log.borrow());
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.depth(), 0.0);
    }

    #[test]
    fn test_pointer_click_navigates_once() {
        let (mut c, log) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));
        let center = c.visible_doors()[0].1.centroid();

        assert!(c.pointer_down(center));
        assert!(!c.pointer_down(center), "second click while navigating");
        for _ in 0..60 {
            c.tick(1.0 / 60.0);
        }
        assert_eq!(*log.borrow(), vec!["A".to_string()]);
    }

    #[test]
    fn test_click_effect_drawn_then_removed() {
        let (mut c, _) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));
        let has_circle = |c: &SceneController| {
            c.render()
                .iter()
                .any(|op| matches!(op, corridor_view::DrawOp::Circle { .. }))
        };

        c.click_door("A");
        c.tick(0.2);
        assert!(has_circle(&c));
        c.tick(0.4);
        assert!(!has_circle(&c));
    }

    #[test]
    fn test_click_on_empty_wall_does_nothing() {
        let (mut c, log) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));
        assert!(!c.pointer_down(Vec2::new(400.0, 300.0)));
        c.tick(1.0);
        assert!(log.borrow().is_empty());
    }
}

// === Hover ===

#[cfg(test)]
mod hover_tests {
    use super::*;

    #[test]
    fn test_tooltip_uses_description() {
        let door = Door::new("Hall B", 5.0, Side::Right).with_description("Leads to Hall B.");
        let (mut c, _) = controller(scenario(vec![door]));
        let center = c.visible_doors()[0].1.centroid();

        c.pointer_move(center);
        let list = c.render();
        let (anchor, text) = list.tooltip().expect("tooltip while hovering");
        assert_eq!(text, "Leads to Hall B.");
        assert!(anchor.x >= 0.0 && anchor.x <= 800.0);
        assert!(anchor.y >= 0.0 && anchor.y <= 600.0);
        assert!(matches!(list.ops().last(), Some(corridor_view::DrawOp::Tooltip { .. })));
    }

    #[test]
    fn test_hover_follows_camera() {
        let (mut c, _) = controller(scenario(vec![Door::new("A", 5.0, Side::Left)]));
        let center = c.visible_doors()[0].1.centroid();
        c.pointer_move(center);
        assert!(c.interaction().hovered().is_some());

        c.step_forward();
        c.step_forward();
        c.step_forward();
        c.step_forward();
        c.step_forward();
        assert!(c.interaction().hovered().is_none());
    }
}
