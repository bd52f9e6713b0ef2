use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;

use corridor_view::cli::Cli;
use corridor_view::config::load_scene;
use corridor_view::generator::{corridor_settings, route_for_destination, START_ID};
use corridor_view::svg::to_svg;
use corridor_view::{SceneController, SceneSettings, Viewport};

// === Constants ===

/// Animation step used when advancing `--time`
const FRAME_DELTA: f32 = 1.0 / 60.0;

fn build_scene(cli: &Cli) -> Result<SceneSettings> {
    if let Some(path) = &cli.scene {
        return load_scene(path);
    }

    let route = match &cli.destination {
        Some(destination) => route_for_destination(destination),
        None => vec![START_ID.to_string()],
    };
    info!("route: {}", route.join(" -> "));
    Ok(corridor_settings(
        &cli.corridor,
        cli.destination.as_deref(),
        &route,
    ))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = build_scene(&cli)?;
    let viewport = Viewport::new(cli.width, cli.height);

    let navigated = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&navigated);
    let mut controller = SceneController::new(
        settings,
        viewport,
        Box::new(move |id: &str| sink.borrow_mut().push(id.to_string())),
    );

    controller.set_depth(cli.depth);
    if let Some(point) = cli.hover {
        controller.pointer_move(point);
    }
    if let Some(door) = &cli.click {
        if !controller.click_door(door) {
            warn!("door {door} is not clickable at depth {}", controller.depth());
        }
    }

    let mut remaining = cli.time.max(0.0);
    while remaining > 0.0 {
        let delta = remaining.min(FRAME_DELTA);
        controller.tick(delta);
        remaining -= delta;
    }

    for id in navigated.borrow().iter() {
        info!("navigation requested: {id}");
    }

    let svg = to_svg(&controller.render(), controller.viewport());
    match &cli.out {
        Some(path) => {
            std::fs::write(path, svg).with_context(|| format!("Failed to write {:?}", path))?;
            info!("wrote {:?}", path);
        }
        None => print!("{svg}"),
    }
    Ok(())
}
