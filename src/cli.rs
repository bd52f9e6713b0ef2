// cli.rs - Command-line interface configuration
use clap::Parser;
use glam::Vec2;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "corridor-view")]
#[command(about = "Renders one frame of a pseudo-3D corridor to SVG", long_about = None)]
pub struct Cli {
    /// Scene description (JSON) to render
    #[arg(long, conflicts_with = "corridor")]
    pub scene: Option<PathBuf>,

    /// Generate the corridor with this id instead of loading a scene
    #[arg(long, default_value = "START-0")]
    pub corridor: String,

    /// Destination the generated route leads to
    #[arg(long)]
    pub destination: Option<String>,

    /// Camera depth in segments
    #[arg(long, default_value_t = 0.0)]
    pub depth: f32,

    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Seconds of animation to advance before rendering
    #[arg(long, default_value_t = 0.0)]
    pub time: f32,

    /// Pointer position as X,Y
    #[arg(long, value_parser = parse_point)]
    pub hover: Option<Vec2>,

    /// Click the door with this id before advancing time
    #[arg(long)]
    pub click: Option<String>,

    /// Output file; stdout when absent
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Parse an `X,Y` pair
pub fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Vec2::new(x, y))
}
