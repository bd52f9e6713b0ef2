use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::types::SceneSettings;

/// Loads a scene description from a JSON file
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneSettings> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {:?}", path))?;

    let settings =
        parse_scene(&json).with_context(|| format!("Failed to load scene file: {:?}", path))?;
    info!("loaded scene {} from {:?}", settings.id, path);
    Ok(settings)
}

/// Parses a scene description; questionable values are logged, not rejected
pub fn parse_scene(json: &str) -> Result<SceneSettings> {
    let settings: SceneSettings =
        serde_json::from_str(json).context("Invalid scene description")?;

    for problem in check_scene(&settings) {
        warn!("scene {}: {}", settings.id, problem);
    }
    Ok(settings)
}

/// Serializes a scene back to pretty JSON
pub fn scene_to_json(settings: &SceneSettings) -> Result<String> {
    serde_json::to_string_pretty(settings).context("Failed to serialize scene")
}

/// Precondition violations the renderer tolerates but the author should fix
pub fn check_scene(settings: &SceneSettings) -> Vec<String> {
    let mut problems = Vec::new();

    if settings.num_segments < 2 {
        problems.push(format!(
            "numSegments is {}, corridors need at least 2",
            settings.num_segments
        ));
    }

    let strength = settings.perspective_strength;
    if strength.is_nan() || strength <= 0.0 {
        problems.push(format!(
            "perspectiveStrength should be positive, got {}",
            strength
        ));
    }

    let mut seen = HashSet::new();
    for door in &settings.doors {
        if !seen.insert(door.id.as_str()) {
            problems.push(format!("duplicate door id {:?}", door.id));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    const SCENE: &str = r#"{
        "id": "Wing C",
        "vanishingPointX": 0.5,
        "vanishingPointY": 0.45,
        "corridorWidth": 0.8,
        "corridorHeight": 0.9,
        "numSegments": 40,
        "perspectiveStrength": 1.5,
        "lineColor": "hsl(120, 100%, 70%)",
        "doors": [
            { "id": "Room 204", "position": 12, "side": "left", "isPath": true,
              "description": "This seems to be the right way." },
            { "id": "Hall B", "position": 7.5, "side": "right" }
        ]
    }"#;

    #[test]
    fn parses_camel_case_scene() {
        let settings = parse_scene(SCENE).unwrap();
        assert_eq!(settings.id, "Wing C");
        assert_eq!(settings.vanishing_point_y, 0.45);
        assert_eq!(settings.num_segments, 40);
        assert_eq!(settings.doors.len(), 2);

        let room = settings.door("Room 204").unwrap();
        assert!(room.is_path);
        assert_eq!(room.side, Side::Left);

        let hall = settings.door("Hall B").unwrap();
        assert!(!hall.is_path, "isPath defaults to false");
        assert_eq!(hall.description, None);
        assert_eq!(hall.position, 7.5);
    }

    #[test]
    fn round_trips_through_json() {
        let settings = parse_scene(SCENE).unwrap();
        let json = scene_to_json(&settings).unwrap();
        assert!(json.contains("\"vanishingPointX\""));
        assert!(json.contains("\"isPath\""));
        assert_eq!(parse_scene(&json).unwrap(), settings);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_scene("{ \"id\": 3 }").unwrap_err();
        assert!(err.to_string().contains("Invalid scene description"));
    }

    #[test]
    fn rejects_unknown_side() {
        let json = SCENE.replace("\"right\"", "\"up\"");
        assert!(parse_scene(&json).is_err());
    }

    #[test]
    fn flags_precondition_violations() {
        let mut settings = parse_scene(SCENE).unwrap();
        assert!(check_scene(&settings).is_empty());

        settings.num_segments = 1;
        settings.perspective_strength = 0.0;
        settings.doors[1].id = "Room 204".into();
        let problems = check_scene(&settings);
        assert_eq!(problems.len(), 3);
        assert!(problems[2].contains("Room 204"));
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_scene("/nonexistent/scene.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read scene file"));
    }
}
