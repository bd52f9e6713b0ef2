//! Deterministic procedural corridors.
//!
//! Every corridor id (plus the active destination) hashes to a seed, so
//! revisiting a corridor always produces the same doors and colors.

use log::debug;

use crate::math::{hsl_to_rgb, rgb_hex};
use crate::types::{Door, SceneSettings, Side};

/// Id of the corridor every route starts from
pub const START_ID: &str = "START-0";

const NUM_SEGMENTS: u32 = 40;
const MIN_DOOR_POSITION: u32 = 5;
const MAX_DOOR_POSITION: u32 = NUM_SEGMENTS - 10;
const MIN_DOOR_SPACING: u32 = 4;

const PREFIXES: [&str; 6] = ["Wing", "Block", "Sector", "Hall", "Section", "Area"];
const LETTERS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Rolling 31-multiplier hash over UTF-16 code units
pub fn string_to_seed(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32)
    })
}

/// Mulberry32 generator yielding floats in [0, 1)
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(string_to_seed(key))
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        (t ^ (t >> 14)) as f64 / 4_294_967_296.0
    }

    /// Uniform integer in [0, n)
    pub fn below(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64).floor() as usize).min(n.saturating_sub(1))
    }

    fn side(&mut self) -> Side {
        if self.next_f64() > 0.5 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Corridor name for a step of a route
pub fn thematic_id(rng: &mut Mulberry32, part: usize) -> String {
    match part {
        0 => "Main Lobby".to_string(),
        1..=3 => {
            let prefix = PREFIXES[rng.below(PREFIXES.len())];
            let letter = LETTERS[rng.below(LETTERS.len())];
            format!("{prefix} {letter}")
        }
        _ => format!("Room {}", rng.below(900) + 100),
    }
}

/// Corridor ids from the start corridor to `destination`
pub fn route_for_destination(destination: &str) -> Vec<String> {
    let mut rng = Mulberry32::from_key(destination);
    let steps = rng.below(3) + 3;

    let mut route = Vec::with_capacity(steps + 2);
    route.push(START_ID.to_string());
    route.extend((1..=steps).map(|part| thematic_id(&mut rng, part)));
    route.push(destination.to_string());
    route
}

/// Pool of door positions that keeps doors apart
struct PositionPool {
    available: Vec<u32>,
}

impl PositionPool {
    fn new() -> Self {
        Self {
            available: (MIN_DOOR_POSITION..=MAX_DOOR_POSITION).collect(),
        }
    }

    fn pick(&mut self, rng: &mut Mulberry32) -> Option<u32> {
        if self.available.is_empty() {
            return None;
        }
        let position = self.available[rng.below(self.available.len())];
        self.available
            .retain(|p| p.abs_diff(position) >= MIN_DOOR_SPACING);
        Some(position)
    }
}

/// Build the scene for corridor `id` while travelling `route` to `destination`
pub fn corridor_settings(id: &str, destination: Option<&str>, route: &[String]) -> SceneSettings {
    let mut rng = Mulberry32::from_key(&format!("{id}{}", destination.unwrap_or("")));
    let is_destination = destination == Some(id);

    let (hue, saturation, lightness) = if is_destination {
        (45.0, 0.9, 0.6)
    } else {
        (rng.below(360) as f32, 1.0, 0.7)
    };
    let line_color = rgb_hex(hsl_to_rgb(hue / 360.0, saturation, lightness));

    let num_doors = rng.below(4) + 2;
    let mut doors: Vec<Door> = Vec::with_capacity(num_doors);
    let mut pool = PositionPool::new();

    let next_step = route
        .iter()
        .position(|step| step == id)
        .and_then(|index| route.get(index + 1));

    if let Some(next) = next_step.filter(|next| next.as_str() != id) {
        if let Some(position) = pool.pick(&mut rng) {
            let side = rng.side();
            doors.push(
                Door::new(next.clone(), position as f32, side)
                    .on_path(true)
                    .with_description("This seems to be the right way."),
            );
        }
    }

    for _ in doors.len()..num_doors {
        let Some(position) = pool.pick(&mut rng) else {
            break;
        };
        let part = rng.below(5);
        let door_id = thematic_id(&mut rng, part);
        let side = rng.side();
        if door_id == id || doors.iter().any(|d| d.id == door_id) {
            debug!("skipping duplicate door {door_id} in {id}");
            continue;
        }
        let description = format!("Leads to {door_id}.");
        doors.push(Door::new(door_id, position as f32, side).with_description(description));
    }

    doors.sort_by(|a, b| a.position.total_cmp(&b.position));

    SceneSettings {
        id: id.to_string(),
        vanishing_point_x: 0.5,
        vanishing_point_y: 0.5,
        corridor_width: 0.8,
        corridor_height: 0.9,
        num_segments: NUM_SEGMENTS,
        perspective_strength: 1.5,
        line_color,
        doors,
    }
}
