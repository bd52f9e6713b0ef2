pub mod arrows;
pub mod controller;
pub mod doors;
pub mod geometry;

pub use controller::{ControllerState, NavigateFn, SceneController};
pub use doors::{DoorGeometry, DoorInteraction, DoorState, DoorStyle};
