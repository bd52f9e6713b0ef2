pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod math;
pub mod scene;
pub mod svg;
pub mod types;

pub use crate::core::{DrawList, DrawOp, Paint};
pub use math::Projection;
pub use scene::{ControllerState, NavigateFn, SceneController};
pub use types::{Door, SceneSettings, Side, Viewport};
