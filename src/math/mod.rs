mod color;
mod projection;

pub use color::{hsl_to_rgb, rgb_hex};
pub use projection::{Projection, DEPTH_EPSILON};
