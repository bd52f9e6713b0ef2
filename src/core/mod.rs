pub mod draw;
pub mod timer;

pub use draw::{DrawList, DrawOp, Paint};
pub use timer::{Countdown, Cycle, Stopwatch};
