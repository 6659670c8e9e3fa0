//! Freehand drawing surface: turns pointer and touch input into styled polylines.

pub(crate) mod util;
pub use util::{Clock, ManualClock, ResultExt, SystemClock};

pub mod engine;
pub mod geom;
pub mod input;
pub mod render;
pub mod style;

mod config;
pub use config::*;

mod canvas;
pub use canvas::*;
