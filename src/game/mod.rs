//! The session that owns a registry and drives it one frame at a time, plus the seams to the
//! outside world (play area dimensions and the drawing surface)

use super::*;

mod canvas;
#[allow(clippy::module_inception)]
mod game;
mod game_config;

pub use canvas::{Canvas, DimensionProvider, Dimensions, FixedDimensions, TraceCanvas};
pub use game::{Game, TickHook};
pub use game_config::{game_config_entries, GameConfig};
