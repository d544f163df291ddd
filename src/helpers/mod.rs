//! General useful bits and bobs

use super::*;

mod color_rgb;
mod config;
mod filesystem;
mod metronome;
mod or_log;
#[cfg(test)]
mod test_helpers;

pub use color_rgb::ColorRGB;
pub use config::{build_config, ConfigEntry, MasterConfig};
pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use metronome::Metronome;
pub use or_log::OrLog;
#[cfg(test)]
pub use test_helpers::*;
