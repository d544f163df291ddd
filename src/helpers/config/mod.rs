use super::*;

use std::{collections::HashSet, fmt::Display};

mod build_config;
mod config_builder;
mod config_entries;
mod master_config;
mod settings;
#[cfg(test)]
mod tests;

pub use build_config::build_config;
#[cfg(test)]
pub use build_config::build_config_with;
pub use config_builder::ConfigEntry;
pub use master_config::MasterConfig;

use build_config::DEFAULT_TOML_PATH;
use config_builder::*;
use config_entries::*;
use settings::*;
