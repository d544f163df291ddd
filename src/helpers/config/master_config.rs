use super::*;

/// Configuration for the whole raidfire program
#[derive(Debug, Default)]
pub struct MasterConfig {
    /// If to exit with success without running (for example, after showing --help)
    pub happy_exit: bool,
    pub game: GameConfig,
}
