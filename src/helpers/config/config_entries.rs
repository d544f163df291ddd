use super::*;

/// These entries will be applied in order of returned vec (NOT in the order the user specifies the entry). All entries
/// will always be applied.
pub fn config_entries() -> Vec<Box<dyn ConfigEntry>> {
    let mut entries = vec![<dyn ConfigEntry>::new_bool(
        "help",
        "show this message and exit",
        false,
        |conf, help, _| {
            conf.happy_exit = help;
            Ok(())
        },
    )];
    entries.extend(game_config_entries());
    entries
}
