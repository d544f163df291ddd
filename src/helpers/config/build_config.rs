use super::*;

pub const DEFAULT_TOML_PATH: &str = "raidfire.toml";

/// Get the current configuration from the config file (if there is one) and the command line.
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem().as_ref(), &std::env::args().collect::<Vec<_>>())
}

/// Command line arguments take precedence over the config file
pub fn build_config_with(
    fs: &dyn FilesystemTrait,
    args: &[String],
) -> Result<MasterConfig, Box<dyn Error>> {
    let mut settings = Vec::new();
    if fs.is_file(DEFAULT_TOML_PATH) {
        let contents = fs.read_to_string(DEFAULT_TOML_PATH)?;
        settings.extend(toml_settings(DEFAULT_TOML_PATH, &contents)?);
    }
    settings.extend(arg_settings(args)?);

    let mut builder = ConfigBuilder::new(config_entries());
    for setting in &settings {
        builder.set(setting)?;
    }
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    if conf.happy_exit {
        println!("{}", builder.help());
    }
    Ok(conf)
}
