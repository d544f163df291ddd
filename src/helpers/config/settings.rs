use super::*;

/// A value as it came from the config file or the command line. It is only checked against the
/// type of the option it names once it reaches the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A command line option with nothing after it
    Flag,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Command line text, parsed once the option's type is known
    Arg(String),
    /// A TOML string, array, table or date. No option takes one.
    Other(String),
}

impl Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "no value"),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Arg(text) | Self::Other(text) => write!(f, "{}", text),
        }
    }
}

/// One option the user set, and where they set it
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub name: String,
    pub value: RawValue,
    /// Used in error messages
    pub source: String,
}

/// Every key in the top level table of a config file
pub fn toml_settings(path: &str, contents: &str) -> Result<Vec<Setting>, Box<dyn Error>> {
    let table = match contents.parse::<toml::Value>()? {
        toml::Value::Table(table) => table,
        _ => return Err(format!("toplevel value of {} is not a table", path).into()),
    };
    Ok(table
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                toml::Value::Boolean(value) => RawValue::Bool(value),
                toml::Value::Integer(value) => RawValue::Int(value),
                toml::Value::Float(value) => RawValue::Float(value),
                other => RawValue::Other(other.to_string()),
            };
            Setting {
                source: format!("{} in {}", name, path),
                name,
                value,
            }
        })
        .collect())
}

fn is_option_name(arg: &str) -> bool {
    // so a negative number is taken as a value
    arg.starts_with('-') && arg.parse::<f64>().is_err()
}

/// Options given as `--some-name value` or just `--some-name`. The first arg is the program name
/// and is skipped.
pub fn arg_settings(args: &[String]) -> Result<Vec<Setting>, Box<dyn Error>> {
    let mut settings: Vec<Setting> = Vec::new();
    for arg in args.iter().skip(1) {
        if is_option_name(arg) {
            settings.push(Setting {
                name: arg.trim_start_matches('-').replace('-', "_"),
                value: RawValue::Flag,
                source: format!("{} command line argument", arg),
            });
            continue;
        }
        match settings.last_mut() {
            Some(setting) if setting.value == RawValue::Flag => {
                setting.value = RawValue::Arg(arg.clone());
            }
            Some(setting) => {
                return Err(format!(
                    "{} has multiple values: {} {}",
                    setting.source, setting.value, arg
                )
                .into())
            }
            None => {
                return Err(format!(
                    "first command line argument {} is a value not an --option-name",
                    arg
                )
                .into())
            }
        }
    }
    Ok(settings)
}
