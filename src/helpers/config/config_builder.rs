use super::*;

/// A type an option can hold
pub trait OptionType: Clone + Display + 'static {
    const TYPE_NAME: &'static str;
    /// None if the raw value can't be read as this type
    fn from_raw(raw: &RawValue) -> Option<Self>;
}

impl OptionType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Flag => Some(true),
            RawValue::Bool(value) => Some(*value),
            RawValue::Arg(text) => text.parse().ok(),
            _ => None,
        }
    }
}

impl OptionType for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Int(value) => Some(*value),
            RawValue::Arg(text) => text.parse().ok(),
            _ => None,
        }
    }
}

impl OptionType for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        let value = match raw {
            RawValue::Float(value) => *value,
            RawValue::Int(value) => *value as f64,
            RawValue::Arg(text) => text.parse().ok()?,
            _ => return None,
        };
        Some(value).filter(|value| value.is_finite())
    }
}

pub trait ConfigEntry {
    fn name(&self) -> &str;
    fn help(&self) -> &str;
    fn default_value(&self) -> String;
    /// Fails if the value can't be read as the entry's type
    fn set(&mut self, value: &RawValue, source: String) -> Result<(), Box<dyn Error>>;
    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>>;
}

/// Gets the entry's value and, if it was set by the user, where from
type ApplyFn<T> = Box<dyn Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>>>;

impl dyn ConfigEntry {
    pub fn new<T, F>(name: &str, help: &str, default_value: T, apply: F) -> Box<Self>
    where
        T: OptionType,
        F: Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        Box::new(TypedEntry {
            name: name.to_string(),
            help: help.to_string(),
            value: default_value.clone(),
            default_value,
            source: None,
            apply_fn: Box::new(apply),
        })
    }

    pub fn new_bool<F>(name: &str, help: &str, default_value: bool, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, bool, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        Self::new(name, help, default_value, apply)
    }

    pub fn new_int<F>(name: &str, help: &str, default_value: i64, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, i64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        Self::new(name, help, default_value, apply)
    }

    pub fn new_float<F>(name: &str, help: &str, default_value: f64, apply: F) -> Box<Self>
    where
        F: Fn(&mut MasterConfig, f64, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        Self::new(name, help, default_value, apply)
    }
}

struct TypedEntry<T> {
    name: String,
    help: String,
    default_value: T,
    value: T,
    /// None while the value is the default
    source: Option<String>,
    apply_fn: ApplyFn<T>,
}

impl<T: OptionType> ConfigEntry for TypedEntry<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn default_value(&self) -> String {
        self.default_value.to_string()
    }

    fn set(&mut self, value: &RawValue, source: String) -> Result<(), Box<dyn Error>> {
        match T::from_raw(value) {
            Some(parsed) => {
                self.value = parsed;
                self.source = Some(source);
                Ok(())
            }
            None if *value == RawValue::Flag => {
                Err(format!("{} needs a {} value", source, T::TYPE_NAME).into())
            }
            None => Err(format!(
                "{} is not valid for {} (expected: {})",
                value,
                source,
                T::TYPE_NAME
            )
            .into()),
        }
    }

    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        (self.apply_fn)(target, self.value.clone(), self.source.as_deref())
    }
}

pub struct ConfigBuilder {
    entries: Vec<Box<dyn ConfigEntry>>,
}

impl ConfigBuilder {
    /// Panics if two entries share a name
    pub fn new(entries: Vec<Box<dyn ConfigEntry>>) -> Self {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name()) {
                panic!("duplicate configuration entry {}", entry.name());
            }
        }
        Self { entries }
    }

    /// Later settings of the same option win
    pub fn set(&mut self, setting: &Setting) -> Result<(), Box<dyn Error>> {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name() == setting.name)
        {
            Some(entry) => entry.set(&setting.value, setting.source.clone()),
            None => Err(format!("{} is not a valid option", setting.source).into()),
        }
    }

    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for entry in &self.entries {
            entry
                .apply_to(target)
                .map_err(|e| format!("{} configuration option: {}", entry.name(), e))?;
        }
        Ok(())
    }

    /// One line per entry, for --help
    pub fn help(&self) -> String {
        let mut help = format!(
            "options can be given as --name value or set in {}\n",
            DEFAULT_TOML_PATH
        );
        for entry in &self.entries {
            help.push_str(&format!(
                "  --{} (default: {})\n      {}\n",
                entry.name().replace('_', "-"),
                entry.default_value(),
                entry.help()
            ));
        }
        help
    }
}
