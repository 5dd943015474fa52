//! Assembling a nested configuration from environment variables.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{value_kind, Error, Result};
use crate::options::EnvOptions;
use crate::path::ConfigPath;
use crate::source::{EnvSource, ProcessEnv};
use crate::value::parse_value;

/// One selected environment variable and what it contributes.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvEntry {
    /// The variable name as found in the environment.
    pub name: String,
    /// Where the value lands in the configuration.
    pub path: ConfigPath,
    /// The parsed value, or `None` when the variable is empty.
    pub value: Option<Value>,
}

/// Builds a configuration object from prefixed environment variables.
///
/// Every variable whose name starts with the prefix is parsed (see
/// [`parse_value`]) and written into a copy of the base configuration at the
/// path derived from its name (see [`ConfigPath::from_key`]). Variables are
/// applied in lexicographic order of their raw names, before lower-casing.
/// When two names differ only in what follows a shared stem of the same
/// case (`A` and `A__B`) the longer one is applied last and wins, but
/// `DEEPENV_a` sorts after `DEEPENV_A__B` and overwrites it. An empty
/// variable removes the key at its path (or nulls an array element).
///
/// The base is deep-copied; nothing the caller passes in is modified, and
/// no options persist between builds.
///
/// # Examples
///
/// ```
/// use deepenv::{EnvConfigBuilder, MapEnv};
/// use serde_json::json;
///
/// let env = MapEnv::from_pairs([
///     ("DEEPENV_OUTER__INNER__NUMBER", "12"),
///     ("DEEPENV_TO_OVERRIDE", "4"),
///     ("UNRELATED", "ignored"),
/// ]);
/// let base = json!({"other_outer": 2, "to_override": 1});
///
/// let config = EnvConfigBuilder::new()
///     .with_source(env)
///     .with_base_value(base.clone())
///     .unwrap()
///     .build_value();
///
/// assert_eq!(
///     config,
///     json!({"other_outer": 2, "outer": {"inner": {"number": 12}}, "to_override": 4})
/// );
/// assert_eq!(base, json!({"other_outer": 2, "to_override": 1}));
/// ```
#[derive(Debug, Clone)]
pub struct EnvConfigBuilder<S = ProcessEnv> {
    options: EnvOptions,
    base: Map<String, Value>,
    source: S,
}

impl EnvConfigBuilder<ProcessEnv> {
    /// Create a builder reading the process environment with default options
    /// and an empty base.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: EnvOptions::default(),
            base: Map::new(),
            source: ProcessEnv,
        }
    }
}

impl Default for EnvConfigBuilder<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> EnvConfigBuilder<S> {
    /// Replace all options.
    #[must_use]
    pub fn with_options(mut self, options: EnvOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the variable name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }

    /// Set the nesting delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.delimiter = delimiter.into();
        self
    }

    /// Use a copy of `base` as the starting configuration.
    #[must_use]
    pub fn with_base(mut self, base: &Map<String, Value>) -> Self {
        self.base = base.clone();
        self
    }

    /// Use a JSON value as the starting configuration.
    ///
    /// `Value::Null` is treated as no base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] if `base` is neither an object nor null.
    pub fn with_base_value(mut self, base: Value) -> Result<Self> {
        self.base = match base {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(Error::InvalidBase {
                    found: value_kind(&other),
                })
            }
        };
        Ok(self)
    }

    /// Use any serializable value as the starting configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `base` cannot be serialized, or
    /// [`Error::InvalidBase`] if it does not serialize to an object.
    pub fn with_base_serialize<T: Serialize + ?Sized>(self, base: &T) -> Result<Self> {
        let value = serde_json::to_value(base)?;
        self.with_base_value(value)
    }

    /// Read variables from `source` instead.
    #[must_use]
    pub fn with_source<T: EnvSource>(self, source: T) -> EnvConfigBuilder<T> {
        EnvConfigBuilder {
            options: self.options,
            base: self.base,
            source,
        }
    }

    /// The options this builder uses.
    #[must_use]
    pub fn options(&self) -> &EnvOptions {
        &self.options
    }

    /// List the selected variables in the order they are applied.
    #[must_use]
    pub fn entries(&self) -> Vec<EnvEntry> {
        self.source
            .snapshot()
            .into_iter()
            .filter(|(name, _)| self.options.matches(name))
            .map(|(name, raw)| {
                let path = ConfigPath::from_key(&name, &self.options);
                let value = parse_value(&raw);
                EnvEntry { name, path, value }
            })
            .collect()
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(&self) -> Map<String, Value> {
        let mut config = self.base.clone();

        for entry in self.entries() {
            match entry.value {
                Some(value) => {
                    log::debug!("Applying {} at {}", entry.name, entry.path);
                    log::trace!("{} parsed as {}", entry.name, value_kind(&value));
                    entry.path.set(&mut config, value);
                }
                None => {
                    log::debug!("Clearing {} at {} (empty value)", entry.name, entry.path);
                    entry.path.unset(&mut config);
                }
            }
        }

        config
    }

    /// Build the configuration as a JSON object value.
    #[must_use]
    pub fn build_value(&self) -> Value {
        Value::Object(self.build())
    }

    /// Build the configuration and deserialize it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the result does not match `T`.
    pub fn build_into<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.build_value())?)
    }
}

/// Build a configuration from the process environment.
///
/// Equivalent to an [`EnvConfigBuilder`] with the given base and options.
///
/// # Examples
///
/// ```no_run
/// use deepenv::{build, EnvOptions};
///
/// let config = build(None, &EnvOptions::default().with_prefix("MYAPP_"));
/// println!("{}", serde_json::Value::Object(config));
/// ```
#[must_use]
pub fn build(base: Option<&Map<String, Value>>, options: &EnvOptions) -> Map<String, Value> {
    let builder = EnvConfigBuilder::new().with_options(options.clone());
    match base {
        Some(base) => builder.with_base(base).build(),
        None => builder.build(),
    }
}
