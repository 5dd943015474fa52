//! Options controlling which variables are read and how names nest.

use serde::{Deserialize, Serialize};

/// Prefix a variable name must start with to be included by default.
pub const DEFAULT_PREFIX: &str = "DEEPENV_";

/// Substring of a variable name that marks a nesting level by default.
pub const DEFAULT_DELIMITER: &str = "__";

/// Prefix and nesting delimiter used when building a configuration.
///
/// Both are matched case-sensitively against variable names. An empty value
/// means "not set" and falls back to the corresponding default.
///
/// Options can be deserialized from any serde format. Unknown fields are
/// ignored, and the names `custom_prefix` and `custom_nesting_delimiter` are
/// accepted as aliases.
///
/// # Examples
///
/// ```
/// use deepenv::EnvOptions;
///
/// let options = EnvOptions::default().with_prefix("MYAPP_");
/// assert_eq!(options.prefix(), "MYAPP_");
/// assert_eq!(options.delimiter(), "__");
///
/// let options: EnvOptions = serde_json::from_str(r#"{"delimiter": "--"}"#).unwrap();
/// assert_eq!(options.prefix(), "DEEPENV_");
/// assert_eq!(options.delimiter(), "--");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvOptions {
    /// Required leading substring of variable names.
    #[serde(alias = "custom_prefix")]
    pub prefix: String,

    /// Substring mapped to a nesting level in the output.
    #[serde(alias = "custom_nesting_delimiter", alias = "nesting_delimiter")]
    pub delimiter: String,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl EnvOptions {
    /// Create options with the default prefix and delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the nesting delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// The effective prefix, falling back to [`DEFAULT_PREFIX`] when empty.
    #[must_use]
    pub fn prefix(&self) -> &str {
        if self.prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            &self.prefix
        }
    }

    /// The effective delimiter, falling back to [`DEFAULT_DELIMITER`] when empty.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        if self.delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            &self.delimiter
        }
    }

    /// Check whether a variable name is selected by these options.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(self.prefix())
    }
}
