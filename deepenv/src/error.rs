//! Error types for the deepenv library.
//!
//! Building a configuration from the environment never fails. Errors only
//! come from the typed edges of the API: converting an arbitrary base value
//! into an object, and deserializing the result into a caller type.

use thiserror::Error;

/// Result type alias for the fallible deepenv operations.
///
/// # Examples
///
/// ```
/// use deepenv::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the deepenv library.
#[derive(Debug, Error)]
pub enum Error {
    /// The base configuration was not a JSON object.
    #[error("invalid base configuration: expected an object, found {found}")]
    InvalidBase {
        /// The kind of JSON value that was supplied instead.
        found: &'static str,
    },

    /// A value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error was caused by a non-object base.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepenv::Error;
    ///
    /// let err = Error::InvalidBase { found: "array" };
    /// assert!(err.is_invalid_base());
    /// ```
    #[must_use]
    pub fn is_invalid_base(&self) -> bool {
        matches!(self, Self::InvalidBase { .. })
    }
}

/// Names the kind of a JSON value for error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
