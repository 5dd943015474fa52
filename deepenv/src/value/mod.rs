//! Typed interpretation of raw environment variable values.
//!
//! Every value arrives as a string. [`parse_value`] infers the most specific
//! JSON value it represents, trying each rule in order:
//!
//! 1. An empty string is absent (`None`).
//! 2. `"null"`, `"undefined"` and anything starting with whitespace stay
//!    strings, untouched.
//! 3. Loose numbers become JSON numbers (see [`parse_loose_number`]).
//! 4. `true` / `false`, in any letter case, become booleans.
//! 5. Valid JSON becomes the parsed JSON value.
//! 6. Everything else stays a string.
//!
//! Parsing never fails: anything that does not fit a richer type falls back
//! to the original string. That includes JSON nested more than 128 levels
//! deep, which exceeds the parser's recursion limit.
//!
//! # Examples
//!
//! ```
//! use deepenv::value::parse_value;
//! use serde_json::json;
//!
//! assert_eq!(parse_value("12"), Some(json!(12)));
//! assert_eq!(parse_value("TRUE"), Some(json!(true)));
//! assert_eq!(parse_value(r#"{"a": [1, 2]}"#), Some(json!({"a": [1, 2]})));
//! assert_eq!(parse_value("null"), Some(json!("null")));
//! assert_eq!(parse_value("100.."), Some(json!("100..")));
//! assert_eq!(parse_value(""), None);
//! ```

mod numeric;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use numeric::parse_loose_number;

use serde_json::Value;

/// Parse a raw variable value into its inferred JSON value.
///
/// Returns `None` only for the empty string.
#[must_use]
pub fn parse_value(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }

    // Kept literal so they are never read as JSON null.
    if raw == "null" || raw == "undefined" || raw.starts_with(numeric::is_js_whitespace) {
        return Some(Value::String(raw.to_owned()));
    }

    // Numbers win over booleans, so "0" and "1" stay numeric.
    if let Some(number) = parse_loose_number(raw) {
        return Some(Value::Number(number));
    }

    if raw.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }

    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Some(value);
    }

    Some(Value::String(raw.to_owned()))
}
