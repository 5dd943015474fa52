#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # deepenv
//!
//! Build nested configuration objects from prefixed environment variables.
//!
//! Every variable whose name starts with a prefix (`DEEPENV_` by default)
//! becomes one value in a JSON object. The rest of the name, lower-cased and
//! split on a nesting delimiter (`__` by default), is the path to the value,
//! and the value itself is parsed into the most specific JSON type it
//! represents.
//!
//! ## Core Types
//!
//! - [`EnvConfigBuilder`] and [`build`]: assemble the configuration
//! - [`EnvOptions`]: prefix and delimiter
//! - [`EnvSource`], [`ProcessEnv`] and [`MapEnv`]: where variables come from
//! - [`ConfigPath`]: paths derived from variable names
//! - [`value::parse_value`]: value type inference
//! - [`Error`] and [`Result`]: errors from the typed entry points
//!
//! ## Examples
//!
//! ```
//! use deepenv::{EnvConfigBuilder, MapEnv};
//! use serde_json::json;
//!
//! let env = MapEnv::from_pairs([
//!     ("DEEPENV_SERVER__PORT", "8080"),
//!     ("DEEPENV_SERVER__TLS", "true"),
//!     ("DEEPENV_FEATURES", r#"["a", "b"]"#),
//! ]);
//!
//! let config = EnvConfigBuilder::new().with_source(env).build_value();
//! assert_eq!(
//!     config,
//!     json!({"features": ["a", "b"], "server": {"port": 8080, "tls": true}})
//! );
//! ```

pub mod builder;
pub mod error;
pub mod options;
pub mod path;
pub mod source;
pub mod value;

// Re-export key types at crate root for convenience
pub use builder::{build, EnvConfigBuilder, EnvEntry};
pub use error::{Error, Result};
pub use options::{EnvOptions, DEFAULT_DELIMITER, DEFAULT_PREFIX};
pub use path::ConfigPath;
pub use source::{EnvSource, MapEnv, ProcessEnv};
