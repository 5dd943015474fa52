//! Sources of environment variables.
//!
//! The builder never reads `std::env` directly. It asks an [`EnvSource`] for
//! a snapshot, so tests and embedders can supply variables without touching
//! the process environment.

use std::collections::BTreeMap;
use std::env;

/// A provider of environment variable snapshots.
///
/// The snapshot is a sorted map, which fixes the order in which variables
/// are applied: lexicographic by name.
pub trait EnvSource {
    /// Take a snapshot of all variables visible to this source.
    fn snapshot(&self) -> BTreeMap<String, String>;
}

/// The environment of the current process.
///
/// Entries whose name or value is not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn snapshot(&self) -> BTreeMap<String, String> {
        env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (Ok(name), Err(_)) => {
                    log::debug!("Skipping environment variable {name}: value is not UTF-8");
                    None
                }
                (Err(name), _) => {
                    log::debug!("Skipping environment variable {name:?}: name is not UTF-8");
                    None
                }
            })
            .collect()
    }
}

/// An in-memory set of variables.
///
/// # Examples
///
/// ```
/// use deepenv::{EnvSource, MapEnv};
///
/// let env = MapEnv::from_pairs([("DEEPENV_PORT", "8080")]);
/// assert_eq!(env.snapshot().get("DEEPENV_PORT").map(String::as_str), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment from name/value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl EnvSource for MapEnv {
    fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn snapshot(&self) -> BTreeMap<String, String> {
        (**self).snapshot()
    }
}
