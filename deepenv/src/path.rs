//! Configuration paths derived from environment variable names.
//!
//! A variable name such as `DEEPENV_SERVER__TLS__CERT` maps to the path
//! `server.tls.cert`: the name is lower-cased, the prefix is stripped, the
//! remainder is split on the nesting delimiter, and each segment is then
//! split on `.` again, so a literal dot in a name also nests.

use std::fmt;

use serde_json::{Map, Value};

use crate::options::EnvOptions;

/// A location in a nested configuration object.
///
/// A path always has at least one segment. Segments may be empty, e.g. for
/// a variable named exactly like the prefix.
///
/// # Examples
///
/// ```
/// use deepenv::{ConfigPath, EnvOptions};
///
/// let path = ConfigPath::from_key("DEEPENV_OUTER__INNER_VALUE", &EnvOptions::default());
/// assert_eq!(path.segments(), ["outer", "inner_value"]);
/// assert_eq!(path.to_string(), "outer.inner_value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Derive the path for a variable name.
    ///
    /// The caller is expected to have checked that `key` starts with the
    /// prefix. The prefix is removed by character count after lower-casing,
    /// and the delimiter is matched against the lower-cased name as given.
    #[must_use]
    pub fn from_key(key: &str, options: &EnvOptions) -> Self {
        let lowered = key.to_lowercase();
        let rest: String = lowered.chars().skip(options.prefix().chars().count()).collect();

        let segments = rest
            .split(options.delimiter())
            .flat_map(|part| part.split('.'))
            .map(str::to_owned)
            .collect();

        Self { segments }
    }

    /// Parse a dotted path such as `a.b.c`.
    #[must_use]
    pub fn from_dotted(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// The path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Write `value` at this path, creating intermediate objects.
    ///
    /// An existing array along the path is kept when the next segment is an
    /// array index (`0`, `1`, ...), and the write goes to that element. The
    /// array is padded with nulls up to the index. Missing intermediates are
    /// always created as objects, even before an index segment. Any other
    /// value found where a container is needed is replaced by a new object.
    pub fn set(&self, target: &mut Map<String, Value>, value: Value) {
        write_at(target, &self.segments, Some(value));
    }

    /// Remove the value at this path.
    ///
    /// Intermediate containers are created exactly as [`ConfigPath::set`]
    /// would, so the parent of the removed key always exists afterwards.
    /// An array element cannot be removed without shifting its neighbours,
    /// so it is set to null instead.
    pub fn unset(&self, target: &mut Map<String, Value>) {
        write_at(target, &self.segments, None);
    }

    /// Look up the value at this path.
    #[must_use]
    pub fn get<'a>(&self, target: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        let mut current = target.get(first)?;
        for segment in rest {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(array_index(segment)?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Parse a segment as an array index: `0` or digits without a leading zero.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.starts_with('0')
            && !segment.is_empty()
            && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

fn write_at(map: &mut Map<String, Value>, segments: &[String], value: Option<Value>) {
    match segments {
        [] => {}
        [last] => match value {
            Some(value) => {
                map.insert(last.clone(), value);
            }
            None => {
                map.remove(last);
            }
        },
        [head, rest @ ..] => {
            let slot = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            write_into(slot, rest, value);
        }
    }
}

/// Write below `slot`, which must end up a container for `segments`.
fn write_into(slot: &mut Value, segments: &[String], value: Option<Value>) {
    if let Value::Array(items) = &mut *slot {
        if let Some((index, rest)) = segments
            .split_first()
            .and_then(|(first, rest)| array_index(first).map(|index| (index, rest)))
        {
            write_item(items, index, rest, value);
            return;
        }
    }

    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(child) = slot {
        write_at(child, segments, value);
    }
}

fn write_item(items: &mut Vec<Value>, index: usize, rest: &[String], value: Option<Value>) {
    if items.len() <= index {
        items.resize(index + 1, Value::Null);
    }
    let item = &mut items[index];

    if rest.is_empty() {
        *item = value.unwrap_or(Value::Null);
    } else {
        write_into(item, rest, value);
    }
}
