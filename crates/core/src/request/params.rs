//! Named parameter maps.
//!
//! Both maps keep insertion order and distinguish an absent value (`None`)
//! from a present one. Only absent values are ever dropped, so `false`, `0`
//! and `""` still reach the wire.

use serde::Serialize;
use serde_json::Value;

use super::BuildError;

/// Optional query or body parameters for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<Value>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a present value, replacing any earlier entry with the same name.
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_opt(name, Some(value))
    }

    /// Set a value that may be absent.
    pub fn with_opt<V: Into<Value>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.insert(name.into(), value.map(Into::into));
        self
    }

    /// Insert in place, replacing any earlier entry with the same name.
    pub fn insert(&mut self, name: String, value: Option<Value>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Build from any value that serializes to a JSON object.
    ///
    /// Fields skipped during serialization are treated as absent.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, BuildError> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Self {
                entries: map.into_iter().map(|(k, v)| (k, Some(v))).collect(),
            }),
            Ok(other) => Err(BuildError::InvalidParams(format!(
                "expected an object, got {other}"
            ))),
            Err(e) => Err(BuildError::InvalidParams(e.to_string())),
        }
    }

    /// Look up a present value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// All entry names, present or not.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Present entries only.
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.as_str(), v)))
    }
}

/// Values for the `{placeholder}` segments of a path template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, Option<String>)>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_opt(name, Some(value))
    }

    pub fn with_opt<V: Into<String>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        let name = name.into();
        let value = value.map(Into::into);
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// The value for `name`, if supplied and not blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}
