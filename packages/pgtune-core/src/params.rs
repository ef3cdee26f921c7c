//! Generated parameter values and the ordered parameter set.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::units;

/// Value of a single generated setting.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain integer (connections, workers, targets)
    Integer(u64),
    /// Floating point planner or checkpoint setting
    Float(f64),
    /// Memory quantity already formatted, e.g. `"512MB"`
    Size(String),
    /// Setting left for the engine to decide
    Null,
}

impl ParamValue {
    /// Formats a kilobyte quantity with [`units::format_size`].
    pub fn size_kb(value_kb: u64) -> Self {
        ParamValue::Size(units::format_size(value_kb))
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            ParamValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<&str> {
        match self {
            ParamValue::Size(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(u64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(value) => write!(f, "{}", value),
            ParamValue::Float(value) => write!(f, "{}", value),
            ParamValue::Size(value) => f.write_str(value),
            ParamValue::Null => f.write_str("null"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Integer(value) => serializer.serialize_u64(*value),
            ParamValue::Float(value) => serializer.serialize_f64(*value),
            ParamValue::Size(value) => serializer.serialize_str(value),
            ParamValue::Null => serializer.serialize_none(),
        }
    }
}

/// Generated settings in the order they were produced.
///
/// Keys are unique; [`ConfigParameterSet::insert`] keeps the first value
/// written under a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ConfigParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting unless one with the same name is already present.
    ///
    /// Returns `false` when the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            tracing::warn!("Ignoring duplicate setting {}", name);
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    /// Inserts every pair in order, keeping existing names.
    pub fn merge<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (name, value) in pairs {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Serialize for ConfigParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
