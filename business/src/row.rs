//! Row records and row identity.
//!
//! The table never validates row shape at render time: a field reads
//! `row.get(key)` and treats a missing key exactly like `null`.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key/value access to one rendered record.
///
/// Implemented for [`RowRecord`] and raw [`serde_json::Value`] objects.
/// Typed rows can implement it to expose their fields by key.
pub trait RowData {
    fn get(&self, key: &str) -> Option<&Value>;
}

impl RowData for Value {
    fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }
}

impl RowData for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }
}

/// A loosely-typed row: one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RowRecord(Map<String, Value>);

impl RowRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a record from a JSON value, rejecting anything but an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Parses a JSON array of objects.
    ///
    /// This is the narrowing point between fetched bytes and the table:
    /// every element must be an object, otherwise the whole payload is rejected.
    pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Self>> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::rows_from_value(value)
    }

    pub fn rows_from_value(value: Value) -> Result<Vec<Self>> {
        let Value::Array(items) = value else {
            return Err(Error::RowsNotArray);
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Self::from_value(item).ok_or(Error::RowNotObject { index }))
            .collect()
    }
}

impl RowData for RowRecord {
    fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for RowRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Identity of a rendered row.
///
/// `Id` carries the row's unique id value; `Index` is the positional
/// fallback used when the record lacks the unique id key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    Index(usize),
}

impl RowKey {
    /// Resolves the key of the row at `index` from its `unique_id` value.
    pub fn resolve(row: &dyn RowData, unique_id: &str, index: usize) -> Self {
        row.get(unique_id)
            .and_then(display_text)
            .map_or(Self::Index(index), Self::Id)
    }

    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Text form of a scalar cell value.
///
/// `null` and empty strings have no text; composite values fall back to
/// their compact JSON form.
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
