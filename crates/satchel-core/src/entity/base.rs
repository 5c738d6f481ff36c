use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::InputError;

use super::value;

/// An opaque record of named fields. No fixed schema — callers name fields
/// at call time.
///
/// Entities are logically immutable inputs: components never mutate a
/// caller's entity, they return annotated copies. Field presence is
/// explicit, so "missing field" and "present but null" are distinguishable
/// (the merge rules depend on this).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
    fields: Map<String, Value>,
}

impl Entity {
    /// Create an empty entity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, val: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), val.into());
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, field: impl Into<String>, val: impl Into<Value>) {
        self.fields.insert(field.into(), val.into());
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether the field is present at all (even if null).
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Numeric reading of a field. `None` when absent or non-numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(value::numeric_value)
    }

    /// Timestamp reading of a field. `None` when absent or unparsable.
    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.fields.get(field).and_then(value::timestamp_value)
    }

    /// Field names in deterministic (insertion) order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Value::Object(entity.fields)
    }
}

impl TryFrom<Value> for Entity {
    type Error = InputError;

    /// Entities arrive from hosts as JSON. Only objects qualify.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(InputError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
