use crate::types::Identifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field under which an account record carries its own identifier.
pub const IDENTIFIER_FIELD: &str = "identifier";

/// The structured data describing a user's account state.
///
/// Apart from the optional `identifier` field the contents are opaque to the
/// holder: no schema is enforced and fields are stored exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountRecord {
    fields: Map<String, Value>
}

impl AccountRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            fields: Map::new()
        }
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self {
            fields
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field, returning the value it replaced.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(field.into(), value)
    }

    /// The record's own `identifier` field, whatever its JSON type.
    pub fn identifier(&self) -> Option<&Value> {
        self.fields.get(IDENTIFIER_FIELD)
    }

    pub fn has_identifier(&self) -> bool {
        self.fields.contains_key(IDENTIFIER_FIELD)
    }

    /// Attaches `identifier` only when the record has no `identifier` field.
    ///
    /// An existing field is never overwritten, whatever its value.
    pub fn ensure_identifier(&mut self, identifier: &Identifier) {
        self.fields
            .entry(IDENTIFIER_FIELD)
            .or_insert_with(|| Value::String(identifier.as_str().to_string()));
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Map<String, Value>> for AccountRecord {
    fn from(fields: Map<String, Value>) -> Self {
        AccountRecord::from_map(fields)
    }
}
