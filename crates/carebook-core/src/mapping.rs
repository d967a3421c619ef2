//! Table-driven mapping between the server's nested JSON and a flat
//! [`ValueMap`].
//!
//! Each form declares where its answers live in the server payload as RFC 6901
//! JSON pointers. Reading and writing use the same table, so a form round-trips
//! through the backend without per-field code.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::models::field::FieldDescriptor;
use crate::models::value::{answer_from_json, FieldValue, ValueMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub field_id: String,
    pub pointer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawServerMapping")]
pub struct ServerMapping {
    entries: Vec<FieldMapping>,
}

/// Wire shape of [`ServerMapping`]; decoding goes through [`ServerMapping::new`].
#[derive(Deserialize)]
struct RawServerMapping {
    entries: Vec<FieldMapping>,
}

impl TryFrom<RawServerMapping> for ServerMapping {
    type Error = CoreError;

    fn try_from(raw: RawServerMapping) -> Result<Self, Self::Error> {
        ServerMapping::new(raw.entries)
    }
}

impl ServerMapping {
    pub fn new(entries: Vec<FieldMapping>) -> Result<Self, CoreError> {
        for entry in &entries {
            if !entry.pointer.starts_with('/') {
                return Err(CoreError::InvalidPointer(entry.pointer.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Build from `(field_id, pointer)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, CoreError> {
        Self::new(
            pairs
                .iter()
                .map(|(field_id, pointer)| FieldMapping {
                    field_id: field_id.to_string(),
                    pointer: pointer.to_string(),
                })
                .collect(),
        )
    }

    /// Every answerable field stored at the top level under its own id.
    pub fn identity(schema: &[FieldDescriptor]) -> Self {
        let entries = schema
            .iter()
            .filter(|f| f.kind.is_answerable())
            .filter_map(|f| f.id.as_deref())
            .map(|id| FieldMapping {
                field_id: id.to_string(),
                pointer: format!("/{}", escape_token(id)),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FieldMapping] {
        &self.entries
    }

    /// Read every mapped answer out of a server payload.
    ///
    /// Missing paths and `null` leave the field unanswered.
    pub fn to_values(&self, data: &Value) -> ValueMap {
        let mut values = ValueMap::new();
        for entry in &self.entries {
            if let Some(answer) = data
                .pointer(&entry.pointer)
                .and_then(|v| answer_from_json(&entry.field_id, v))
            {
                values.insert(entry.field_id.clone(), answer);
            }
        }
        values
    }

    /// Write every mapped answer into a fresh server payload.
    pub fn to_server(&self, values: &ValueMap) -> Result<Value, CoreError> {
        let mut root = Value::Object(Map::new());
        for entry in &self.entries {
            let Some(answer) = values.get(Some(entry.field_id.as_str())) else {
                continue;
            };
            let json = match answer {
                FieldValue::Bool(b) => Value::Bool(*b),
                FieldValue::Text(s) => Value::String(s.clone()),
            };
            write_pointer(&mut root, entry, json)?;
        }
        Ok(root)
    }
}

fn write_pointer(root: &mut Value, entry: &FieldMapping, json: Value) -> Result<(), CoreError> {
    let conflict = || CoreError::PointerConflict {
        field_id: entry.field_id.clone(),
        pointer: entry.pointer.clone(),
    };

    let path = entry
        .pointer
        .strip_prefix('/')
        .ok_or_else(|| CoreError::InvalidPointer(entry.pointer.clone()))?;
    let tokens: Vec<String> = path.split('/').map(unescape_token).collect();
    let Some((last, parents)) = tokens.split_last() else {
        return Err(conflict());
    };

    let mut current = root;
    for token in parents {
        let object = current.as_object_mut().ok_or_else(conflict)?;
        current = object
            .entry(token.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let object = current.as_object_mut().ok_or_else(conflict)?;
    object.insert(last.clone(), json);
    Ok(())
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}
