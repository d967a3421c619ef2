use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single answer in a filled-in form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Checkbox semantics: `true`, or any non-empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// Radio semantics: exact string equality, no case folding or trimming.
    pub fn matches_option(&self, option: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == option,
            FieldValue::Bool(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Flat field id → answer mapping. A missing key means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ValueMap(BTreeMap<String, FieldValue>);

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a value map from a flat JSON object.
    ///
    /// Booleans and strings are kept, `null` counts as unanswered. Numbers,
    /// arrays and objects are not answers any field type understands; they are
    /// skipped with a warning.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let object = value
            .as_object()
            .ok_or_else(|| CoreError::NotAnObject(json_kind(value)))?;

        let mut values = ValueMap::new();
        for (key, v) in object {
            if let Some(answer) = answer_from_json(key, v) {
                values.insert(key.clone(), answer);
            }
        }
        Ok(values)
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(id.into(), value.into());
    }

    /// Look up the answer for a field. An absent id has no answer.
    pub fn get(&self, id: Option<&str>) -> Option<&FieldValue> {
        id.and_then(|id| self.0.get(id))
    }

    pub fn is_checked(&self, id: Option<&str>) -> bool {
        self.get(id).is_some_and(FieldValue::is_truthy)
    }

    pub fn is_selected(&self, id: Option<&str>, option: &str) -> bool {
        self.get(id).is_some_and(|v| v.matches_option(option))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ValueMap::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

pub(crate) fn answer_from_json(key: &str, value: &serde_json::Value) -> Option<FieldValue> {
    match value {
        serde_json::Value::Bool(b) => Some(FieldValue::Bool(*b)),
        serde_json::Value::String(s) => Some(FieldValue::Text(s.clone())),
        serde_json::Value::Null => None,
        other => {
            tracing::warn!(field_id = key, kind = json_kind(other), "skipping non-primitive answer");
            None
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
