use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::mapping::ServerMapping;
use crate::models::value::ValueMap;

/// Persisted form data as returned by the backend for one client and form.
///
/// `data` is in the server's nested shape; a [`ServerMapping`] flattens it
/// into the schema's id space.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormSubmission {
    pub client_id: Uuid,
    pub form: String,
    pub updated_at: jiff::Timestamp,
    pub data: serde_json::Value,
}

impl FormSubmission {
    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn values(&self, mapping: &ServerMapping) -> ValueMap {
        mapping.to_values(&self.data)
    }
}
