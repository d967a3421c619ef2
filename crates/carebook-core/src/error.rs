use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid JSON pointer '{0}': must start with '/'")]
    InvalidPointer(String),

    #[error("cannot write '{field_id}' at '{pointer}': path crosses a non-object value")]
    PointerConflict { field_id: String, pointer: String },

    #[error("expected a JSON object for form values, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
