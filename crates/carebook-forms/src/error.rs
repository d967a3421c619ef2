use thiserror::Error;

use crate::values::ValueIssue;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("invalid answers: {0}")]
    Values(#[from] ValueIssue),

    #[error(transparent)]
    Core(#[from] carebook_core::error::CoreError),
}
