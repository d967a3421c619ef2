use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use carebook_core::models::field::{FieldDescriptor, FieldKind};
use carebook_core::models::value::{FieldValue, ValueMap};
use carebook_core::query::find_field;

/// Why an answer does not fit the field it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValueProblem {
    /// No field with this id exists in the form.
    UnknownField,
    /// The field does not take an answer (heading, group, link).
    NotAnswerable,
    /// A checkbox received text.
    ExpectedBool,
    /// A radio received a boolean.
    ExpectedText,
    /// A radio received text that is none of its options.
    NotAnOption,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValueIssue {
    pub field_id: String,
    pub problem: ValueProblem,
    pub message: String,
}

pub fn validate_values(
    form_slug: &str,
    fields: &[FieldDescriptor],
    values: &ValueMap,
) -> Vec<ValueIssue> {
    let mut issues = Vec::new();
    for (id, value) in values.iter() {
        let problem = match find_field(id, fields) {
            None => Some(ValueProblem::UnknownField),
            Some(field) => check_answer(field, value),
        };

        if let Some(problem) = problem {
            issues.push(ValueIssue {
                field_id: id.to_string(),
                problem,
                message: format!("{form_slug}: {}", describe(id, problem, value)),
            });
        }
    }
    if !issues.is_empty() {
        tracing::debug!(form = form_slug, count = issues.len(), "answers failed validation");
    }
    issues
}

fn check_answer(field: &FieldDescriptor, value: &FieldValue) -> Option<ValueProblem> {
    match (field.kind, value) {
        (FieldKind::Checkbox, FieldValue::Bool(_)) => None,
        (FieldKind::Checkbox, FieldValue::Text(_)) => Some(ValueProblem::ExpectedBool),
        (FieldKind::Radio, FieldValue::Bool(_)) => Some(ValueProblem::ExpectedText),
        (FieldKind::Radio, FieldValue::Text(s)) if field.options.contains(s) => None,
        (FieldKind::Radio, FieldValue::Text(_)) => Some(ValueProblem::NotAnOption),
        _ => Some(ValueProblem::NotAnswerable),
    }
}

fn describe(id: &str, problem: ValueProblem, value: &FieldValue) -> String {
    match problem {
        ValueProblem::UnknownField => format!("no field '{id}'"),
        ValueProblem::NotAnswerable => format!("field '{id}' does not take an answer"),
        ValueProblem::ExpectedBool => format!("checkbox '{id}' expects true or false"),
        ValueProblem::ExpectedText => format!("radio '{id}' expects one of its options"),
        ValueProblem::NotAnOption => format!(
            "'{}' is not an option of radio '{id}'",
            value.as_str().unwrap_or_default()
        ),
    }
}
