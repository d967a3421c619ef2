//! Schema lint.
//!
//! Rendering tolerates every issue reported here; validation exists so that
//! form authors see why a field went missing from a document.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::models::field::{FieldDescriptor, FieldKind};
use crate::tree::FieldTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum SchemaIssue {
    #[error("{field}: id '{id}' is already used by an earlier field")]
    DuplicateId { field: String, id: String },

    #[error("{field}: {kind:?} fields need an id")]
    MissingId { field: String, kind: FieldKind },

    #[error("{field}: unknown field type")]
    UnknownType { field: String },

    #[error("{field}: headings cannot have a parent")]
    HeadingWithParent { field: String },

    #[error("{field}: heading key '{key}' is already used by an earlier heading")]
    DuplicateHeadingKey { field: String, key: String },

    #[error("{field}: parent '{parent_id}' does not exist")]
    DanglingParent { field: String, parent_id: String },

    #[error("{field}: parent '{parent_id}' is a heading")]
    ParentIsHeading { field: String, parent_id: String },

    #[error("{field}: parent chain through '{parent_id}' loops back to this field")]
    ParentCycle { field: String, parent_id: String },

    #[error("{field}: parent '{parent_id}' is a {kind:?} field and never shows children")]
    ParentWithoutChildren {
        field: String,
        parent_id: String,
        kind: FieldKind,
    },

    #[error("{field}: no headingId, field belongs to no section")]
    MissingHeading { field: String },

    #[error("{field}: headingId '{heading_id}' matches no heading")]
    UnknownHeading { field: String, heading_id: String },

    #[error("{field}: headingId '{heading_id}' differs from parent's '{parent_heading}'")]
    HeadingMismatch {
        field: String,
        heading_id: String,
        parent_heading: String,
    },

    #[error("{field}: radio field has no options")]
    RadioWithoutOptions { field: String },

    #[error("{field}: option '{option}' is listed more than once")]
    DuplicateOption { field: String, option: String },

    #[error("{field}: options are only used by radio fields")]
    OptionsOnNonRadio { field: String },
}

/// Human-readable handle for a field: its id, or its position when id-less.
pub fn describe(idx: usize, field: &FieldDescriptor) -> String {
    match field.id.as_deref() {
        Some(id) => format!("'{id}'"),
        None => format!("field #{idx}"),
    }
}

/// Report every structural problem in a schema, in schema order.
pub fn validate_schema(schema: &[FieldDescriptor]) -> Vec<SchemaIssue> {
    let tree = FieldTree::build(schema);
    let mut issues = Vec::new();

    let mut heading_keys = HashSet::new();
    for &idx in tree.headings() {
        if let Some(key) = schema[idx].heading_key()
            && !heading_keys.insert(key)
        {
            issues.push(SchemaIssue::DuplicateHeadingKey {
                field: describe(idx, &schema[idx]),
                key: key.to_string(),
            });
        }
    }

    let mut seen_ids = HashSet::new();
    for (idx, field) in schema.iter().enumerate() {
        let name = describe(idx, field);

        match field.id.as_deref() {
            Some(id) if !seen_ids.insert(id) => issues.push(SchemaIssue::DuplicateId {
                field: name.clone(),
                id: id.to_string(),
            }),
            None if field.kind.has_children() => issues.push(SchemaIssue::MissingId {
                field: name.clone(),
                kind: field.kind,
            }),
            _ => {}
        }

        match field.kind {
            FieldKind::Unknown => issues.push(SchemaIssue::UnknownType {
                field: name.clone(),
            }),
            FieldKind::Heading => {
                if field.parent_id.is_some() {
                    issues.push(SchemaIssue::HeadingWithParent {
                        field: name.clone(),
                    });
                }
            }
            FieldKind::Radio => {
                if field.options.is_empty() {
                    issues.push(SchemaIssue::RadioWithoutOptions {
                        field: name.clone(),
                    });
                }
                let mut options = HashSet::new();
                for option in &field.options {
                    if !options.insert(option.as_str()) {
                        issues.push(SchemaIssue::DuplicateOption {
                            field: name.clone(),
                            option: option.clone(),
                        });
                    }
                }
            }
            _ => {}
        }

        if field.kind != FieldKind::Radio && !field.options.is_empty() {
            issues.push(SchemaIssue::OptionsOnNonRadio {
                field: name.clone(),
            });
        }

        if field.is_heading() {
            continue;
        }

        match field.heading_id.as_deref() {
            None => issues.push(SchemaIssue::MissingHeading {
                field: name.clone(),
            }),
            Some(heading_id) if !heading_keys.contains(heading_id) => {
                issues.push(SchemaIssue::UnknownHeading {
                    field: name.clone(),
                    heading_id: heading_id.to_string(),
                })
            }
            _ => {}
        }

        if let Some(parent_id) = field.parent_id.as_deref() {
            check_parent(&tree, idx, &name, parent_id, &mut issues);
        }
    }

    issues
}

fn check_parent(
    tree: &FieldTree<'_>,
    idx: usize,
    name: &str,
    parent_id: &str,
    issues: &mut Vec<SchemaIssue>,
) {
    let field = tree.field(idx);
    let Some(parent_idx) = tree.index_of(parent_id) else {
        issues.push(SchemaIssue::DanglingParent {
            field: name.to_string(),
            parent_id: parent_id.to_string(),
        });
        return;
    };
    let parent = tree.field(parent_idx);

    if parent.is_heading() {
        issues.push(SchemaIssue::ParentIsHeading {
            field: name.to_string(),
            parent_id: parent_id.to_string(),
        });
        return;
    }

    if tree.parent(idx).is_none() {
        issues.push(SchemaIssue::ParentCycle {
            field: name.to_string(),
            parent_id: parent_id.to_string(),
        });
        return;
    }

    if !parent.kind.has_children() {
        issues.push(SchemaIssue::ParentWithoutChildren {
            field: name.to_string(),
            parent_id: parent_id.to_string(),
            kind: parent.kind,
        });
    }

    if let (Some(own), Some(inherited)) = (field.heading_id.as_deref(), parent.heading_id.as_deref())
        && own != inherited
    {
        issues.push(SchemaIssue::HeadingMismatch {
            field: name.to_string(),
            heading_id: own.to_string(),
            parent_heading: inherited.to_string(),
        });
    }
}
