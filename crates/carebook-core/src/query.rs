//! Flat queries over a schema slice.
//!
//! Each call scans the schema. Render passes build a [`FieldTree`] instead;
//! these remain for callers that ask a single question of a schema.
//!
//! [`FieldTree`]: crate::tree::FieldTree

use crate::models::field::FieldDescriptor;

/// First field with the given id, in schema order.
pub fn find_field<'a>(id: &str, schema: &'a [FieldDescriptor]) -> Option<&'a FieldDescriptor> {
    schema.iter().find(|f| f.id.as_deref() == Some(id))
}

/// Fields whose `parentId` equals `parent_id`, in schema order.
///
/// `None` selects every field without a parent.
pub fn fields_by_parent<'a>(
    parent_id: Option<&str>,
    schema: &'a [FieldDescriptor],
) -> Vec<&'a FieldDescriptor> {
    schema
        .iter()
        .filter(|f| f.parent_id.as_deref() == parent_id)
        .collect()
}

/// Non-heading fields in the section of `heading_key`, at any depth.
pub fn fields_by_heading<'a>(
    heading_key: &str,
    schema: &'a [FieldDescriptor],
) -> Vec<&'a FieldDescriptor> {
    schema
        .iter()
        .filter(|f| !f.is_heading() && f.heading_id.as_deref() == Some(heading_key))
        .collect()
}

/// The section's top-level fields: heading scope first, then parentless only.
pub fn root_fields<'a>(
    heading_key: &str,
    schema: &'a [FieldDescriptor],
) -> Vec<&'a FieldDescriptor> {
    fields_by_heading(heading_key, schema)
        .into_iter()
        .filter(|f| f.parent_id.is_none())
        .collect()
}

/// Number of ancestor links between a field and its root.
///
/// Follows the same rules as [`FieldTree`]: the walk stops at a field without
/// a parent, at a parent id missing from the schema, or at a parent that is a
/// heading. Fields on a cyclic parent chain are roots, so a walk that runs
/// into a cycle stops at the first cycle member it reached. Headings and an
/// absent or unknown `field_id` are level 0.
pub fn nesting_level(field_id: Option<&str>, schema: &[FieldDescriptor]) -> usize {
    let Some(id) = field_id else {
        return 0;
    };
    let Some(mut current) = find_field(id, schema) else {
        return 0;
    };
    if current.is_heading() {
        return 0;
    }

    let mut chain = vec![id];
    while let Some(parent_id) = current.parent_id.as_deref() {
        let Some(parent) = find_field(parent_id, schema) else {
            break;
        };
        if parent.is_heading() {
            break;
        }
        if let Some(pos) = chain.iter().position(|&seen| seen == parent_id) {
            tracing::warn!(field_id = id, parent_id, "cyclic parent chain");
            return pos;
        }
        chain.push(parent_id);
        current = parent;
    }
    chain.len() - 1
}
