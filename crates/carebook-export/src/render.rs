use carebook_core::link::segment_label;
use carebook_core::models::field::{FieldDescriptor, FieldKind};
use carebook_core::models::value::ValueMap;
use carebook_core::tree::FieldTree;

use crate::node::{NodeKind, RadioOption, RenderedDocument, RenderedNode};

/// Render every section of a schema, headings in schema order.
///
/// Pure: the same schema and values always produce the same tree.
pub fn render_document(
    title: &str,
    schema: &[FieldDescriptor],
    values: &ValueMap,
) -> RenderedDocument {
    let tree = FieldTree::build(schema);
    let sections: Vec<RenderedNode> = tree
        .headings()
        .iter()
        .map(|&heading| render_section(&tree, heading, values))
        .collect();

    tracing::debug!(
        title,
        sections = sections.len(),
        answers = values.len(),
        "rendered document"
    );

    RenderedDocument {
        title: title.to_string(),
        sections,
    }
}

/// A heading node whose children are the section's root fields, each
/// expanded recursively.
pub fn render_section(tree: &FieldTree<'_>, heading: usize, values: &ValueMap) -> RenderedNode {
    let field = tree.field(heading);
    let children: Vec<RenderedNode> = field
        .heading_key()
        .map(|key| {
            tree.roots(key)
                .iter()
                .filter_map(|&root| render_field(tree, root, values))
                .collect()
        })
        .unwrap_or_default();

    RenderedNode {
        field_id: field.id.clone(),
        level: 0,
        kind: NodeKind::Heading {
            title: field.label.clone(),
        },
        children,
    }
}

/// Render one field and, for group, checkbox and radio fields, its children.
/// A heading renders as its whole section.
///
/// Returns `None` for field types this build does not know.
pub fn render_field(tree: &FieldTree<'_>, idx: usize, values: &ValueMap) -> Option<RenderedNode> {
    let field = tree.field(idx);
    let id = field.id.as_deref();

    let kind = match field.kind {
        FieldKind::Heading => return Some(render_section(tree, idx, values)),
        FieldKind::Group => NodeKind::Group {
            label: field.label.clone(),
        },
        FieldKind::Checkbox => NodeKind::Checkbox {
            label: field.label.clone(),
            checked: values.is_checked(id),
        },
        FieldKind::Radio => NodeKind::Radio {
            label: field.label.clone(),
            options: field
                .options
                .iter()
                .map(|option| RadioOption {
                    label: option.clone(),
                    selected: values.is_selected(id, option),
                })
                .collect(),
        },
        FieldKind::Link => NodeKind::Link {
            segments: segment_label(&field.label),
        },
        FieldKind::Unknown => {
            tracing::debug!(field_id = id, "skipping field of unknown type");
            return None;
        }
    };

    let children = if field.kind.has_children() {
        tree.children(idx)
            .iter()
            .filter_map(|&child| render_field(tree, child, values))
            .collect()
    } else {
        Vec::new()
    };

    Some(RenderedNode {
        field_id: field.id.clone(),
        level: tree.level(idx),
        kind,
        children,
    })
}
