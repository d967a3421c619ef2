use serde::Serialize;

use carebook_core::link::LabelSegment;

/// One rendered field and its rendered descendants.
///
/// The same tree feeds the terminal outline and the DOCX writer; only the
/// backend differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    /// Ancestor depth below the section's root fields.
    pub level: usize,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Heading { title: String },
    Group { label: String },
    Checkbox { label: String, checked: bool },
    Radio { label: String, options: Vec<RadioOption> },
    Link { segments: Vec<LabelSegment> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub label: String,
    pub selected: bool,
}

/// A whole form: one heading node per section, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    pub sections: Vec<RenderedNode>,
}

impl RenderedNode {
    /// This node and all descendants, depth first.
    pub fn walk(&self) -> Vec<&RenderedNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

impl RenderedDocument {
    /// Rendered nodes below the headings, depth first.
    pub fn field_nodes(&self) -> impl Iterator<Item = &RenderedNode> {
        self.sections
            .iter()
            .flat_map(|s| s.children.iter())
            .flat_map(RenderedNode::walk)
    }

    pub fn find(&self, field_id: &str) -> Option<&RenderedNode> {
        self.sections
            .iter()
            .flat_map(RenderedNode::walk)
            .find(|n| n.field_id.as_deref() == Some(field_id))
    }
}
