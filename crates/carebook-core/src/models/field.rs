use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The node type of a field descriptor.
///
/// Schemas arrive as JSON, so a `type` string this build does not know maps
/// to [`FieldKind::Unknown`] instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FieldKind {
    /// Section title. Scopes fields through `headingId`.
    Heading,
    /// Disclosure row whose children are nested fields.
    Group,
    /// Boolean answer.
    Checkbox,
    /// One-of-many answer over `options`.
    Radio,
    /// Display-only text; URLs embedded in the label are highlighted.
    Link,
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    /// Whether fields of this kind expand children through `parentId`.
    pub fn has_children(self) -> bool {
        matches!(self, FieldKind::Group | FieldKind::Checkbox | FieldKind::Radio)
    }

    /// Whether fields of this kind read an answer from the value map.
    pub fn is_answerable(self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }
}

/// One node in a checklist-like form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    fn new(kind: FieldKind, id: Option<&str>, label: &str) -> Self {
        Self {
            id: id.map(str::to_string),
            kind,
            label: label.to_string(),
            parent_id: None,
            heading_id: None,
            options: Vec::new(),
        }
    }

    pub fn heading(id: &str, label: &str) -> Self {
        Self::new(FieldKind::Heading, Some(id), label)
    }

    pub fn group(id: &str, label: &str) -> Self {
        Self::new(FieldKind::Group, Some(id), label)
    }

    pub fn checkbox(id: &str, label: &str) -> Self {
        Self::new(FieldKind::Checkbox, Some(id), label)
    }

    pub fn radio(id: &str, label: &str, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(FieldKind::Radio, Some(id), label)
        }
    }

    /// Links are display-only and usually carry no id.
    pub fn link(label: &str) -> Self {
        Self::new(FieldKind::Link, None, label)
    }

    /// Place this field in the section of heading `heading_key`.
    pub fn under(mut self, heading_key: &str) -> Self {
        self.heading_id = Some(heading_key.to_string());
        self
    }

    /// Nest this field below the field with id `parent_id`.
    pub fn child_of(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }

    pub fn is_heading(&self) -> bool {
        self.kind == FieldKind::Heading
    }

    /// The key that non-heading fields reference through `headingId`.
    ///
    /// A heading may declare its own `headingId`; otherwise its `id` is used.
    /// Non-heading fields have no heading key.
    pub fn heading_key(&self) -> Option<&str> {
        if !self.is_heading() {
            return None;
        }
        self.heading_id.as_deref().or(self.id.as_deref())
    }
}
