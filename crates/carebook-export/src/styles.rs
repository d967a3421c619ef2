use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for headings (e.g. "Arial", "Calibri").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Document title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub section_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,

    /// Deepest indent step. Deeper fields reuse this step.
    pub max_indent_level: usize,

    /// Left indent per step, in twentieths of a point.
    pub indent_twips: i32,

    /// Hex RGB colour for URLs inside link labels.
    pub link_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 12,
            title_size: 16,
            section_size: 14,
            margin_inches: 1.0,
            max_indent_level: 4,
            indent_twips: 360,
            link_color: "1F5FBF".to_string(),
        }
    }
}

impl DocumentStyles {
    /// Visual indent step for a nesting level, clamped at `max_indent_level`.
    pub fn indent_step(&self, level: usize) -> usize {
        level.min(self.max_indent_level)
    }
}
