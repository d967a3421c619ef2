use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is a valid regex"));

/// A piece of a link label: plain text or an embedded URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
#[ts(export)]
pub enum LabelSegment {
    Text(String),
    Url(String),
}

impl LabelSegment {
    pub fn text(&self) -> &str {
        match self {
            LabelSegment::Text(s) | LabelSegment::Url(s) => s,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, LabelSegment::Url(_))
    }
}

/// Split a label into ordered text and URL segments.
///
/// URLs match greedily up to the next whitespace, so trailing punctuation
/// stays part of the URL. Joining the segment texts yields the label.
pub fn segment_label(label: &str) -> Vec<LabelSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in URL_PATTERN.find_iter(label) {
        if m.start() > cursor {
            segments.push(LabelSegment::Text(label[cursor..m.start()].to_string()));
        }
        segments.push(LabelSegment::Url(m.as_str().to_string()));
        cursor = m.end();
    }

    if cursor < label.len() {
        segments.push(LabelSegment::Text(label[cursor..].to_string()));
    }

    segments
}
