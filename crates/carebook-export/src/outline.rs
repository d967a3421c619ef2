use carebook_core::link::LabelSegment;

use crate::node::{NodeKind, RenderedDocument, RenderedNode};
use crate::styles::DocumentStyles;

const INDENT: &str = "  ";

/// Plain-text rendering of a document for terminals and previews.
///
/// ```text
/// # Title
/// ## Section
/// > Group
///   [x] Checked box
///   Radio label
///     (o) selected option
///     ( ) other option
/// ```
pub fn render_outline(document: &RenderedDocument, styles: &DocumentStyles) -> String {
    let mut out = format!("# {}\n", document.title);
    for section in &document.sections {
        out.push('\n');
        write_node(&mut out, section, styles);
    }
    out
}

fn write_node(out: &mut String, node: &RenderedNode, styles: &DocumentStyles) {
    let indent = INDENT.repeat(styles.indent_step(node.level));
    match &node.kind {
        NodeKind::Heading { title } => {
            out.push_str(&format!("## {title}\n"));
        }
        NodeKind::Group { label } => {
            out.push_str(&format!("{indent}> {label}\n"));
        }
        NodeKind::Checkbox { label, checked } => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            out.push_str(&format!("{indent}{mark} {label}\n"));
        }
        NodeKind::Radio { label, options } => {
            out.push_str(&format!("{indent}{label}\n"));
            let option_indent = INDENT.repeat(styles.indent_step(node.level + 1));
            for option in options {
                let mark = if option.selected { "(o)" } else { "( )" };
                out.push_str(&format!("{option_indent}{mark} {}\n", option.label));
            }
        }
        NodeKind::Link { segments } => {
            out.push_str(&indent);
            for segment in segments {
                match segment {
                    LabelSegment::Text(text) => out.push_str(text),
                    LabelSegment::Url(url) => out.push_str(&format!("<{url}>")),
                }
            }
            out.push('\n');
        }
    }

    for child in &node.children {
        write_node(out, child, styles);
    }
}
