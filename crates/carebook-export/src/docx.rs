use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType};

use carebook_core::link::LabelSegment;

use crate::error::ExportError;
use crate::node::{NodeKind, RenderedDocument, RenderedNode};
use crate::styles::DocumentStyles;

const GROUP_MARK: &str = "\u{25B8} ";
const CHECKED: &str = "\u{2612} ";
const UNCHECKED: &str = "\u{2610} ";
const SELECTED: &str = "\u{25C9} ";
const UNSELECTED: &str = "\u{25CB} ";

/// Generate a DOCX document from a rendered form.
///
/// `header` is optional Markdown-ish text (see [`render_header`]) placed above
/// the sections; without it the document title becomes the first heading.
///
/// [`render_header`]: crate::header::render_header
pub fn generate_docx(
    document: &RenderedDocument,
    header: Option<&str>,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * 1440.0).round() as i32;
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.section_size));

    match header {
        Some(header) => {
            for paragraph in header_paragraphs(header, styles) {
                docx = docx.add_paragraph(paragraph);
            }
        }
        None => {
            docx = docx.add_paragraph(heading_paragraph(&document.title, "Title", styles));
        }
    }

    for section in &document.sections {
        for paragraph in node_paragraphs(section, styles) {
            docx = docx.add_paragraph(paragraph);
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(
        title = %document.title,
        bytes = buf.get_ref().len(),
        "generated docx"
    );
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn indented(step: usize, styles: &DocumentStyles) -> Paragraph {
    let step = i32::try_from(step).unwrap_or(i32::MAX);
    let left = styles.indent_twips.saturating_mul(step);
    Paragraph::new()
        .align(AlignmentType::Left)
        .indent(Some(left), None, None, None)
}

/// Paragraphs for a node and its descendants, in document order.
fn node_paragraphs(node: &RenderedNode, styles: &DocumentStyles) -> Vec<Paragraph> {
    let step = styles.indent_step(node.level);
    let mut paragraphs = Vec::new();

    match &node.kind {
        NodeKind::Heading { title } => {
            paragraphs.push(heading_paragraph(title, "Heading1", styles));
        }
        NodeKind::Group { label } => {
            paragraphs.push(
                indented(step, styles)
                    .add_run(text_run(GROUP_MARK, styles))
                    .add_run(text_run(label, styles).bold()),
            );
        }
        NodeKind::Checkbox { label, checked } => {
            let mark = if *checked { CHECKED } else { UNCHECKED };
            paragraphs.push(
                indented(step, styles)
                    .add_run(text_run(mark, styles))
                    .add_run(text_run(label, styles)),
            );
        }
        NodeKind::Radio { label, options } => {
            paragraphs.push(indented(step, styles).add_run(text_run(label, styles)));
            let option_step = styles.indent_step(node.level + 1);
            for option in options {
                let mark = if option.selected { SELECTED } else { UNSELECTED };
                paragraphs.push(
                    indented(option_step, styles)
                        .add_run(text_run(mark, styles))
                        .add_run(text_run(&option.label, styles)),
                );
            }
        }
        NodeKind::Link { segments } => {
            let mut para = indented(step, styles);
            for segment in segments {
                para = para.add_run(match segment {
                    LabelSegment::Text(text) => text_run(text, styles),
                    LabelSegment::Url(url) => text_run(url, styles)
                        .color(&styles.link_color)
                        .underline("single"),
                });
            }
            paragraphs.push(para);
        }
    }

    for child in &node.children {
        paragraphs.extend(node_paragraphs(child, styles));
    }
    paragraphs
}

/// Convert header Markdown into paragraphs.
///
/// - `# Heading` → title
/// - `## Heading` → section heading
/// - `- item` → bullet line
/// - everything else → body text with `**bold**` runs
fn header_paragraphs(header: &str, styles: &DocumentStyles) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("## ") {
            paragraphs.push(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            paragraphs.push(heading_paragraph(text, "Title", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            let mut para = Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(text_run("\u{2022} ", styles));
            for run in parse_inline(text, styles) {
                para = para.add_run(run);
            }
            paragraphs.push(para);
        } else {
            let mut para = Paragraph::new().align(AlignmentType::Left);
            for run in parse_inline(trimmed, styles) {
                para = para.add_run(run);
            }
            paragraphs.push(para);
        }
    }
    paragraphs
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(text_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(text_run(&after_start[..end], styles).bold());
            remaining = &after_start[end + 2..];
        } else {
            // No closing **, keep the markers as text
            runs.push(text_run(&remaining[start..], styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(text_run(remaining, styles));
    }

    runs
}
