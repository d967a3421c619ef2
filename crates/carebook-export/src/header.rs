use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

pub const DEFAULT_HEADER_TEMPLATE: &str = "\
# {{ title }}
{% if client_id %}**Client:** {{ client_id }}
{% endif %}{% if updated_at %}**Last updated:** {{ updated_at }}
{% endif %}";

/// Values available to a header template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    pub form: String,
    pub client_id: Option<String>,
    pub updated_at: Option<String>,
}

/// Render a Tera header template with document metadata.
///
/// The output uses the same Markdown subset as the DOCX writer's header
/// block: `#` headings, `- ` bullets, `**bold**` runs.
pub fn render_header(template: &str, meta: &DocumentMeta) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("header", template)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(meta)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("header", &context)?;
    Ok(rendered)
}
