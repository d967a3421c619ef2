use std::path::Path;

use carebook_core::models::field::FieldDescriptor;
use carebook_core::models::submission::FormSubmission;
use carebook_core::models::value::ValueMap;
use carebook_export::docx::generate_docx;
use carebook_export::header::{render_header, DocumentMeta, DEFAULT_HEADER_TEMPLATE};
use carebook_export::node::RenderedDocument;
use carebook_export::outline::render_outline;
use carebook_export::render::render_document;
use carebook_forms::{all_forms, get_form, FormSchema};

use crate::config::RenderConfig;

/// A schema loaded from a JSON file rather than bundled with the build.
pub struct CustomForm {
    slug: String,
    fields: Vec<FieldDescriptor>,
}

impl CustomForm {
    pub fn from_file(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read schema at {}: {e}", path.display()))?;
        let fields: Vec<FieldDescriptor> = serde_json::from_str(&contents)?;
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        tracing::debug!(slug = %slug, fields = fields.len(), "loaded schema file");
        Ok(Self { slug, fields })
    }
}

impl FormSchema for CustomForm {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.slug
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Resolve `--form` or `--schema` into a form.
pub fn load_form(slug: Option<&str>, schema: Option<&Path>) -> eyre::Result<Box<dyn FormSchema>> {
    match (slug, schema) {
        (Some(slug), None) => Ok(get_form(slug)?),
        (None, Some(path)) => Ok(Box::new(CustomForm::from_file(path)?)),
        _ => Err(eyre::eyre!("pass exactly one of --form or --schema")),
    }
}

/// Answers plus whatever the source says about where they came from.
#[derive(Debug, Default)]
pub struct Answers {
    pub values: ValueMap,
    pub client_id: Option<String>,
    pub updated_at: Option<String>,
}

/// Read answers from a server submission envelope or a flat values file.
pub fn load_answers(
    form: &dyn FormSchema,
    submission: Option<&Path>,
    values: Option<&Path>,
) -> eyre::Result<Answers> {
    match (submission, values) {
        (Some(path), None) => {
            let submission = FormSubmission::from_json_str(&std::fs::read_to_string(path)?)?;
            if submission.form != form.slug() {
                tracing::warn!(
                    submission_form = %submission.form,
                    form = form.slug(),
                    "submission was stored for a different form"
                );
            }
            let mapping = form.server_mapping()?;
            Ok(Answers {
                values: submission.values(&mapping),
                client_id: Some(submission.client_id.to_string()),
                updated_at: Some(submission.updated_at.to_string()),
            })
        }
        (None, Some(path)) => {
            let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            Ok(Answers {
                values: ValueMap::from_json(&json)?,
                ..Answers::default()
            })
        }
        (None, None) => Ok(Answers::default()),
        (Some(_), Some(_)) => Err(eyre::eyre!("pass at most one of --submission or --values")),
    }
}

pub fn list_forms() -> String {
    let mut out = String::new();
    for form in all_forms() {
        out.push_str(&format!("{:<28} {}\n", form.slug(), form.name()));
    }
    out
}

/// Schema and answer problems, one message per line.
pub fn validate(form: &dyn FormSchema, answers: &Answers) -> Vec<String> {
    let mut messages: Vec<String> = form
        .validate()
        .into_iter()
        .map(|issue| issue.to_string())
        .collect();
    messages.extend(
        form.validate_values(&answers.values)
            .into_iter()
            .map(|issue| issue.to_string()),
    );
    messages
}

pub fn render(form: &dyn FormSchema, answers: &Answers) -> RenderedDocument {
    render_document(form.name(), form.fields(), &answers.values)
}

pub fn outline(form: &dyn FormSchema, answers: &Answers, config: &RenderConfig) -> String {
    render_outline(&render(form, answers), &config.styles)
}

pub fn outline_json(form: &dyn FormSchema, answers: &Answers) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(&render(form, answers))?)
}

/// Render the form to DOCX bytes. With `strict`, answers that do not fit the
/// schema abort the export.
pub fn docx(
    form: &dyn FormSchema,
    answers: &Answers,
    config: &RenderConfig,
    strict: bool,
) -> eyre::Result<Vec<u8>> {
    if strict {
        form.ensure_values(&answers.values)?;
    }

    let meta = DocumentMeta {
        title: form.name().to_string(),
        form: form.slug().to_string(),
        client_id: answers.client_id.clone(),
        updated_at: answers.updated_at.clone(),
    };
    let template = config
        .header_template
        .as_deref()
        .unwrap_or(DEFAULT_HEADER_TEMPLATE);
    let header = render_header(template, &meta)?;

    let document = render(form, answers);
    Ok(generate_docx(&document, Some(&header), &config.styles)?)
}
