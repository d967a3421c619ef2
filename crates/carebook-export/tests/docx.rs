use carebook_core::models::field::FieldDescriptor;
use carebook_core::models::value::{FieldValue, ValueMap};
use carebook_export::docx::generate_docx;
use carebook_export::header::{render_header, DocumentMeta, DEFAULT_HEADER_TEMPLATE};
use carebook_export::render::render_document;
use carebook_export::styles::DocumentStyles;

fn document() -> carebook_export::node::RenderedDocument {
    let schema = vec![
        FieldDescriptor::heading("H1", "Documents"),
        FieldDescriptor::group("vital", "Vital records").under("H1"),
        FieldDescriptor::checkbox("birth", "Birth certificate").under("H1").child_of("vital"),
        FieldDescriptor::radio("will", "Will", &["Attorney", "Home"]).under("H1"),
        FieldDescriptor::link("See https://www.ssa.gov now").under("H1"),
    ];
    let values: ValueMap = [("birth", FieldValue::Bool(true))].into_iter().collect();
    render_document("Burial Instructions", &schema, &values)
}

#[test]
fn docx_is_a_zip_package() {
    let bytes = generate_docx(&document(), None, &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn deep_nesting_with_wide_indent() {
    let mut schema = vec![
        FieldDescriptor::heading("H1", "Deep"),
        FieldDescriptor::group("g0", "Level 0").under("H1"),
    ];
    for depth in 1..8 {
        schema.push(
            FieldDescriptor::group(&format!("g{depth}"), "Nested")
                .under("H1")
                .child_of(&format!("g{}", depth - 1)),
        );
    }
    let doc = render_document("Deep", &schema, &ValueMap::new());
    let styles = DocumentStyles {
        max_indent_level: usize::MAX,
        indent_twips: i32::MAX / 2,
        ..DocumentStyles::default()
    };

    let bytes = generate_docx(&doc, None, &styles).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn docx_accepts_rendered_header() {
    let meta = DocumentMeta {
        title: "Burial Instructions".to_string(),
        form: "burial_instructions".to_string(),
        client_id: Some("c-42".to_string()),
        updated_at: None,
    };
    let header = render_header(DEFAULT_HEADER_TEMPLATE, &meta).unwrap();
    let bytes = generate_docx(&document(), Some(&header), &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn default_header_skips_missing_fields() {
    let meta = DocumentMeta {
        title: "Caregiver Information".to_string(),
        form: "caregiver_information".to_string(),
        client_id: Some("c-42".to_string()),
        updated_at: None,
    };
    let header = render_header(DEFAULT_HEADER_TEMPLATE, &meta).unwrap();
    assert_eq!(header, "# Caregiver Information\n**Client:** c-42\n");
}

#[test]
fn custom_header_template() {
    let meta = DocumentMeta {
        title: "Face Sheet".to_string(),
        form: "face_sheet".to_string(),
        ..DocumentMeta::default()
    };
    let header = render_header("## {{ form | upper }}", &meta).unwrap();
    assert_eq!(header, "## FACE_SHEET");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_header("{% if %}", &DocumentMeta::default()).unwrap_err();
    assert!(err.to_string().starts_with("template parse error"));
}
