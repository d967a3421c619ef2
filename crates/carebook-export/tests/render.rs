use carebook_core::link::LabelSegment;
use carebook_core::models::field::{FieldDescriptor, FieldKind};
use carebook_core::models::value::{FieldValue, ValueMap};
use carebook_core::query::fields_by_heading;
use carebook_export::node::{NodeKind, RadioOption, RenderedNode};
use carebook_core::tree::FieldTree;
use carebook_export::render::{render_document, render_field};

fn values<const N: usize>(pairs: [(&str, FieldValue); N]) -> ValueMap {
    pairs.into_iter().collect()
}

fn checklist() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::heading("H1", "Arrangements"),
        FieldDescriptor::group("A", "Funeral home").under("H1"),
        FieldDescriptor::checkbox("B", "Contract signed").under("H1").child_of("A"),
        FieldDescriptor::checkbox("C", "Copy on file").under("H1").child_of("B"),
        FieldDescriptor::radio("R", "Disposition", &["Burial", "Cremation"])
            .under("H1")
            .child_of("A"),
        FieldDescriptor::checkbox("D", "Obituary").under("H1"),
        FieldDescriptor::heading("H2", "Links"),
        FieldDescriptor::link("See https://example.com/x for details").under("H2"),
    ]
}

#[test]
fn group_with_checked_child() {
    let schema = vec![
        FieldDescriptor::group("A", "").under("H1"),
        FieldDescriptor::checkbox("B", "").under("H1").child_of("A"),
        FieldDescriptor::heading("H1", "Section"),
    ];
    let doc = render_document("Form", &schema, &values([("B", FieldValue::Bool(true))]));

    assert_eq!(doc.sections.len(), 1);
    let section = &doc.sections[0];
    assert_eq!(section.children.len(), 1);

    let a = &section.children[0];
    assert_eq!(a.field_id.as_deref(), Some("A"));
    assert_eq!(a.level, 0);
    assert!(matches!(a.kind, NodeKind::Group { .. }));
    assert_eq!(
        a.children,
        vec![RenderedNode {
            field_id: Some("B".to_string()),
            level: 1,
            kind: NodeKind::Checkbox {
                label: String::new(),
                checked: true,
            },
            children: vec![],
        }]
    );
}

#[test]
fn unanswered_radio_selects_nothing() {
    let schema = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::radio("Q", "Question", &["yes", "no"]).under("H1"),
    ];
    let doc = render_document("Form", &schema, &ValueMap::new());
    let NodeKind::Radio { options, .. } = &doc.sections[0].children[0].kind else {
        panic!("expected a radio node");
    };
    assert_eq!(
        options,
        &vec![
            RadioOption { label: "yes".to_string(), selected: false },
            RadioOption { label: "no".to_string(), selected: false },
        ]
    );
}

#[test]
fn radio_selects_only_exact_match() {
    let schema = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::radio("Q", "Question", &["Yes", "No", "yes"]).under("H1"),
    ];
    for (answer, expected) in [
        (FieldValue::Text("yes".into()), vec![false, false, true]),
        (FieldValue::Text("No".into()), vec![false, true, false]),
        (FieldValue::Text("No ".into()), vec![false, false, false]),
        (FieldValue::Bool(true), vec![false, false, false]),
    ] {
        let doc = render_document("Form", &schema, &values([("Q", answer)]));
        let NodeKind::Radio { options, .. } = &doc.sections[0].children[0].kind else {
            panic!("expected a radio node");
        };
        let selected: Vec<_> = options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, expected);
    }
}

#[test]
fn checkbox_state_follows_truthiness() {
    let schema = checklist();
    let answers = values([
        ("B", FieldValue::Bool(true)),
        ("C", FieldValue::Bool(false)),
        ("D", FieldValue::Text("done".into())),
    ]);
    let doc = render_document("Form", &schema, &answers);

    for node in doc.field_nodes() {
        if let NodeKind::Checkbox { checked, .. } = node.kind {
            assert_eq!(checked, answers.is_checked(node.field_id.as_deref()));
        }
    }
    assert!(matches!(doc.find("D").unwrap().kind, NodeKind::Checkbox { checked: true, .. }));
    assert!(matches!(doc.find("C").unwrap().kind, NodeKind::Checkbox { checked: false, .. }));
}

#[test]
fn link_label_is_segmented() {
    let doc = render_document("Form", &checklist(), &ValueMap::new());
    let link = &doc.sections[1].children[0];
    assert_eq!(
        link.kind,
        NodeKind::Link {
            segments: vec![
                LabelSegment::Text("See ".to_string()),
                LabelSegment::Url("https://example.com/x".to_string()),
                LabelSegment::Text(" for details".to_string()),
            ]
        }
    );
}

#[test]
fn nested_children_render_once() {
    let schema = checklist();
    let doc = render_document("Form", &schema, &ValueMap::new());
    let section = &doc.sections[0];

    let top: Vec<_> = section.children.iter().map(|n| n.field_id.as_deref()).collect();
    assert_eq!(top, vec![Some("A"), Some("D")]);

    let rendered: Vec<_> = section
        .children
        .iter()
        .flat_map(RenderedNode::walk)
        .filter_map(|n| n.field_id.as_deref())
        .collect();
    let expected: Vec<_> = fields_by_heading("H1", &schema)
        .into_iter()
        .filter_map(|f| f.id.as_deref())
        .collect();
    assert_eq!(rendered, expected);
}

#[test]
fn levels_are_carried_on_nodes() {
    let doc = render_document("Form", &checklist(), &ValueMap::new());
    assert_eq!(doc.find("A").unwrap().level, 0);
    assert_eq!(doc.find("B").unwrap().level, 1);
    assert_eq!(doc.find("C").unwrap().level, 2);
    assert_eq!(doc.find("R").unwrap().level, 1);
}

#[test]
fn unknown_types_render_nothing() {
    let mut signature = FieldDescriptor::checkbox("S", "Signature").under("H1");
    signature.kind = FieldKind::Unknown;
    let schema = vec![
        FieldDescriptor::heading("H1", "Section"),
        signature,
        FieldDescriptor::checkbox("under_sig", "Hidden").under("H1").child_of("S"),
        FieldDescriptor::checkbox("K", "Kept").under("H1"),
    ];
    let doc = render_document("Form", &schema, &ValueMap::new());
    let ids: Vec<_> = doc.field_nodes().filter_map(|n| n.field_id.as_deref()).collect();
    assert_eq!(ids, vec!["K"]);
}

#[test]
fn broken_references_degrade() {
    let schema = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::checkbox("orphan", "Orphan").under("H1").child_of("ghost"),
        FieldDescriptor::checkbox("lost", "Lost").under("H404"),
        FieldDescriptor::group("A", "A").under("H1").child_of("B"),
        FieldDescriptor::group("B", "B").under("H1").child_of("A"),
        FieldDescriptor::heading("H2", "Empty"),
    ];
    let doc = render_document("Form", &schema, &ValueMap::new());
    let top: Vec<_> = doc.sections[0]
        .children
        .iter()
        .map(|n| n.field_id.as_deref().unwrap())
        .collect();
    assert_eq!(top, vec!["orphan", "A", "B"]);
    assert!(doc.sections[1].children.is_empty());
    assert!(doc.find("lost").is_none());
}

#[test]
fn rendering_is_idempotent() {
    let schema = checklist();
    let answers = values([("B", FieldValue::Bool(true)), ("R", FieldValue::Text("Burial".into()))]);
    assert_eq!(
        render_document("Form", &schema, &answers),
        render_document("Form", &schema, &answers)
    );
}

#[test]
fn sections_follow_schema_order() {
    let doc = render_document("Form", &checklist(), &ValueMap::new());
    let titles: Vec<_> = doc
        .sections
        .iter()
        .map(|s| match &s.kind {
            NodeKind::Heading { title } => title.as_str(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(titles, vec!["Arrangements", "Links"]);
}

#[test]
fn heading_field_renders_its_section() {
    let schema = checklist();
    let tree = FieldTree::build(&schema);
    let heading = tree.headings()[0];
    let answers = values([("B", FieldValue::Bool(true))]);

    let node = render_field(&tree, heading, &answers).unwrap();
    let doc = render_document("Form", &schema, &answers);
    assert_eq!(node, doc.sections[0]);
    assert_eq!(node.children.len(), 2);
}
