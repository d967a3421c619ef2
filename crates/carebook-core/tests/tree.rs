use std::collections::BTreeSet;

use carebook_core::models::field::FieldDescriptor;
use carebook_core::query::{fields_by_heading, nesting_level};
use carebook_core::tree::FieldTree;

fn schema() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::heading("H1", "Arrangements"),
        FieldDescriptor::group("A", "Funeral home").under("H1"),
        FieldDescriptor::checkbox("B", "Contract signed").under("H1").child_of("A"),
        FieldDescriptor::radio("C", "Service", &["burial", "cremation"])
            .under("H1")
            .child_of("A"),
        FieldDescriptor::checkbox("D", "Urn chosen").under("H1").child_of("C"),
        FieldDescriptor::checkbox("E", "Obituary written").under("H1"),
        FieldDescriptor::heading("H2", "Documents"),
        FieldDescriptor::group("F", "Papers").under("H2"),
        FieldDescriptor::checkbox("G", "Will located").under("H2").child_of("F"),
    ]
}

fn id_of<'a>(tree: &FieldTree<'a>, idx: usize) -> &'a str {
    tree.field(idx).id.as_deref().unwrap_or_default()
}

#[test]
fn sections_hold_only_roots_in_schema_order() {
    let fields = schema();
    let tree = FieldTree::build(&fields);
    let roots: Vec<_> = tree.roots("H1").iter().map(|&i| id_of(&tree, i)).collect();
    assert_eq!(roots, vec!["A", "E"]);
    let roots: Vec<_> = tree.roots("H2").iter().map(|&i| id_of(&tree, i)).collect();
    assert_eq!(roots, vec!["F"]);
    assert!(tree.roots("nope").is_empty());
}

#[test]
fn headings_in_schema_order() {
    let fields = schema();
    let tree = FieldTree::build(&fields);
    let headings: Vec<_> = tree.headings().iter().map(|&i| id_of(&tree, i)).collect();
    assert_eq!(headings, vec!["H1", "H2"]);
}

fn assert_levels_match(fields: &[FieldDescriptor]) {
    let tree = FieldTree::build(fields);
    for idx in 0..tree.len() {
        assert_eq!(
            tree.level(idx),
            nesting_level(fields[idx].id.as_deref(), fields),
            "field {:?}",
            fields[idx].id
        );
    }
}

#[test]
fn levels_match_flat_resolver() {
    assert_levels_match(&schema());
}

#[test]
fn levels_match_flat_resolver_on_malformed_schemas() {
    assert_levels_match(&[
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::group("Y", "Under heading").under("H1").child_of("H1"),
        FieldDescriptor::checkbox("Z", "Under Y").under("H1").child_of("Y"),
        FieldDescriptor::group("A", "A").under("H1").child_of("B"),
        FieldDescriptor::group("B", "B").under("H1").child_of("A"),
    ]);
    assert_levels_match(&[
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::group("X", "Orphan").under("H1").child_of("ghost"),
        FieldDescriptor::checkbox("W", "Under orphan").under("H1").child_of("X"),
    ]);
    assert_levels_match(&[
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::group("S", "Self").under("H1").child_of("S"),
        FieldDescriptor::group("P", "P").under("H1").child_of("Q"),
        FieldDescriptor::group("Q", "Q").under("H1").child_of("R"),
        FieldDescriptor::group("R", "R").under("H1").child_of("P"),
        FieldDescriptor::group("T", "Tail").under("H1").child_of("Q"),
        FieldDescriptor::checkbox("U", "Tail child").under("H1").child_of("T"),
        FieldDescriptor::checkbox("V", "Under self").under("H1").child_of("S"),
    ]);
}

#[test]
fn subtree_is_preorder() {
    let fields = schema();
    let tree = FieldTree::build(&fields);
    let a = tree.index_of("A").unwrap();
    let ids: Vec<_> = tree.subtree(a).into_iter().map(|i| id_of(&tree, i)).collect();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);
}

#[test]
fn heading_partitions_into_root_subtrees() {
    let fields = schema();
    let tree = FieldTree::build(&fields);
    for &h in tree.headings() {
        let key = fields[h].heading_key().unwrap();
        let mut covered = Vec::new();
        for &root in tree.roots(key) {
            covered.extend(tree.subtree(root));
        }
        let unique: BTreeSet<_> = covered.iter().copied().collect();
        assert_eq!(unique.len(), covered.len(), "no field appears twice");

        let expected: BTreeSet<_> = fields_by_heading(key, &fields)
            .into_iter()
            .map(|f| tree.index_of(f.id.as_deref().unwrap()).unwrap())
            .collect();
        assert_eq!(unique, expected);
    }
}

#[test]
fn cycle_members_become_roots() {
    let fields = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::group("A", "A").under("H1").child_of("B"),
        FieldDescriptor::group("B", "B").under("H1").child_of("A"),
        FieldDescriptor::checkbox("C", "C").under("H1").child_of("A"),
    ];
    let tree = FieldTree::build(&fields);
    let a = tree.index_of("A").unwrap();
    let b = tree.index_of("B").unwrap();
    let c = tree.index_of("C").unwrap();

    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.parent(b), None);
    assert_eq!(tree.parent(c), Some(a));
    assert_eq!(tree.roots("H1"), &[a, b]);
    assert_eq!(tree.level(c), 1);
}

#[test]
fn self_parent_is_a_root() {
    let fields = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::group("S", "Self").under("H1").child_of("S"),
    ];
    let tree = FieldTree::build(&fields);
    assert_eq!(tree.roots("H1"), &[1]);
    assert!(tree.children(1).is_empty());
}

#[test]
fn dangling_and_heading_parents_become_roots() {
    let fields = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::checkbox("X", "Orphan").under("H1").child_of("missing"),
        FieldDescriptor::checkbox("Y", "Under heading").under("H1").child_of("H1"),
    ];
    let tree = FieldTree::build(&fields);
    assert_eq!(tree.roots("H1"), &[1, 2]);
    assert_eq!(tree.level(1), 0);
    assert_eq!(tree.level(2), 0);
}

#[test]
fn heading_key_prefers_declared_heading_id() {
    let mut heading = FieldDescriptor::heading("title-1", "Section");
    heading.heading_id = Some("sec".to_string());
    let fields = vec![heading, FieldDescriptor::checkbox("a", "A").under("sec")];
    let tree = FieldTree::build(&fields);
    assert_eq!(tree.roots("sec"), &[1]);
    assert!(tree.roots("title-1").is_empty());
}

#[test]
fn duplicate_ids_resolve_to_first() {
    let fields = vec![
        FieldDescriptor::heading("H1", "Section"),
        FieldDescriptor::group("dup", "First").under("H1"),
        FieldDescriptor::group("dup", "Second").under("H1"),
        FieldDescriptor::checkbox("kid", "Kid").under("H1").child_of("dup"),
    ];
    let tree = FieldTree::build(&fields);
    assert_eq!(tree.index_of("dup"), Some(1));
    assert_eq!(tree.children(1), &[3]);
    assert!(tree.children(2).is_empty());
}

#[test]
fn empty_schema() {
    let tree = FieldTree::build(&[]);
    assert!(tree.is_empty());
    assert!(tree.headings().is_empty());
}
