//! Arena index over a flat schema.
//!
//! Built once per render pass so that child and section lookups are O(1)
//! rather than a schema scan per node. Parent links that cannot form a finite
//! hierarchy are cut at build time:
//!
//! - a parent id missing from the schema, or naming a heading, is ignored and
//!   the field becomes a root of its own section;
//! - every field on a cyclic parent chain becomes a root; fields hanging off
//!   the cycle keep their links.
//!
//! Duplicate ids resolve to the first field carrying the id.

use std::collections::HashMap;

use crate::models::field::FieldDescriptor;

#[derive(Debug, Clone)]
pub struct FieldTree<'a> {
    fields: &'a [FieldDescriptor],
    by_id: HashMap<&'a str, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    levels: Vec<usize>,
    headings: Vec<usize>,
    sections: HashMap<&'a str, Vec<usize>>,
}

impl<'a> FieldTree<'a> {
    pub fn build(fields: &'a [FieldDescriptor]) -> Self {
        let mut by_id = HashMap::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            if let Some(id) = field.id.as_deref() {
                by_id.entry(id).or_insert(idx);
            }
        }

        let declared: Vec<Option<usize>> = fields
            .iter()
            .map(|field| declared_parent(field, fields, &by_id))
            .collect();

        let on_cycle = cycle_members(&declared);
        let parents: Vec<Option<usize>> = declared
            .iter()
            .enumerate()
            .map(|(idx, parent)| {
                if on_cycle[idx] {
                    tracing::warn!(
                        field_id = fields[idx].id.as_deref().unwrap_or_default(),
                        "field is on a cyclic parent chain, treating as root"
                    );
                    None
                } else {
                    *parent
                }
            })
            .collect();

        let mut children = vec![Vec::new(); fields.len()];
        for (idx, parent) in parents.iter().enumerate() {
            if let Some(p) = parent {
                children[*p].push(idx);
            }
        }

        let levels = resolve_levels(&parents);

        let mut headings = Vec::new();
        let mut sections: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (idx, field) in fields.iter().enumerate() {
            if field.is_heading() {
                if field.heading_key().is_some() {
                    headings.push(idx);
                }
                continue;
            }
            if parents[idx].is_none()
                && let Some(key) = field.heading_id.as_deref()
            {
                sections.entry(key).or_default().push(idx);
            }
        }

        tracing::debug!(
            fields = fields.len(),
            headings = headings.len(),
            "built field tree"
        );

        Self {
            fields,
            by_id,
            parents,
            children,
            levels,
            headings,
            sections,
        }
    }

    pub fn fields(&self) -> &'a [FieldDescriptor] {
        self.fields
    }

    pub fn field(&self, idx: usize) -> &'a FieldDescriptor {
        &self.fields[idx]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// The effective parent after dangling, heading and cyclic links are cut.
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    /// Direct children in schema order.
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    /// Heading fields in schema order.
    pub fn headings(&self) -> &[usize] {
        &self.headings
    }

    /// Top-level fields of the section `heading_key`, in schema order.
    pub fn roots(&self, heading_key: &str) -> &[usize] {
        self.sections
            .get(heading_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn level(&self, idx: usize) -> usize {
        self.levels[idx]
    }

    /// `idx` followed by all of its descendants, depth first in schema order.
    pub fn subtree(&self, idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![idx];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children[next].iter().rev());
        }
        out
    }
}

fn declared_parent(
    field: &FieldDescriptor,
    fields: &[FieldDescriptor],
    by_id: &HashMap<&str, usize>,
) -> Option<usize> {
    if field.is_heading() {
        return None;
    }
    let parent_id = field.parent_id.as_deref()?;
    match by_id.get(parent_id) {
        Some(&p) if fields[p].is_heading() => {
            tracing::warn!(parent_id, "parent is a heading, treating field as root");
            None
        }
        Some(&p) => Some(p),
        None => {
            tracing::debug!(parent_id, "dangling parent reference");
            None
        }
    }
}

/// Mark every node that lies on a cycle of the parent graph.
///
/// Each node has at most one parent, so a walk from any node either ends at a
/// root or runs into a cycle; nodes are visited once overall.
fn cycle_members(parents: &[Option<usize>]) -> Vec<bool> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unvisited; parents.len()];
    let mut on_cycle = vec![false; parents.len()];
    let mut path = Vec::new();

    for start in 0..parents.len() {
        let mut current = Some(start);
        while let Some(node) = current {
            match marks[node] {
                Mark::Unvisited => {
                    marks[node] = Mark::OnPath;
                    path.push(node);
                    current = parents[node];
                }
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&n| n == node) {
                        for &member in &path[pos..] {
                            on_cycle[member] = true;
                        }
                    }
                    break;
                }
                Mark::Done => break,
            }
        }
        for node in path.drain(..) {
            marks[node] = Mark::Done;
        }
    }
    on_cycle
}

/// Depth of each node given an acyclic parent vector.
fn resolve_levels(parents: &[Option<usize>]) -> Vec<usize> {
    let mut levels: Vec<Option<usize>> = vec![None; parents.len()];
    let mut chain = Vec::new();

    for start in 0..parents.len() {
        let mut current = start;
        let base = loop {
            if let Some(level) = levels[current] {
                break level;
            }
            chain.push(current);
            match parents[current] {
                Some(p) => current = p,
                None => break 0,
            }
        };
        // The topmost node in `chain` sits at `base` when it is a root and
        // one below an already resolved ancestor otherwise.
        let mut level = match levels[current] {
            Some(_) => base + 1,
            None => base,
        };
        while let Some(node) = chain.pop() {
            levels[node] = Some(level);
            level += 1;
        }
    }

    levels.into_iter().map(Option::unwrap_or_default).collect()
}
