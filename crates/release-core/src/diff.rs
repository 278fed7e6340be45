//! Ordered sequence diff over relative path lists.
//!
//! This is an LCS edit script, not a set difference: an element present in
//! both inputs at incompatible positions shows up as removed and re-added.

use similar::{Algorithm, DiffTag, capture_diff_slices};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

/// A run of consecutive elements sharing one [`DiffKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub kind: DiffKind,
    pub values: Vec<String>,
}

impl DiffEntry {
    #[must_use]
    pub fn new(kind: DiffKind, values: Vec<String>) -> Self {
        Self { kind, values }
    }

    #[must_use]
    pub fn is_added(&self) -> bool {
        self.kind == DiffKind::Added
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.kind == DiffKind::Removed
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.kind == DiffKind::Unchanged
    }
}

/// Computes the edit script turning `from` into `to`.
///
/// Entries appear in the order the two sequences diverge. Adjacent runs of
/// the same kind are merged, so identical inputs produce a single
/// `Unchanged` entry and an empty `from` produces a single `Added` entry.
#[must_use]
pub fn diff(from: &[String], to: &[String]) -> Vec<DiffEntry> {
    let mut entries: Vec<DiffEntry> = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, from, to) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_run(&mut entries, DiffKind::Unchanged, &from[old_range]),
            DiffTag::Delete => push_run(&mut entries, DiffKind::Removed, &from[old_range]),
            DiffTag::Insert => push_run(&mut entries, DiffKind::Added, &to[new_range]),
            DiffTag::Replace => {
                push_run(&mut entries, DiffKind::Removed, &from[old_range]);
                push_run(&mut entries, DiffKind::Added, &to[new_range]);
            }
        }
    }

    entries
}

/// Flattens the values of every `Removed` entry, preserving order.
#[must_use]
pub fn removed_values(entries: &[DiffEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|entry| entry.is_removed())
        .flat_map(|entry| entry.values.iter().map(String::as_str))
        .collect()
}

fn push_run(entries: &mut Vec<DiffEntry>, kind: DiffKind, values: &[String]) {
    if values.is_empty() {
        return;
    }
    match entries.last_mut() {
        Some(last) if last.kind == kind => last.values.extend_from_slice(values),
        _ => entries.push(DiffEntry::new(kind, values.to_vec())),
    }
}
