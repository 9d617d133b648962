//! Edit scripts: ordered runs of unchanged/added/removed text.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Classification of a run of diff output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present and byte-identical on both sides.
    Unchanged,
    /// Present only on the "after" side.
    Added,
    /// Present only on the "before" side.
    Removed,
}

/// A maximal run of consecutive same-kind diff output.
///
/// `text` may contain embedded newlines; hunks are coalesced so no two
/// adjacent hunks share a kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub kind: ChangeKind,
    pub text: String,
}

/// The full diff between two texts, as an ordered hunk sequence.
///
/// Reconstruction invariant: concatenating the text of {removed, unchanged}
/// hunks reproduces the "before" input exactly, and {added, unchanged} the
/// "after" input. Empty-vs-empty input yields an empty script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    pub hunks: Vec<Hunk>,
}

impl EditScript {
    /// True when the script holds no hunks at all.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// True when any hunk is an addition or removal.
    pub fn has_changes(&self) -> bool {
        self.hunks
            .iter()
            .any(|hunk| hunk.kind != ChangeKind::Unchanged)
    }

    /// Reassembles the "before" text from removed and unchanged hunks.
    pub fn reconstruct_before(&self) -> String {
        self.reconstruct(ChangeKind::Removed)
    }

    /// Reassembles the "after" text from added and unchanged hunks.
    pub fn reconstruct_after(&self) -> String {
        self.reconstruct(ChangeKind::Added)
    }

    fn reconstruct(&self, side: ChangeKind) -> String {
        self.hunks
            .iter()
            .filter(|hunk| hunk.kind == ChangeKind::Unchanged || hunk.kind == side)
            .map(|hunk| hunk.text.as_str())
            .collect()
    }
}

/// Computes a deterministic line-level edit script between two texts.
///
/// Myers diff over lines via the `similar` crate: minimal in the standard
/// sense, identical output for identical inputs on every invocation, and
/// `Unchanged` runs only where the spans are byte-identical. Within a
/// replaced region, removals precede additions, so a full replacement with
/// no shared lines comes out as exactly one removed hunk then one added one.
pub fn diff_lines(before: &str, after: &str) -> EditScript {
    let diff = TextDiff::from_lines(before, after);
    let mut hunks: Vec<Hunk> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => ChangeKind::Unchanged,
            ChangeTag::Insert => ChangeKind::Added,
            ChangeTag::Delete => ChangeKind::Removed,
        };
        match hunks.last_mut() {
            Some(hunk) if hunk.kind == kind => hunk.text.push_str(change.value()),
            _ => hunks.push(Hunk {
                kind,
                text: change.value().to_owned(),
            }),
        }
    }
    EditScript { hunks }
}
