//! Span Resolver: locate the typed token inside a fragment tree
//!
//! Only the caret end of the token is known at commit time. The start is found
//! by walking back `len(token) + 1` characters (the trigger included) through
//! the region's text fragments in document order, so it does not matter how
//! the platform split or merged fragments while the user was typing.

use crate::surface::{Caret, FragmentTree, NodeId};

/// Where a structured replacement should happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanResolution {
    /// Replace everything between two text carets. `start == end` when there
    /// was not enough text before the caret; the replacement is then inserted.
    Span { start: Caret, end: Caret },
    /// No text fragment near the caret: insert at the caret without deleting
    InsertAt(Caret),
    /// The surface has no selection
    NoCaret,
}

impl SpanResolution {
    /// Whether nothing would be deleted
    pub fn is_collapsed(&self) -> bool {
        match self {
            SpanResolution::Span { start, end } => start == end,
            _ => true,
        }
    }
}

/// Move an element caret onto the nearest adjacent text fragment.
///
/// After a non-zero offset the previous child is descended through its last
/// children; at offset zero the child at the caret is descended through its
/// first children. Returns `None` when no text fragment is found.
pub fn normalize_caret(doc: &FragmentTree, caret: Caret) -> Option<Caret> {
    if doc.is_text(caret.node) {
        return Some(Caret::new(caret.node, caret.offset.min(doc.text_len(caret.node))));
    }

    let children = doc.children(caret.node);
    if caret.offset > 0 && !children.is_empty() {
        let prev = *children.get(caret.offset - 1)?;
        let leaf = doc.last_leaf(prev);
        return doc.is_text(leaf).then(|| Caret::new(leaf, doc.text_len(leaf)));
    }

    let next = *children.get(caret.offset)?;
    let leaf = doc.first_leaf(next);
    doc.is_text(leaf).then(|| Caret::new(leaf, 0))
}

/// Resolve the `len` characters ending at `caret` within `root`
pub fn resolve(doc: &FragmentTree, root: NodeId, caret: Caret, len: usize) -> SpanResolution {
    let Some(end) = normalize_caret(doc, caret) else {
        tracing::debug!(?caret, "no text fragment at caret, falling back to insertion");
        return SpanResolution::InsertAt(caret);
    };

    let start = walk_back(doc, root, end, len).unwrap_or_else(|| {
        tracing::debug!(len, "not enough text before caret, inserting without deletion");
        end
    });
    SpanResolution::Span { start, end }
}

fn walk_back(doc: &FragmentTree, root: NodeId, end: Caret, len: usize) -> Option<Caret> {
    let fragments = doc.text_fragments(root);
    let index = fragments.iter().position(|&n| n == end.node)?;

    let mut remaining = len;
    for (i, &node) in fragments[..=index].iter().enumerate().rev() {
        let available = if i == index { end.offset } else { doc.text_len(node) };
        if available >= remaining {
            return Some(Caret::new(node, available - remaining));
        }
        remaining -= available;
    }
    None
}
