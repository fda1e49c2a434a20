//! Edit Emitter: apply a token replacement to a surface
//!
//! Flat surfaces are spliced directly. Structured surfaces go through a
//! two-phase notification: a cancelable `BeforeInput` announces the edit, and
//! only when nobody vetoes it is the tree mutated and an `Input` dispatched so
//! the host can reconcile its own model. A veto is an ordinary outcome.

use std::ops::Range;

use crate::span::SpanResolution;
use crate::surface::{
    Caret, EditKind, FlatSurface, FragmentTree, InputEvent, InputPhase, Listeners, NodeId,
    StructuredSurface,
};

/// What happened to the surface text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The typed span was replaced
    Replaced,
    /// Span resolution failed; the replacement was inserted at the caret
    Inserted,
    /// The host vetoed the pre-edit notification; nothing changed
    Vetoed,
    /// There was no caret or start offset to edit at; nothing changed
    NoCaret,
}

pub fn emit_flat(surface: &mut FlatSurface, span: Option<Range<usize>>, replacement: &str) -> EditOutcome {
    let Some(range) = span else {
        tracing::debug!("flat surface has no token start, skipping edit");
        return EditOutcome::NoCaret;
    };
    surface.splice(range, replacement);
    EditOutcome::Replaced
}

pub fn emit_structured(surface: &mut StructuredSurface, span: SpanResolution, replacement: &str) -> EditOutcome {
    let region = surface.region();
    let focused = surface.focused();
    let (doc, listeners, selection) = surface.parts_mut();

    let (start, end, kind) = match span {
        SpanResolution::Span { start, end } => (start, end, EditKind::InsertReplacementText),
        SpanResolution::InsertAt(caret) => (caret, caret, EditKind::InsertText),
        SpanResolution::NoCaret => {
            tracing::debug!("no selection on structured surface, skipping edit");
            return EditOutcome::NoCaret;
        }
    };

    let mut notifier = Notifier {
        doc,
        listeners,
        focused,
        kind,
        data: replacement,
    };
    if !notifier.send(InputPhase::BeforeInput, region) {
        tracing::debug!(kind = kind.as_str(), "pre-edit vetoed by host, leaving text untouched");
        return EditOutcome::Vetoed;
    }

    if start != end {
        notifier.doc.delete_range(start, end);
    }
    let node = notifier.doc.create_text(replacement);
    notifier.doc.insert_node_at(start, node);
    *selection = notifier.doc.caret_after(node);

    let target = notifier.doc.editable_region(node).unwrap_or(region);
    notifier.send(InputPhase::Input, target);

    match span {
        SpanResolution::InsertAt(_) => {
            tracing::warn!("span not resolved, inserted replacement at caret");
            EditOutcome::Inserted
        }
        _ => EditOutcome::Replaced,
    }
}

/// Delivers one phase of an edit to a target and to the focused element
struct Notifier<'a> {
    doc: &'a mut FragmentTree,
    listeners: &'a mut Listeners,
    focused: NodeId,
    kind: EditKind,
    data: &'a str,
}

impl Notifier<'_> {
    /// Returns `false` when any listener vetoed the event
    fn send(&mut self, phase: InputPhase, target: NodeId) -> bool {
        let mut allowed = self.dispatch(phase, target);
        // The focused element hears the event too unless it already bubbled there
        if !self.doc.contains(self.focused, target) {
            allowed &= self.dispatch(phase, self.focused);
        }
        allowed
    }

    fn dispatch(&mut self, phase: InputPhase, target: NodeId) -> bool {
        let mut event = InputEvent::new(phase, self.kind, self.data, target);
        self.listeners.dispatch(self.doc, &mut event)
    }
}
