//! Structured surfaces: an editable region of a fragment tree
//!
//! The host editor owns the document and reconciles its own model from the
//! input events it receives, so edits made here always travel through the
//! two-phase notification in [`crate::emitter`].

use super::events::{InputListener, Listeners};
use super::fragment::{Caret, FragmentTree, NodeId};
use super::{EditableSurface, SurfaceId, TypedToken};
use crate::emitter::{self, EditOutcome};
use crate::geometry::Rect;
use crate::span::{self, SpanResolution};

/// Line layout used to report caret rectangles.
///
/// Text flows through the region's fragments in document order and wraps at
/// the region width; a caret sitting on an element boundary has no rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretLayout {
    pub char_width: f32,
    pub line_height: f32,
    pub padding: f32,
}

impl CaretLayout {
    /// First client rectangle of a collapsed caret
    pub fn caret_rect(&self, doc: &FragmentTree, region: NodeId, caret: Caret, bounds: Rect) -> Option<Rect> {
        let offset = doc.chars_before(region, caret)?;
        let inner = (bounds.width - 2.0 * self.padding).max(self.char_width);
        let per_line = ((inner / self.char_width).floor() as usize).max(1);
        let line = offset / per_line;
        let column = offset % per_line;
        Some(Rect::new(
            bounds.x + self.padding + column as f32 * self.char_width,
            bounds.y + self.padding + line as f32 * self.line_height,
            0.0,
            self.line_height,
        ))
    }
}

#[derive(Debug)]
pub struct StructuredSurface {
    id: SurfaceId,
    doc: FragmentTree,
    /// The focused editable element
    focused: NodeId,
    selection: Option<Caret>,
    pub bounds: Rect,
    pub layout: Option<CaretLayout>,
    listeners: Listeners,
}

impl StructuredSurface {
    /// Wrap a document whose `focused` element receives keyboard input
    pub fn new(id: SurfaceId, doc: FragmentTree, focused: NodeId) -> Self {
        Self {
            id,
            doc,
            focused,
            selection: None,
            bounds: Rect::default(),
            layout: None,
            listeners: Listeners::default(),
        }
    }

    /// A fresh editable `div` with the caret inside it
    pub fn editable_div(id: SurfaceId) -> Self {
        let mut doc = FragmentTree::new();
        let root = doc.root();
        let host = doc.append_element(root, "div", Some(true));
        let mut surface = Self::new(id, doc, host);
        surface.selection = Some(Caret::new(host, 0));
        surface
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_layout(mut self, layout: CaretLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn doc(&self) -> &FragmentTree {
        &self.doc
    }

    /// Direct document access for hosts rearranging fragments
    pub fn doc_mut(&mut self) -> &mut FragmentTree {
        &mut self.doc
    }

    pub fn focused(&self) -> NodeId {
        self.focused
    }

    pub fn set_focused(&mut self, node: NodeId) {
        self.focused = node;
    }

    pub fn selection(&self) -> Option<Caret> {
        self.selection
    }

    pub fn set_selection(&mut self, caret: Option<Caret>) {
        self.selection = caret;
    }

    /// Root for span resolution: the editable region around the focused element
    pub fn region(&self) -> NodeId {
        self.doc
            .editable_region(self.focused)
            .or_else(|| self.selection.and_then(|c| self.doc.editable_region(c.node)))
            .unwrap_or(self.focused)
    }

    /// Visible text of the region
    pub fn text(&self) -> String {
        self.doc.text_content(self.region())
    }

    pub fn add_listener(&mut self, node: NodeId, listener: impl InputListener + 'static) {
        self.listeners.add(node, listener);
    }

    /// Native effect of typing text at the caret
    pub fn type_text(&mut self, text: &str) {
        if let Some(caret) = self.selection {
            self.selection = Some(self.doc.type_text(caret, text));
        }
    }

    /// Native effect of Backspace, crossing into the previous fragment at a fragment start
    pub fn delete_backward(&mut self) {
        if let Some(caret) = self.selection {
            let mut caret = span::normalize_caret(&self.doc, caret).unwrap_or(caret);
            if caret.offset == 0 {
                // Backspace at a fragment start eats the end of the previous one
                let fragments = self.doc.text_fragments(self.region());
                if let Some(pos) = fragments.iter().position(|&n| n == caret.node) {
                    if let Some(&prev) = fragments[..pos].iter().rev().find(|&&n| self.doc.text_len(n) > 0) {
                        caret = Caret::new(prev, self.doc.text_len(prev));
                    }
                }
            }
            self.selection = Some(self.doc.delete_backward(caret));
        }
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut FragmentTree, &mut Listeners, &mut Option<Caret>) {
        (&mut self.doc, &mut self.listeners, &mut self.selection)
    }
}

impl EditableSurface for StructuredSurface {
    type Span = SpanResolution;

    fn id(&self) -> SurfaceId {
        self.id
    }

    fn is_editable(&self) -> bool {
        self.doc.is_editable(self.focused)
    }

    fn trigger_offset(&self) -> Option<usize> {
        None
    }

    fn caret_anchor(&self) -> Rect {
        crate::caret::structured_anchor(self)
    }

    fn resolve_span(&self, token: &TypedToken) -> Self::Span {
        match self.selection {
            Some(caret) => span::resolve(&self.doc, self.region(), caret, token.span_len()),
            None => SpanResolution::NoCaret,
        }
    }

    fn apply_edit(&mut self, span: Self::Span, replacement: &str) -> EditOutcome {
        emitter::emit_structured(self, span, replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_into_empty_div() {
        let mut surface = StructuredSurface::editable_div(SurfaceId(3));
        surface.type_text("#ab");
        assert_eq!(surface.text(), "#ab");
        surface.delete_backward();
        assert_eq!(surface.text(), "#a");
    }

    #[test]
    fn test_backspace_at_fragment_start_joins_previous() {
        let mut doc = FragmentTree::new();
        let root = doc.root();
        let host = doc.append_element(root, "div", Some(true));
        doc.append_text(host, "#a");
        let tail = doc.append_text(host, "b");
        let mut surface = StructuredSurface::new(SurfaceId(3), doc, host);
        surface.set_selection(Some(Caret::new(tail, 0)));

        surface.delete_backward();
        assert_eq!(surface.text(), "#b");
        let caret = surface.selection().unwrap();
        assert_eq!(surface.doc().chars_before(host, caret), Some(1));
    }

    #[test]
    fn test_region_is_focused_editable_element() {
        let surface = StructuredSurface::editable_div(SurfaceId(3));
        assert_eq!(surface.region(), surface.focused());
        assert!(surface.is_editable());
    }

    #[test]
    fn test_caret_layout_wraps() {
        let mut surface = StructuredSurface::editable_div(SurfaceId(3));
        surface.type_text("abcdef");
        let layout = CaretLayout {
            char_width: 10.0,
            line_height: 20.0,
            padding: 0.0,
        };
        let bounds = Rect::new(0.0, 0.0, 40.0, 100.0);
        let caret = surface.selection().unwrap();
        let rect = layout
            .caret_rect(surface.doc(), surface.region(), caret, bounds)
            .unwrap();
        // 6 chars at 4 per line: line 1, column 2
        assert_eq!(rect.x, 20.0);
        assert_eq!(rect.y, 20.0);
    }
}
