//! Flat surfaces: a single linear text buffer with a caret offset

use std::ops::Range;

use super::{EditableSurface, SurfaceId, TypedToken};
use crate::editable::{RopeBuffer, StringBuffer, TextBuffer};
use crate::emitter::{self, EditOutcome};
use crate::geometry::Rect;

/// Backing store of a flat surface
#[derive(Debug, Clone)]
pub enum FlatBuffer {
    /// Single-line text input
    Line(StringBuffer),
    /// Multi-line text area
    Area(RopeBuffer),
}

impl TextBuffer for FlatBuffer {
    fn len_chars(&self) -> usize {
        match self {
            FlatBuffer::Line(b) => b.len_chars(),
            FlatBuffer::Area(b) => b.len_chars(),
        }
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        match self {
            FlatBuffer::Line(b) => b.offset_to_position(offset),
            FlatBuffer::Area(b) => b.offset_to_position(offset),
        }
    }

    fn content(&self) -> String {
        match self {
            FlatBuffer::Line(b) => b.content(),
            FlatBuffer::Area(b) => b.content(),
        }
    }

    fn insert(&mut self, offset: usize, text: &str) {
        match self {
            FlatBuffer::Line(b) => b.insert(offset, text),
            FlatBuffer::Area(b) => b.insert(offset, text),
        }
    }

    fn remove(&mut self, range: Range<usize>) {
        match self {
            FlatBuffer::Line(b) => b.remove(range),
            FlatBuffer::Area(b) => b.remove(range),
        }
    }
}

/// Monospace metrics used to find the caret column on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMetrics {
    pub char_width: f32,
    /// Inner padding between the surface edge and the first column
    pub padding: f32,
}

#[derive(Debug, Clone)]
pub struct FlatSurface {
    id: SurfaceId,
    buffer: FlatBuffer,
    caret: usize,
    pub bounds: Rect,
    /// Unknown metrics anchor the list under the surface's left edge
    pub metrics: Option<ColumnMetrics>,
    pub editable: bool,
}

impl FlatSurface {
    /// Single-line input with the caret at the end
    pub fn line(id: SurfaceId, text: &str) -> Self {
        Self::with_buffer(id, FlatBuffer::Line(StringBuffer::from_text(text)))
    }

    /// Multi-line text area with the caret at the end
    pub fn area(id: SurfaceId, text: &str) -> Self {
        Self::with_buffer(id, FlatBuffer::Area(RopeBuffer::from_text(text)))
    }

    fn with_buffer(id: SurfaceId, buffer: FlatBuffer) -> Self {
        let caret = buffer.len_chars();
        Self {
            id,
            buffer,
            caret,
            bounds: Rect::default(),
            metrics: None,
            editable: true,
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_metrics(mut self, metrics: ColumnMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.buffer.len_chars());
    }

    pub fn buffer(&self) -> &FlatBuffer {
        &self.buffer
    }

    /// Native effect of typing text at the caret
    pub fn type_text(&mut self, text: &str) {
        self.buffer.insert(self.caret, text);
        self.caret += text.chars().count();
    }

    /// Native effect of Backspace
    pub fn delete_backward(&mut self) {
        if self.caret > 0 {
            self.buffer.remove(self.caret - 1..self.caret);
            self.caret -= 1;
        }
    }

    /// Direct buffer splice; the caret lands after the replacement
    pub(crate) fn splice(&mut self, range: Range<usize>, replacement: &str) {
        self.caret = self.buffer.splice(range, replacement);
    }
}

impl EditableSurface for FlatSurface {
    type Span = Option<Range<usize>>;

    fn id(&self) -> SurfaceId {
        self.id
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn trigger_offset(&self) -> Option<usize> {
        Some(self.caret)
    }

    fn caret_anchor(&self) -> Rect {
        crate::caret::flat_anchor(self)
    }

    /// From the remembered trigger offset to the current caret
    fn resolve_span(&self, token: &TypedToken) -> Self::Span {
        let start = token.flat_start?;
        Some(start..self.caret.max(start))
    }

    fn apply_edit(&mut self, span: Self::Span, replacement: &str) -> EditOutcome {
        emitter::emit_flat(self, span, replacement)
    }
}
