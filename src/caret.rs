//! Caret Locator: screen anchors for the suggestion list
//!
//! Flat surfaces anchor at their bottom edge, under the caret column when the
//! column metrics are known. Structured surfaces use the first client rect of
//! the collapsed caret and fall back to their own bottom edge when the caret
//! sits on an element boundary that has no rect.

use crate::editable::TextBuffer;
use crate::geometry::Rect;
use crate::surface::{FlatSurface, StructuredSurface};

pub fn flat_anchor(surface: &FlatSurface) -> Rect {
    let bounds = surface.bounds;
    let Some(metrics) = surface.metrics else {
        return bounds.bottom_anchor();
    };

    let (_, column) = surface.buffer().offset_to_position(surface.caret());
    let x = bounds.x + metrics.padding + column as f32 * metrics.char_width;
    Rect::anchor(x.min(bounds.right()), bounds.bottom())
}

pub fn structured_anchor(surface: &StructuredSurface) -> Rect {
    let rect = surface.selection().zip(surface.layout).and_then(|(caret, layout)| {
        layout.caret_rect(surface.doc(), surface.region(), caret, surface.bounds)
    });

    match rect {
        Some(rect) => rect,
        None => {
            tracing::trace!("no caret rect, anchoring to surface bounds");
            surface.bounds.bottom_anchor()
        }
    }
}
