//! Editable surfaces the capture engine can operate on
//!
//! Two kinds exist:
//!
//! - [`FlatSurface`]: one linear buffer with a caret offset (text inputs and
//!   text areas). Edits are direct splices.
//! - [`StructuredSurface`]: a region of a [`FragmentTree`] whose host keeps its
//!   own model. Edits are located by walking fragments back from the caret and
//!   announced through input events.
//!
//! Both implement [`EditableSurface`]; [`Surface`] is the tagged variant the
//! state machine holds so it never inspects surface kinds itself.

mod events;
mod flat;
mod fragment;
mod structured;

pub use events::{EditKind, EventLog, InputEvent, InputListener, InputPhase, Listeners, VetoEdits};
pub use flat::{ColumnMetrics, FlatBuffer, FlatSurface};
pub use fragment::{Caret, FragmentTree, NodeData, NodeId};
pub use structured::{CaretLayout, StructuredSurface};

use crate::emitter::EditOutcome;
use crate::geometry::Rect;

/// Stable identity of a surface, compared across keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// The tag being replaced at commit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedToken {
    /// Characters typed after the trigger
    pub text: String,
    /// Offset of the trigger character on flat surfaces
    pub flat_start: Option<usize>,
}

impl TypedToken {
    /// Characters to replace, counting the trigger
    pub fn span_len(&self) -> usize {
        self.text.chars().count() + 1
    }
}

/// Capabilities shared by every surface kind
pub trait EditableSurface {
    /// Surface-specific description of the text to replace
    type Span;

    fn id(&self) -> SurfaceId;

    fn is_editable(&self) -> bool;

    /// Caret offset to remember when the trigger is typed, if the surface
    /// has stable linear offsets
    fn trigger_offset(&self) -> Option<usize>;

    /// Screen-space anchor for the suggestion list
    fn caret_anchor(&self) -> Rect;

    fn resolve_span(&self, token: &TypedToken) -> Self::Span;

    fn apply_edit(&mut self, span: Self::Span, replacement: &str) -> EditOutcome;

    /// Replace the typed token with `replacement`
    fn replace_token(&mut self, token: &TypedToken, replacement: &str) -> EditOutcome {
        let span = self.resolve_span(token);
        self.apply_edit(span, replacement)
    }
}

#[derive(Debug)]
pub enum Surface {
    Flat(FlatSurface),
    Structured(StructuredSurface),
}

impl Surface {
    pub fn id(&self) -> SurfaceId {
        match self {
            Surface::Flat(s) => s.id(),
            Surface::Structured(s) => s.id(),
        }
    }

    pub fn is_editable(&self) -> bool {
        match self {
            Surface::Flat(s) => s.is_editable(),
            Surface::Structured(s) => s.is_editable(),
        }
    }

    pub fn trigger_offset(&self) -> Option<usize> {
        match self {
            Surface::Flat(s) => s.trigger_offset(),
            Surface::Structured(s) => s.trigger_offset(),
        }
    }

    pub fn caret_anchor(&self) -> Rect {
        match self {
            Surface::Flat(s) => s.caret_anchor(),
            Surface::Structured(s) => s.caret_anchor(),
        }
    }

    pub fn replace_token(&mut self, token: &TypedToken, replacement: &str) -> EditOutcome {
        match self {
            Surface::Flat(s) => s.replace_token(token, replacement),
            Surface::Structured(s) => s.replace_token(token, replacement),
        }
    }

    /// Visible text of the surface
    pub fn text(&self) -> String {
        match self {
            Surface::Flat(s) => s.text(),
            Surface::Structured(s) => s.text(),
        }
    }

    /// Apply the platform's native effect of typing text
    pub fn type_text(&mut self, text: &str) {
        match self {
            Surface::Flat(s) => s.type_text(text),
            Surface::Structured(s) => s.type_text(text),
        }
    }

    /// Apply the platform's native effect of Backspace
    pub fn delete_backward(&mut self) {
        match self {
            Surface::Flat(s) => s.delete_backward(),
            Surface::Structured(s) => s.delete_backward(),
        }
    }

    pub fn as_structured_mut(&mut self) -> Option<&mut StructuredSurface> {
        match self {
            Surface::Structured(s) => Some(s),
            Surface::Flat(_) => None,
        }
    }
}

impl From<FlatSurface> for Surface {
    fn from(surface: FlatSurface) -> Self {
        Surface::Flat(surface)
    }
}

impl From<StructuredSurface> for Surface {
    fn from(surface: StructuredSurface) -> Self {
        Surface::Structured(surface)
    }
}
