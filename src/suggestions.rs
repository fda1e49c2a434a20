//! Suggestion List: ranked candidates shown under the caret
//!
//! The list holds a snapshot of candidates plus one highlighted index, and is
//! bound to the surface that opened it. Accepting a candidate does not edit
//! anything here; it yields an [`Accepted`] that the state machine applies.
//! Hosts render [`SuggestionView`] into the element identified by
//! [`SUGGESTIONS_ELEMENT_ID`], looked up again on every render.

use crate::config::ListConfig;
use crate::geometry::{Rect, Size};
use crate::store;
use crate::surface::SurfaceId;

/// Identifier of the single overlay element the host renders the list into
pub const SUGGESTIONS_ELEMENT_ID: &str = "taghelper-suggestions";

/// Candidates from `tags` containing `query`, ignoring case, in store order
pub fn matching_candidates(tags: &[String], query: &str, limit: usize) -> Vec<String> {
    store::filter(tags, query).take(limit).cloned().collect()
}

/// Position of a list with `rows` entries under `anchor`, kept inside the
/// bottom and right viewport edges
pub fn place(anchor: Rect, rows: usize, viewport: Size, config: &ListConfig) -> Rect {
    let height = (rows as f32 * config.row_height).min(config.max_height);
    let top = (viewport.height - height - config.edge_margin).min(anchor.bottom() + config.gap);
    let left = (viewport.width - config.width).min(anchor.x.max(0.0));
    Rect::new(left, top, config.width, height)
}

/// A candidate chosen for a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub surface: SurfaceId,
    pub tag: String,
}

/// What the host draws for the list
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionView {
    pub element_id: &'static str,
    pub items: Vec<String>,
    pub highlighted: Option<usize>,
    pub bounds: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    candidates: Vec<String>,
    highlighted: Option<usize>,
    target: Option<SurfaceId>,
    bounds: Rect,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content and open the list at `bounds`, highlighting the
    /// first entry. An empty candidate set hides the list instead.
    pub fn show(&mut self, candidates: Vec<String>, bounds: Rect, target: SurfaceId) {
        if candidates.is_empty() {
            self.hide();
            return;
        }
        self.candidates = candidates;
        self.highlighted = Some(0);
        self.target = Some(target);
        self.bounds = bounds;
    }

    pub fn hide(&mut self) {
        self.candidates.clear();
        self.highlighted = None;
        self.target = None;
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Cyclic move; with nothing highlighted the first entry is selected
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        });
    }

    /// Pointer hover
    pub fn hover(&mut self, index: usize) {
        if index < self.candidates.len() {
            self.highlighted = Some(index);
        }
    }

    pub fn accept_highlighted(&self) -> Option<Accepted> {
        self.highlighted.and_then(|i| self.accepted(i))
    }

    /// Pointer press on an entry selects it directly
    pub fn press(&self, index: usize) -> Option<Accepted> {
        self.accepted(index)
    }

    fn accepted(&self, index: usize) -> Option<Accepted> {
        Some(Accepted {
            surface: self.target?,
            tag: self.candidates.get(index)?.clone(),
        })
    }

    pub fn view(&self) -> Option<SuggestionView> {
        self.is_visible().then(|| SuggestionView {
            element_id: SUGGESTIONS_ELEMENT_ID,
            items: self.candidates.clone(),
            highlighted: self.highlighted,
            bounds: self.bounds,
        })
    }
}
