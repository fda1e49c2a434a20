//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use taghelper::config::HelperConfig;
use taghelper::geometry::Rect;
use taghelper::host::Page;
use taghelper::runtime::Runtime;
use taghelper::store::{TagSet, TagStore};
use taghelper::surface::{ColumnMetrics, FlatSurface, StructuredSurface, Surface, SurfaceId};

pub const INPUT: SurfaceId = SurfaceId(1);
pub const EDITOR: SurfaceId = SurfaceId(2);

/// Store that lists tags in insertion order instead of sorting them.
///
/// Lets a test pin the exact candidate order the list shows.
#[derive(Debug, Clone, Default)]
pub struct OrderedStore(pub Vec<String>);

impl OrderedStore {
    pub fn new(tags: &[&str]) -> Self {
        Self(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl TagStore for OrderedStore {
    fn list(&self) -> Vec<String> {
        self.0.clone()
    }

    fn add(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.0.iter().any(|t| t == tag) {
            self.0.push(tag.to_string());
        }
    }

    fn remove(&mut self, tag: &str) {
        self.0.retain(|t| t != tag);
    }

    fn merge(&mut self, tags: &[String]) {
        for tag in tags {
            self.add(tag);
        }
    }
}

pub fn tag_set(tags: &[&str]) -> TagSet {
    tags.iter().collect()
}

/// Single-line input with known geometry
pub fn input(text: &str) -> FlatSurface {
    FlatSurface::line(INPUT, text)
        .with_bounds(Rect::new(100.0, 50.0, 300.0, 24.0))
        .with_metrics(ColumnMetrics {
            char_width: 8.0,
            padding: 2.0,
        })
}

/// Editable div already holding `text`, caret at the end
pub fn editor(text: &str) -> StructuredSurface {
    let mut surface =
        StructuredSurface::editable_div(EDITOR).with_bounds(Rect::new(100.0, 200.0, 400.0, 120.0));
    surface.type_text(text);
    surface
}

/// A page with one focused surface
pub fn page_with(surface: impl Into<Surface>) -> Page {
    let mut page = Page::default();
    let id = page.add_surface(surface);
    page.focus(Some(id));
    page
}

pub fn runtime<S: TagStore>(surface: impl Into<Surface>, store: S) -> Runtime<S> {
    Runtime::new(HelperConfig::default(), page_with(surface), store)
}

pub fn surface_text<S: TagStore>(rt: &Runtime<S>, id: SurfaceId) -> String {
    rt.page.surface(id).map(|s| s.text()).unwrap_or_default()
}

pub fn structured<S: TagStore>(rt: &mut Runtime<S>, id: SurfaceId) -> &mut StructuredSurface {
    rt.page
        .surface_mut(id)
        .and_then(|s| s.as_structured_mut())
        .expect("structured surface")
}

pub fn shown<S: TagStore>(rt: &Runtime<S>) -> Option<Vec<String>> {
    rt.suggestions().map(|v| v.items.clone())
}
