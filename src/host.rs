//! The page hosting editable surfaces
//!
//! The engine never keeps a reference to a surface between calls. It asks the
//! [`Host`] for the active surface on every keystroke and compares identities.

use crate::geometry::Size;
use crate::surface::{Surface, SurfaceId};

pub trait Host {
    /// The focused surface, if it accepts text
    fn active_surface(&mut self) -> Option<&mut Surface>;

    /// Viewport size used to clamp overlays
    fn viewport(&self) -> Size;
}

/// A page holding surfaces and platform focus
#[derive(Debug)]
pub struct Page {
    surfaces: Vec<Surface>,
    focus: Option<SurfaceId>,
    viewport: Size,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 800.0))
    }
}

impl Page {
    pub fn new(viewport: Size) -> Self {
        Self {
            surfaces: Vec::new(),
            focus: None,
            viewport,
        }
    }

    /// Add a surface, replacing any existing one with the same id
    pub fn add_surface(&mut self, surface: impl Into<Surface>) -> SurfaceId {
        let surface = surface.into();
        let id = surface.id();
        self.surfaces.retain(|s| s.id() != id);
        self.surfaces.push(surface);
        id
    }

    pub fn remove_surface(&mut self, id: SurfaceId) -> Option<Surface> {
        let index = self.surfaces.iter().position(|s| s.id() == id)?;
        if self.focus == Some(id) {
            self.focus = None;
        }
        Some(self.surfaces.remove(index))
    }

    pub fn focus(&mut self, id: Option<SurfaceId>) {
        self.focus = id.filter(|id| self.surface(*id).is_some());
    }

    pub fn focused(&self) -> Option<SurfaceId> {
        self.focus
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.id() == id)
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.iter_mut().find(|s| s.id() == id)
    }

    /// The focused surface regardless of editability
    pub fn focused_surface_mut(&mut self) -> Option<&mut Surface> {
        let id = self.focus?;
        self.surface_mut(id)
    }
}

impl Host for Page {
    fn active_surface(&mut self) -> Option<&mut Surface> {
        self.focused_surface_mut().filter(|s| s.is_editable())
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}
