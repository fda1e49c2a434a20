//! Synthetic input events delivered to structured surfaces
//!
//! A host editor that keeps its own document model learns about programmatic
//! edits through a pre-edit (`BeforeInput`, cancelable) and post-edit
//! (`Input`) pair. Listeners attach to nodes and see events that target the
//! node or any of its descendants.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::fragment::{FragmentTree, NodeId};

/// What kind of edit an event announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Plain insertion at the caret
    InsertText,
    /// Replacement of a located span
    InsertReplacementText,
}

impl EditKind {
    /// Platform name of the edit kind
    pub fn as_str(self) -> &'static str {
        match self {
            EditKind::InsertText => "insertText",
            EditKind::InsertReplacementText => "insertReplacementText",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    BeforeInput,
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub phase: InputPhase,
    pub kind: EditKind,
    /// Text the edit inserts
    pub data: String,
    pub target: NodeId,
    default_prevented: bool,
}

impl InputEvent {
    pub fn new(phase: InputPhase, kind: EditKind, data: &str, target: NodeId) -> Self {
        Self {
            phase,
            kind,
            data: data.to_string(),
            target,
            default_prevented: false,
        }
    }

    /// Only pre-edit events can be vetoed
    pub fn cancelable(&self) -> bool {
        self.phase == InputPhase::BeforeInput
    }

    pub fn prevent_default(&mut self) {
        if self.cancelable() {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something that observes input events on a node
pub trait InputListener {
    fn on_input(&mut self, event: &mut InputEvent);
}

impl<F> InputListener for F
where
    F: FnMut(&mut InputEvent),
{
    fn on_input(&mut self, event: &mut InputEvent) {
        self(event)
    }
}

/// Listener that vetoes every pre-edit event, as a host editor does when it
/// prefers to apply replacements through its own model
#[derive(Debug, Clone, Copy, Default)]
pub struct VetoEdits;

impl InputListener for VetoEdits {
    fn on_input(&mut self, event: &mut InputEvent) {
        event.prevent_default();
    }
}

/// Shared log of every event a listener saw
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<InputEvent>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InputEvent> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl InputListener for EventLog {
    fn on_input(&mut self, event: &mut InputEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

/// Listeners registered on the nodes of one surface
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(NodeId, Box<dyn InputListener>)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn add(&mut self, node: NodeId, listener: impl InputListener + 'static) {
        self.entries.push((node, Box::new(listener)));
    }

    /// Deliver an event to the target and then to each ancestor.
    ///
    /// Returns `false` when a listener vetoed the event.
    pub fn dispatch(&mut self, doc: &FragmentTree, event: &mut InputEvent) -> bool {
        let mut current = Some(event.target);
        while let Some(node) = current {
            for (_, listener) in self.entries.iter_mut().filter(|(n, _)| *n == node) {
                listener.on_input(event);
            }
            current = doc.parent(node);
        }
        !event.default_prevented()
    }
}
