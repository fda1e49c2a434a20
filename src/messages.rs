//! Message types for the Elm-style architecture
//!
//! State changes flow through [`Msg`] values; keystrokes travel as a mutable
//! [`KeyEvent`] so the engine can suppress their default effect.

use crate::keymap::Keystroke;
use crate::surface::SurfaceId;

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SuggestionList,
    /// The floating button that opens tag management
    TriggerButton,
    Elsewhere,
}

/// Pointer interaction with the suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Pointer entered a list entry
    Hover(usize),
    /// Pointer pressed (not released) on a list entry
    Press(usize),
    Click(ClickTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Deferred list refresh scheduled by a keystroke on `surface`
    RefreshSuggestions { surface: SurfaceId },
    /// Platform focus moved
    FocusChanged(Option<SurfaceId>),
    Pointer(PointerMsg),
}

/// A keyboard event as seen by the capture engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub keystroke: Keystroke,
    /// Set once the engine processed this event; repeated deliveries are ignored
    pub handled: bool,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(keystroke: Keystroke) -> Self {
        Self {
            keystroke,
            handled: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Keep the key away from the host surface entirely
    pub fn consume(&mut self) {
        self.default_prevented = true;
        self.propagation_stopped = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.default_prevented
    }
}
