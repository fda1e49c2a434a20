//! Capture model - the complete state of the tag helper
//!
//! Follows the Elm Architecture: this state is only changed by
//! [`crate::update`] in response to messages and keystrokes.

use crate::config::HelperConfig;
use crate::suggestions::SuggestionList;
use crate::surface::{SurfaceId, TypedToken};

/// The tag being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Surface the trigger was typed on
    pub surface: SurfaceId,
    /// Characters typed since the trigger
    pub buffer: String,
    /// Trigger offset, flat surfaces only
    pub flat_start: Option<usize>,
}

impl Session {
    pub fn new(surface: SurfaceId, flat_start: Option<usize>) -> Self {
        Self {
            surface,
            buffer: String::new(),
            flat_start,
        }
    }

    pub fn token(&self) -> TypedToken {
        TypedToken {
            text: self.buffer.clone(),
            flat_start: self.flat_start,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Composing(Session),
}

#[derive(Debug, Clone, Default)]
pub struct CaptureModel {
    pub config: HelperConfig,
    pub state: CaptureState,
    pub suggestions: SuggestionList,
}

impl CaptureModel {
    pub fn new(config: HelperConfig) -> Self {
        Self {
            config,
            state: CaptureState::Idle,
            suggestions: SuggestionList::new(),
        }
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, CaptureState::Composing(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            CaptureState::Composing(session) => Some(session),
            CaptureState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.state {
            CaptureState::Composing(session) => Some(session),
            CaptureState::Idle => None,
        }
    }

    /// Characters typed since the trigger, empty when idle
    pub fn buffer(&self) -> &str {
        self.session().map_or("", |s| s.buffer.as_str())
    }

    /// Back to idle with the list hidden, returning whether the list was open
    pub fn reset(&mut self) -> bool {
        let was_visible = self.suggestions.is_visible();
        self.state = CaptureState::Idle;
        self.suggestions.hide();
        was_visible
    }
}
