//! Classification of keystrokes into the roles the capture engine reacts to

use super::types::{KeyCode, Keystroke};
use crate::config::HelperConfig;

/// What a keystroke means to tag capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// The configured trigger character
    Trigger,
    /// A character that extends the tag being typed
    Printable(char),
    /// Backspace
    Delete,
    /// Enter / Return / Tab
    Commit,
    /// Space
    Separator,
    /// One of the configured punctuation characters
    Punctuation(char),
    HighlightUp,
    HighlightDown,
    /// Escape
    Cancel,
    /// Ignored by the engine
    Other,
}

impl KeyRole {
    /// Keys that finish the tag being typed
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            KeyRole::Commit | KeyRole::Separator | KeyRole::Punctuation(_)
        )
    }

    /// Keys that accept the highlighted suggestion while the list is open
    pub fn accepts_suggestion(self) -> bool {
        matches!(self, KeyRole::Commit | KeyRole::Separator)
    }
}

/// Classify a keystroke against the current configuration.
///
/// The trigger is recognized regardless of modifiers because some layouts
/// need AltGr or Shift to produce it. Everything else that inserts text
/// requires the absence of ctrl/alt/meta.
pub fn classify(stroke: &Keystroke, config: &HelperConfig) -> KeyRole {
    match stroke.key {
        KeyCode::Char(c) if c == config.trigger => KeyRole::Trigger,
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Tab => KeyRole::Commit,
        KeyCode::Space => KeyRole::Separator,
        KeyCode::Backspace => KeyRole::Delete,
        KeyCode::Escape => KeyRole::Cancel,
        KeyCode::Up => KeyRole::HighlightUp,
        KeyCode::Down => KeyRole::HighlightDown,
        KeyCode::Char(c) if config.is_punctuation(c) => KeyRole::Punctuation(c),
        KeyCode::Char(c) if stroke.mods.produces_text() && !c.is_control() => {
            KeyRole::Printable(c)
        }
        _ => KeyRole::Other,
    }
}
