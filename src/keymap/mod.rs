//! Keyboard input model
//!
//! ```text
//! platform key event → Keystroke → classify() → KeyRole → capture state machine
//! ```
//!
//! Key scripts (`#proj{Down}{Enter}`) describe keystroke sequences for the
//! `replay` command and for tests.

mod classify;
mod script;
mod types;

pub use classify::{classify, KeyRole};
pub use script::{parse_key_script, parse_key_string, KeymapError};
pub use types::{KeyCode, Keystroke, Modifiers};
