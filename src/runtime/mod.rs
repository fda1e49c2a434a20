//! Runtime module - event loop integration
//!
//! - `app` - the event loop: keystrokes, pointer input, deferred messages
//! - `input` - the platform's native effect of a key on a surface

pub mod app;
pub mod input;

pub use app::{Overlay, Runtime};
pub use input::apply_native_key;
