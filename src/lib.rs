//! Tag helper - inline #tag autocomplete for editable surfaces
//!
//! This crate provides the core types and logic for capturing hashtags as
//! they are typed, suggesting previously used tags, and replacing the typed
//! token with the chosen tag. It follows the Elm Architecture pattern:
//! keystrokes and messages go through [`update`], which returns [`Cmd`]s
//! for the [`runtime`] to execute.

pub mod caret;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod emitter;
pub mod geometry;
pub mod host;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod span;
pub mod store;
pub mod suggestions;
pub mod surface;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::HelperConfig;
pub use host::{Host, Page};
pub use messages::{KeyEvent, Msg};
pub use model::CaptureModel;
pub use runtime::Runtime;
pub use store::TagStore;
