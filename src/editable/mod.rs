//! Character-indexed text storage for flat editing surfaces.
//!
//! - [`StringBuffer`]: single-line inputs (backed by `String`)
//! - [`RopeBuffer`]: multi-line text areas (backed by `ropey::Rope`)

mod buffer;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer};
