//! Command-line argument parsing for the tag helper
//!
//! Supports:
//! - Listing, adding, removing and searching stored tags
//! - Importing (JSON array or lines) and exporting (lines)
//! - Replaying a key script against an in-memory surface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inline #tag autocomplete and tag store
#[derive(Parser, Debug)]
#[command(name = "taghelper", version, about = "Inline #tag autocomplete and tag store")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/taghelper/config.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tag store file (overrides the configured location)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every stored tag
    List,
    /// Add tags to the store
    Add {
        #[arg(required = true, value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Remove tags from the store
    Remove {
        #[arg(required = true, value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Print stored tags containing QUERY (case-insensitive)
    Search { query: String },
    /// Merge tags from a file, or stdin when FILE is `-` or omitted
    Import {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print stored tags one per line
    Export,
    /// Type a key script into an in-memory surface and print the result
    Replay {
        /// Use a rich-text region instead of a plain text input
        #[arg(long)]
        structured: bool,
        /// Seed candidates instead of reading the store
        #[arg(long, value_delimiter = ',', value_name = "TAGS")]
        tags: Vec<String>,
        /// Initial surface text (caret at the end)
        #[arg(long, default_value = "")]
        text: String,
        /// Keys to type, e.g. `#pro{Down}{Enter}`
        script: String,
    },
}

/// Where import text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    Stdin,
    File(PathBuf),
}

impl ImportSource {
    pub fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) if path.as_os_str() != "-" => ImportSource::File(path),
            _ => ImportSource::Stdin,
        }
    }
}
