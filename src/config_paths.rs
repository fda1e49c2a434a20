//! On-disk layout of taghelper's state
//!
//! ```text
//! <config dir>/taghelper/
//! ├── config.yaml          trigger, punctuation, list sizing
//! ├── tags.json            the tag store, a sorted JSON array of strings
//! └── logs/
//!     └── taghelper.log.*  debug log, rotated daily
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` (falling back to `~/.config`) on
//! Unix and macOS, and `%APPDATA%` on Windows. The store location can be
//! overridden by `store_path` in config.yaml or `--store` on the command line.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "taghelper";
const CONFIG_FILE: &str = "config.yaml";
const TAGS_FILE: &str = "tags.json";
const LOGS_DIR: &str = "logs";

/// Directory holding every taghelper file, if the platform provides one
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// Helper settings read by [`crate::config::HelperConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Default location of the persisted tag store
pub fn tags_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(TAGS_FILE))
}

/// Create the logs directory (and its parents), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join(LOGS_DIR);
    create_all(&dir)?;
    Ok(dir)
}

fn create_all(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}
