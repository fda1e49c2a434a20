//! Helper configuration persistence
//!
//! Stores user preferences in `~/.config/taghelper/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Placement settings for the suggestion list overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Width reserved for the list when clamping to the right viewport edge
    pub width: f32,
    /// Height of a single candidate row
    pub row_height: f32,
    /// Maximum list height before it scrolls
    pub max_height: f32,
    /// Distance kept from the bottom viewport edge
    pub edge_margin: f32,
    /// Vertical gap between the caret anchor and the list
    pub gap: f32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            row_height: 20.0,
            max_height: 200.0,
            edge_margin: 10.0,
            gap: 4.0,
        }
    }
}

/// Helper configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Character that starts a tag
    #[serde(default = "default_trigger")]
    pub trigger: char,

    /// Maximum number of candidates shown in the suggestion list
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Characters that end a tag without replacing it
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    #[serde(default)]
    pub list: ListConfig,

    /// Overrides `~/.config/taghelper/tags.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

fn default_trigger() -> char {
    '#'
}

fn default_max_suggestions() -> usize {
    20
}

fn default_punctuation() -> String {
    ".,;:!?".to_string()
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            max_suggestions: default_max_suggestions(),
            punctuation: default_punctuation(),
            list: ListConfig::default(),
            store_path: None,
        }
    }
}

impl HelperConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolved location of the persisted tag set
    pub fn store_path(&self) -> Option<PathBuf> {
        self.store_path
            .clone()
            .or_else(crate::config_paths::tags_file)
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(c)
    }
}
