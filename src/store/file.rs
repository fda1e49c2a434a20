//! Tag set persisted as a JSON array of strings
//!
//! Reads tolerate a missing or corrupt file (the set starts empty and the
//! problem is logged). Every write through [`TagStore`] is saved immediately;
//! a failed save is logged and the in-memory set stays authoritative.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::{TagSet, TagStore};

#[derive(Debug)]
pub enum StoreError {
    /// The tag file could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// The tag set could not be encoded
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "tag file {}: {}", path.display(), source),
            Self::Encode(e) => write!(f, "failed to encode tags: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    tags: TagSet,
}

impl JsonFileStore {
    /// Open the store at `path`, loading whatever valid tags it holds
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tags = load_tags(&path);
        Self { path, tags }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Re-read the file, discarding in-memory state
    pub fn reload(&mut self) {
        self.tags = load_tags(&self.path);
    }

    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.tags).map_err(StoreError::Encode)?;
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Saved {} tags to {}", self.tags.len(), self.path.display());
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!("Failed to save tags: {}", e);
        }
    }
}

fn load_tags(path: &Path) -> TagSet {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No tag file at {}, starting empty", path.display());
            return TagSet::new();
        }
        Err(e) => {
            tracing::error!("Failed to read tags from {}: {}", path.display(), e);
            return TagSet::new();
        }
    };

    if contents.trim().is_empty() {
        return TagSet::new();
    }
    match serde_json::from_str::<TagSet>(&contents) {
        Ok(tags) => tags,
        Err(e) => {
            tracing::error!("Malformed tag file {}, treating as empty: {}", path.display(), e);
            TagSet::new()
        }
    }
}

impl TagStore for JsonFileStore {
    fn list(&self) -> Vec<String> {
        self.tags.list()
    }

    fn add(&mut self, tag: &str) {
        if self.tags.insert(tag) {
            self.persist();
        }
    }

    fn remove(&mut self, tag: &str) {
        if self.tags.contains(tag) {
            self.tags.remove(tag);
            self.persist();
        }
    }

    fn merge(&mut self, tags: &[String]) {
        let before = self.tags.len();
        self.tags.merge(tags);
        if self.tags.len() != before {
            self.persist();
        }
    }

    fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
