//! In-memory tag set

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TagStore;

/// Sorted, deduplicated tags. Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Insert a tag, returning whether it was new
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.tags.insert(tag.to_string())
    }
}

impl TagStore for TagSet {
    fn list(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    fn add(&mut self, tag: &str) {
        self.insert(tag);
    }

    fn remove(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    fn merge(&mut self, tags: &[String]) {
        for tag in tags {
            self.insert(tag);
        }
    }

    fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}
