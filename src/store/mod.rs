//! Tag storage
//!
//! The capture engine treats storage as a synchronous collaborator behind
//! [`TagStore`]. Every implementation keeps its tags deduplicated and sorted,
//! so `list()` can be used for display and matching directly.

mod file;
mod memory;
mod transfer;

pub use file::{JsonFileStore, StoreError};
pub use memory::TagSet;
pub use transfer::{clean_tag, export_text, import_text, parse_import};

/// A set of tag strings (case-sensitive identity)
pub trait TagStore {
    /// All tags in sorted order
    fn list(&self) -> Vec<String>;

    /// Add one tag; surrounding whitespace is trimmed and empty tags ignored
    fn add(&mut self, tag: &str);

    fn remove(&mut self, tag: &str);

    /// Union with `tags`
    fn merge(&mut self, tags: &[String]);

    fn contains(&self, tag: &str) -> bool {
        self.list().iter().any(|t| t == tag)
    }
}

/// Tags containing `query`, ignoring case, in the order given
pub fn filter<'a>(tags: &'a [String], query: &str) -> impl Iterator<Item = &'a String> + 'a {
    let query = query.to_lowercase();
    tags.iter()
        .filter(move |tag| tag.to_lowercase().contains(&query))
}

/// Management search: every stored tag matching `query`
pub fn search(store: &dyn TagStore, query: &str) -> Vec<String> {
    let tags = store.list();
    filter(&tags, query).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_ignores_case() {
        let mut store = TagSet::new();
        store.merge(&["Rust".to_string(), "trust".to_string(), "go".to_string()]);
        assert_eq!(search(&store, "RUST"), vec!["Rust", "trust"]);
        assert_eq!(search(&store, "").len(), 3);
    }
}
