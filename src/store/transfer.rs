//! Import and export text formats
//!
//! Import accepts a JSON array of strings or newline-separated text. Each
//! entry loses one leading trigger character and surrounding whitespace;
//! empty entries are dropped. Export is the sorted list, one tag per line.

use serde_json::Value;

use super::TagStore;

/// Parse import text into clean tag entries
pub fn parse_import(text: &str, trigger: char) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(values) => {
                let entries = values.iter().filter_map(Value::as_str);
                return clean(entries, trigger);
            }
            Err(e) => {
                tracing::warn!("JSON import failed, reading as lines: {}", e);
            }
        }
    }

    clean(trimmed.lines(), trigger)
}

fn clean<'a>(entries: impl Iterator<Item = &'a str>, trigger: char) -> Vec<String> {
    entries.filter_map(|entry| clean_tag(entry, trigger)).collect()
}

/// One entry as a stored tag: trimmed, with a single leading trigger removed.
/// `None` when nothing is left.
pub fn clean_tag(entry: &str, trigger: char) -> Option<String> {
    let entry = entry.trim();
    let tag = entry.strip_prefix(trigger).unwrap_or(entry).trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Merge imported tags into `store`, returning how many were new.
///
/// Input with no usable entries leaves the store untouched.
pub fn import_text(store: &mut dyn TagStore, text: &str, trigger: char) -> usize {
    let entries = parse_import(text, trigger);
    if entries.is_empty() {
        tracing::warn!("Import contained no usable tags");
        return 0;
    }
    let before = store.list().len();
    store.merge(&entries);
    let added = store.list().len() - before;
    tracing::info!("Imported {} entries, {} new", entries.len(), added);
    added
}

pub fn export_text(store: &dyn TagStore) -> String {
    store.list().join("\n")
}
