//! Case-insensitive prefix filtering over a candidate list.

/// Keep the entries whose lowercase form starts with `query`'s lowercase
/// form, preserving input order. An empty query matches every entry.
pub fn filter_prefix(entries: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}
