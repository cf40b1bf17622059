use crate::models::Entry;

/// Entries whose raw text contains `query`, ignoring case, newest day first.
///
/// Same-day entries keep their log order. A blank query matches nothing.
pub fn search<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut hits: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.text.to_lowercase().contains(&needle))
        .collect();
    hits.sort_by(|a, b| b.date.cmp(&a.date));
    hits
}
