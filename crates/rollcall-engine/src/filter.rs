//! Case-insensitive substring search over roster records.
//!
//! Blank text (empty after trimming) matches everything. Otherwise the text
//! is compared untrimmed, so `"  john  "` does not match `"user.john"`.

use rollcall_types::Searchable;

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Whether `field` matches the search `text`.
pub fn matches(field: &str, text: &str) -> bool {
    if is_blank(text) {
        return true;
    }
    contains_lowercase(field, &text.to_lowercase())
}

/// Whether any searchable key of `record` matches `text`.
pub fn record_matches<T: Searchable>(record: &T, text: &str) -> bool {
    if is_blank(text) {
        return true;
    }
    let needle = text.to_lowercase();
    record_matches_lowercase(record, &needle)
}

/// Records matching `text`, in their original order.
pub fn filter_records<T: Searchable + Clone>(records: &[T], text: &str) -> Vec<T> {
    if is_blank(text) {
        return records.to_vec();
    }
    let needle = text.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches_lowercase(*record, &needle))
        .cloned()
        .collect()
}

fn record_matches_lowercase<T: Searchable>(record: &T, needle: &str) -> bool {
    contains_lowercase(record.search_key(), needle)
        || record
            .secondary_search_key()
            .is_some_and(|key| contains_lowercase(key, needle))
}

fn contains_lowercase(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}
