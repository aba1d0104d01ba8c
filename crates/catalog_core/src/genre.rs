//! Genre-list set operations.
//!
//! Genre lists travel as ordered sequences but behave as sets. Matching is
//! exact and case-sensitive.

use std::collections::HashSet;

/// Union of `existing` and `added`.
///
/// Existing entries keep their order and come first, followed by the added
/// entries in the order given. Duplicates are dropped, first occurrence wins.
///
/// # Examples
///
/// ```
/// use catalog_core::merge_genres;
///
/// let existing = vec!["Action".to_string()];
/// let added = vec!["Drama".to_string(), "Action".to_string()];
/// assert_eq!(merge_genres(&existing, &added), vec!["Action", "Drama"]);
/// ```
pub fn merge_genres(existing: &[String], added: &[String]) -> Vec<String> {
    dedup(existing.iter().chain(added))
}

/// `existing` without any entry that exactly matches one in `removed`.
///
/// Surviving entries keep their relative order; a duplicate left over from
/// an earlier write is collapsed to its first occurrence.
///
/// # Examples
///
/// ```
/// use catalog_core::remove_genres;
///
/// let existing = vec!["Action".to_string(), "Drama".to_string()];
/// assert_eq!(remove_genres(&existing, &["Action".to_string()]), vec!["Drama"]);
/// assert_eq!(remove_genres(&existing, &["action".to_string()]), existing);
/// ```
pub fn remove_genres(existing: &[String], removed: &[String]) -> Vec<String> {
    let removed: HashSet<&str> = removed.iter().map(String::as_str).collect();
    dedup(existing.iter().filter(|g| !removed.contains(g.as_str())))
}

fn dedup<'a>(genres: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    genres.filter(|g| seen.insert(*g)).cloned().collect()
}
