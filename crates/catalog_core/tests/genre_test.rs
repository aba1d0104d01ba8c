use catalog_core::{merge_genres, remove_genres};
use proptest::prelude::*;
use std::collections::HashSet;

fn genre() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Action", "action", "Drama", "Comedy", "Horror", "Sci-Fi", "Documentary",
    ])
    .prop_map(str::to_string)
}

fn distinct_genres() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(genre(), 0..6).prop_map(|list| {
        let mut seen = HashSet::new();
        list.into_iter().filter(|g| seen.insert(g.clone())).collect()
    })
}

fn has_duplicates(list: &[String]) -> bool {
    let unique: HashSet<&String> = list.iter().collect();
    unique.len() != list.len()
}

proptest! {
    #[test]
    fn add_yields_existing_followed_by_new(existing in distinct_genres(), added in prop::collection::vec(genre(), 0..8)) {
        let merged = merge_genres(&existing, &added);

        let mut expected = existing.clone();
        for g in &added {
            if !expected.contains(g) {
                expected.push(g.clone());
            }
        }

        prop_assert_eq!(&merged, &expected);
        prop_assert!(!has_duplicates(&merged));
    }

    #[test]
    fn remove_yields_existing_minus_matches(existing in distinct_genres(), removed in prop::collection::vec(genre(), 0..8)) {
        let remaining = remove_genres(&existing, &removed);

        let expected: Vec<String> = existing
            .iter()
            .filter(|g| !removed.contains(*g))
            .cloned()
            .collect();

        prop_assert_eq!(&remaining, &expected);
        prop_assert!(!has_duplicates(&remaining));
    }

    #[test]
    fn empty_operations_leave_list_unchanged(existing in distinct_genres()) {
        prop_assert_eq!(merge_genres(&existing, &[]), existing.clone());
        prop_assert_eq!(remove_genres(&existing, &[]), existing);
    }
}

#[test]
fn add_then_remove_scenario() {
    let existing = vec!["Action".to_string()];

    let merged = merge_genres(&existing, &["Drama".to_string(), "Action".to_string()]);
    assert_eq!(merged, vec!["Action", "Drama"]);

    let remaining = remove_genres(&merged, &["Action".to_string()]);
    assert_eq!(remaining, vec!["Drama"]);
}

#[test]
fn remove_collapses_stored_duplicates() {
    let existing: Vec<String> = ["Drama", "Action", "Drama"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(remove_genres(&existing, &["Action".to_string()]), vec!["Drama"]);
}
