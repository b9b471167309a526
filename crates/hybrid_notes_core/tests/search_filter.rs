use hybrid_notes_core::{filter_entries, filter_indices, Entry, EntryFilter};

fn sample() -> Vec<Entry> {
    vec![
        Entry::new("log", "alpha", 0),
        Entry::new("ctx", "beta", 0),
        Entry::new("log", "alpha-ctx", 0),
    ]
}

#[test]
fn query_and_type_tag_intersect() {
    let entries = sample();
    let filter = EntryFilter::new(Some("alpha".to_string()), Some("log".to_string()));

    assert_eq!(filter_indices(&entries, &filter), vec![0, 2]);
}

#[test]
fn query_matches_content_or_type_case_insensitively() {
    let entries = sample();
    let filter = EntryFilter::new(Some("CTX".to_string()), None);

    let matched: Vec<&str> = filter_entries(&entries, &filter)
        .into_iter()
        .map(|entry| entry.content.as_str())
        .collect();
    assert_eq!(matched, vec!["beta", "alpha-ctx"]);
}

#[test]
fn type_tag_is_exact_and_case_sensitive() {
    let entries = sample();

    let exact = EntryFilter::new(None, Some("ctx".to_string()));
    assert_eq!(filter_indices(&entries, &exact), vec![1]);

    let partial = EntryFilter::new(None, Some("c".to_string()));
    assert!(filter_indices(&entries, &partial).is_empty());

    let upper = EntryFilter::new(None, Some("CTX".to_string()));
    assert!(filter_indices(&entries, &upper).is_empty());
}

#[test]
fn empty_filter_keeps_everything() {
    let entries = sample();
    assert_eq!(
        filter_indices(&entries, &EntryFilter::default()),
        vec![0, 1, 2]
    );
}
