use hybrid_notes_core::{
    Entry, EntryStore, MemoryEntryStore, MoveDirection, COPY_SUFFIX, MAX_INDENT,
};
use std::sync::Arc;
use uuid::Uuid;

fn contents(store: &MemoryEntryStore) -> Vec<String> {
    store
        .snapshot()
        .iter()
        .map(|entry| entry.content.clone())
        .collect()
}

fn seeded() -> (MemoryEntryStore, Vec<Uuid>) {
    let mut store = MemoryEntryStore::new();
    let ids = vec![
        store.add("log", "a", 0, None),
        store.add("log", "b", 1, None),
        store.add("log", "c", 0, None),
    ];
    (store, ids)
}

#[test]
fn add_appends_without_anchor_and_inserts_after_anchor() {
    let (mut store, ids) = seeded();
    let inserted = store.add("ctx", "a2", 0, Some(ids[0]));

    assert_eq!(contents(&store), vec!["a", "a2", "b", "c"]);
    let entry = store.get(inserted).unwrap();
    assert_eq!(entry.entry_type, "ctx");
    assert_eq!(entry.parent_id, Some(ids[0]));
}

#[test]
fn add_with_unknown_anchor_appends() {
    let (mut store, _) = seeded();
    let inserted = store.add("log", "tail", 0, Some(Uuid::new_v4()));

    assert_eq!(store.position(inserted), Some(3));
    assert_eq!(store.get(inserted).unwrap().parent_id, None);
}

#[test]
fn delete_removes_exactly_one_entry_without_cascade() {
    let (mut store, ids) = seeded();

    assert!(store.delete(ids[0]));
    assert_eq!(contents(&store), vec!["b", "c"]);
    assert_eq!(store.get(ids[1]).unwrap().indent, 1);

    assert!(!store.delete(ids[0]));
    assert_eq!(store.len(), 2);
}

#[test]
fn duplicate_inserts_copy_after_original() {
    let (mut store, ids) = seeded();
    let copy_id = store.duplicate(ids[1]).unwrap();

    assert_eq!(store.position(copy_id), Some(2));
    let copy = store.get(copy_id).unwrap();
    assert_eq!(copy.content, format!("b{COPY_SUFFIX}"));
    assert_eq!(copy.indent, 1);
    assert!(store.duplicate(Uuid::new_v4()).is_none());
}

#[test]
fn move_swaps_raw_neighbours_and_stops_at_boundaries() {
    let (mut store, ids) = seeded();

    assert!(!store.move_entry(ids[0], MoveDirection::Up));
    assert!(!store.move_entry(ids[2], MoveDirection::Down));
    assert!(store.move_entry(ids[2], MoveDirection::Up));
    assert_eq!(contents(&store), vec!["a", "c", "b"]);
    assert!(store.move_entry(ids[0], MoveDirection::Down));
    assert_eq!(contents(&store), vec!["c", "a", "b"]);
}

#[test]
fn unknown_id_mutations_are_noops() {
    let (mut store, _) = seeded();
    let before = store.snapshot();
    let missing = Uuid::new_v4();

    assert!(!store.move_entry(missing, MoveDirection::Up));
    assert!(!store.move_entry(missing, MoveDirection::Down));
    assert!(!store.set_indent(missing, 1));
    assert!(!store.toggle_collapse(missing));
    assert!(!store.delete(missing));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.revision(), 3);
}

#[test]
fn set_indent_clamps_to_range() {
    let (mut store, ids) = seeded();

    assert!(!store.set_indent(ids[0], -1));
    assert!(store.set_indent(ids[0], 100));
    assert_eq!(store.get(ids[0]).unwrap().indent, MAX_INDENT);
    assert!(store.set_indent(ids[0], -2));
    assert_eq!(store.get(ids[0]).unwrap().indent, MAX_INDENT - 2);

    assert!(store.set_indent(ids[0], i32::MAX));
    assert_eq!(store.get(ids[0]).unwrap().indent, MAX_INDENT);
    assert!(store.set_indent(ids[0], i32::MIN));
    assert_eq!(store.get(ids[0]).unwrap().indent, 0);
}

#[test]
fn toggle_collapse_twice_restores_state() {
    let (mut store, ids) = seeded();
    let before = store.get(ids[0]).unwrap().collapsed();

    assert!(store.toggle_collapse(ids[0]));
    assert_ne!(store.get(ids[0]).unwrap().collapsed(), before);
    assert!(store.toggle_collapse(ids[0]));
    assert_eq!(store.get(ids[0]).unwrap().collapsed(), before);
}

#[test]
fn collapse_all_is_idempotent() {
    let (mut store, _) = seeded();
    store.set_all_collapsed(true);
    store.set_all_collapsed(true);
    assert!(store.snapshot().iter().all(Entry::collapsed));

    store.set_all_collapsed(false);
    assert!(store.snapshot().iter().all(|entry| !entry.collapsed()));
}

#[test]
fn update_stamps_updated_at() {
    let (mut store, ids) = seeded();

    assert!(store.update(ids[1], "b edited"));
    let entry = store.get(ids[1]).unwrap();
    assert_eq!(entry.content, "b edited");
    assert!(entry.updated_at.is_some());
    assert!(!store.update(Uuid::new_v4(), "nothing"));
}

#[test]
fn mutations_publish_new_snapshots_and_noops_do_not() {
    let (mut store, ids) = seeded();
    let before = store.snapshot();
    let revision = store.revision();

    assert!(!store.move_entry(ids[0], MoveDirection::Up));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.revision(), revision);

    assert!(store.toggle_collapse(ids[0]));
    assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.revision(), revision + 1);
    assert!(!before[0].collapsed());
}
