use hybrid_notes_core::{init_logging, logging_status, MemoryEntryStore, OutlineService};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap();

    init_logging("info", log_dir_str).unwrap();
    init_logging("INFO", log_dir_str).unwrap();

    let level_error = init_logging("debug", log_dir_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));
    let dir_error = init_logging("info", other_dir_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let mut service = OutlineService::new(MemoryEntryStore::new());
    service.add_entry("logged without content");
    log::logger().flush();

    let has_log_file = std::fs::read_dir(log_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("hybrid_notes"));
    assert!(has_log_file);
}
