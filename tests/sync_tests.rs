use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{cm, init_db, setup_sync_dir, setup_test_db};

fn add_synced_entry(db_path: &str, sync_dir: &str, date: &str, task: &str) {
    cm().args([
        "--db", db_path, "--sync-dir", sync_dir, "add", date, "--from", "10:00", "--to", "11:00",
        "--task", task,
    ])
    .assert()
    .success();
}

#[test]
fn test_add_mirrors_entry_document() {
    let db_path = setup_test_db("mirror_add");
    let sync_dir = setup_sync_dir("mirror_add");
    init_db(&db_path);

    add_synced_entry(&db_path, &sync_dir, "2025-09-02", "Deep work");

    let doc_path = Path::new(&sync_dir).join("entries").join("1.json");
    let body = fs::read_to_string(&doc_path).expect("mirrored document");
    assert!(body.contains("Deep work"));
    assert!(body.contains("2025-09-02"));
}

#[test]
fn test_soft_delete_mirrors_a_tombstone() {
    let db_path = setup_test_db("mirror_tombstone");
    let sync_dir = setup_sync_dir("mirror_tombstone");
    init_db(&db_path);

    add_synced_entry(&db_path, &sync_dir, "2025-09-02", "Deep work");

    cm().args(["--db", &db_path, "--sync-dir", &sync_dir, "del", "1"])
        .assert()
        .success();

    let doc_path = Path::new(&sync_dir).join("entries").join("1.json");
    let body = fs::read_to_string(&doc_path).expect("mirrored document");
    assert!(body.contains("\"deleted\": true"));
}

#[test]
fn test_hard_delete_removes_mirrored_document() {
    let db_path = setup_test_db("mirror_hard_delete");
    let sync_dir = setup_sync_dir("mirror_hard_delete");
    init_db(&db_path);

    add_synced_entry(&db_path, &sync_dir, "2025-09-02", "Deep work");

    cm().args(["--db", &db_path, "--sync-dir", &sync_dir, "del", "1", "--hard"])
        .write_stdin("y\n")
        .assert()
        .success();

    let doc_path = Path::new(&sync_dir).join("entries").join("1.json");
    assert!(!doc_path.exists());
}

#[test]
fn test_template_cascade_clears_mirror() {
    let db_path = setup_test_db("mirror_cascade");
    let sync_dir = setup_sync_dir("mirror_cascade");
    init_db(&db_path);

    add_synced_entry(&db_path, &sync_dir, "2025-09-02", "Standup");

    cm().args([
        "--db",
        &db_path,
        "--sync-dir",
        &sync_dir,
        "template",
        "make",
        "1",
        "--cadence",
        "daily",
    ])
    .assert()
    .success();

    let tpl_doc = Path::new(&sync_dir).join("templates").join("1.json");
    assert!(tpl_doc.exists());

    cm().args([
        "--db",
        &db_path,
        "--sync-dir",
        &sync_dir,
        "template",
        "del",
        "1",
    ])
    .write_stdin("y\n")
    .assert()
    .success();

    assert!(!tpl_doc.exists());
    assert!(
        !Path::new(&sync_dir)
            .join("entries")
            .join("1.json")
            .exists()
    );
}

#[test]
fn test_mirror_failure_never_blocks_local_write() {
    let db_path = setup_test_db("mirror_broken");
    init_db(&db_path);

    // Point the mirror at a regular file: every push will fail.
    let broken = setup_sync_dir("mirror_broken_target");
    fs::write(&broken, b"not a directory").expect("create blocking file");

    cm().args([
        "--db",
        &db_path,
        "--sync-dir",
        &broken,
        "add",
        "2025-09-02",
        "--from",
        "10:00",
        "--to",
        "11:00",
        "--task",
        "Deep work",
    ])
    .assert()
    .success()
    .stdout(contains("Added entry #1 'Deep work'"))
    .stdout(contains("Cloud push failed"));

    // Local state is authoritative.
    cm().args(["--db", &db_path, "list", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("Deep work"));
}

#[test]
fn test_reconcile_mirrors_materialized_entries() {
    let db_path = setup_test_db("mirror_reconcile");
    let sync_dir = setup_sync_dir("mirror_reconcile");
    init_db(&db_path);

    add_synced_entry(&db_path, &sync_dir, "2025-09-02", "Standup");

    cm().args([
        "--db",
        &db_path,
        "--sync-dir",
        &sync_dir,
        "template",
        "make",
        "1",
        "--cadence",
        "daily",
    ])
    .assert()
    .success();

    cm().args([
        "--db",
        &db_path,
        "--sync-dir",
        &sync_dir,
        "reconcile",
        "--date",
        "2025-09-03",
    ])
    .assert()
    .success();

    // Entry #2 is the materialized instance for 2025-09-03.
    let doc_path = Path::new(&sync_dir).join("entries").join("2.json");
    let body = fs::read_to_string(&doc_path).expect("mirrored document");
    assert!(body.contains("2025-09-03"));
    assert!(body.contains("Standup"));
}
