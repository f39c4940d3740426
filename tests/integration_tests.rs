use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cm, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_add_and_list_entry() {
    let db_path = setup_test_db("add_and_list");
    init_db(&db_path);

    cm().args([
        "--db",
        &db_path,
        "add",
        "2025-09-02",
        "--from",
        "10:00",
        "--to",
        "11:30",
        "--task",
        "Deep work",
    ])
    .assert()
    .success()
    .stdout(contains("Added entry #1 'Deep work' on 2025-09-02"));

    cm().args(["--db", &db_path, "list", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("Entries for 2025-09-02"))
        .stdout(contains("Deep work"))
        .stdout(contains("10:00-11:30"))
        .stdout(contains("01:30"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("bad_date");
    init_db(&db_path);

    cm().args([
        "--db",
        &db_path,
        "add",
        "02/09/2025",
        "--from",
        "10:00",
        "--to",
        "11:00",
        "--task",
        "Nope",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_inverted_times() {
    let db_path = setup_test_db("bad_times");
    init_db(&db_path);

    cm().args([
        "--db",
        &db_path,
        "add",
        "2025-09-02",
        "--from",
        "11:00",
        "--to",
        "10:00",
        "--task",
        "Backwards",
    ])
    .assert()
    .failure()
    .stderr(contains("Block must end after it starts"));
}

#[test]
fn test_done_and_reset_completion() {
    let db_path = setup_test_db("done_toggle");
    init_db_with_data(&db_path);

    cm().args(["--db", &db_path, "done", "1"])
        .assert()
        .success()
        .stdout(contains("marked as yes"));

    cm().args(["--db", &db_path, "done", "1", "--partial"])
        .assert()
        .success()
        .stdout(contains("marked as partial"));

    cm().args(["--db", &db_path, "done", "1", "--reset"])
        .assert()
        .success()
        .stdout(contains("marked as no"));
}

#[test]
fn test_done_unknown_entry_fails() {
    let db_path = setup_test_db("done_missing");
    init_db(&db_path);

    cm().args(["--db", &db_path, "done", "99"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 99"));
}

#[test]
fn test_soft_delete_hides_entry_from_list() {
    let db_path = setup_test_db("soft_delete");
    init_db_with_data(&db_path);

    cm().args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("Entry #1 deleted."));

    cm().args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Write weekly report").not());
}

#[test]
fn test_hard_delete_requires_confirmation() {
    let db_path = setup_test_db("hard_delete");
    init_db_with_data(&db_path);

    // Declined prompt leaves the entry alone.
    cm().args(["--db", &db_path, "del", "1", "--hard"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    cm().args(["--db", &db_path, "del", "1", "--hard"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Entry #1 permanently deleted."));

    cm().args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Write weekly report").not());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("oplog");
    init_db_with_data(&db_path);

    cm().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Added 'Write weekly report' on 2025-09-01"))
        .stdout(contains("Database initialized"));
}

#[test]
fn test_db_check_and_vacuum() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    cm().args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("Vacuum completed."));
}

#[test]
fn test_db_info_counts_tombstones() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    cm().args(["--db", &db_path, "del", "2"])
        .assert()
        .success();

    cm().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("(1 soft-deleted)"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");
    init_db(&db_path);

    cm().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));

    cm().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));
}

#[test]
fn test_config_print_shows_database_key() {
    cm().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"));
}

#[test]
fn test_list_all_groups_by_date() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    // Complete both entries so the reconcile pass that `list` runs first
    // has nothing to forward-move.
    cm().args(["--db", &db_path, "done", "1"]).assert().success();
    cm().args(["--db", &db_path, "done", "2"]).assert().success();

    cm().args(["--db", &db_path, "list", "--all", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"))
        .stdout(contains("Write weekly report"))
        .stdout(contains("Call the bank"));
}
