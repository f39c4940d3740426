use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cm, init_db, setup_test_db};

fn add_entry(db_path: &str, date: &str, from: &str, to: &str, task: &str) {
    cm().args([
        "--db", db_path, "add", date, "--from", from, "--to", to, "--task", task,
    ])
    .assert()
    .success();
}

#[test]
fn test_make_permanent_and_list_templates() {
    let db_path = setup_test_db("tpl_make_list");
    init_db(&db_path);

    add_entry(&db_path, "2025-09-02", "07:00", "07:30", "Morning pages");

    cm().args([
        "--db",
        &db_path,
        "template",
        "make",
        "1",
        "--cadence",
        "daily",
    ])
    .assert()
    .success()
    .stdout(contains("Created template #1 'Morning pages' (daily, 07:00-07:30)"));

    cm().args(["--db", &db_path, "template", "list"])
        .assert()
        .success()
        .stdout(contains("Morning pages"))
        .stdout(contains("daily"));
}

#[test]
fn test_make_permanent_rejects_invalid_cadence() {
    let db_path = setup_test_db("tpl_bad_cadence");
    init_db(&db_path);

    add_entry(&db_path, "2025-09-02", "07:00", "07:30", "Morning pages");

    cm().args([
        "--db",
        &db_path,
        "template",
        "make",
        "1",
        "--cadence",
        "monthly",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid cadence: monthly"));
}

#[test]
fn test_make_permanent_twice_fails() {
    let db_path = setup_test_db("tpl_twice");
    init_db(&db_path);

    add_entry(&db_path, "2025-09-02", "07:00", "07:30", "Morning pages");

    cm().args([
        "--db",
        &db_path,
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
        "template",
        "make",
        "1",
        "--cadence",
        "weekend",
    ])
    .assert()
    .failure()
    .stderr(contains("already linked to template 1"));
}

#[test]
fn test_template_delete_cascades_to_entries() {
    let db_path = setup_test_db("tpl_cascade");
    init_db(&db_path);

    // Build up three materialized instances across three days.
    add_entry(&db_path, "2025-09-02", "08:00", "09:00", "Standup");
    cm().args([
        "--db",
        &db_path,
        "template",
        "make",
        "1",
        "--cadence",
        "daily",
    ])
    .assert()
    .success();

    cm().args(["--db", &db_path, "reconcile", "--date", "2025-09-03"])
        .assert()
        .success();
    cm().args(["--db", &db_path, "reconcile", "--date", "2025-09-04"])
        .assert()
        .success();

    cm().args(["--db", &db_path, "template", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Template #1 deleted along with 3 linked entries."));

    // No trace left on any of the days.
    for day in ["2025-09-02", "2025-09-03", "2025-09-04"] {
        cm().args(["--db", &db_path, "list", "--date", day])
            .assert()
            .success()
            .stdout(contains("Standup").not());
    }

    cm().args(["--db", &db_path, "template", "list"])
        .assert()
        .success()
        .stdout(contains("No templates."));
}

#[test]
fn test_template_delete_declined_keeps_everything() {
    let db_path = setup_test_db("tpl_cascade_declined");
    init_db(&db_path);

    add_entry(&db_path, "2025-09-02", "08:00", "09:00", "Standup");
    cm().args([
        "--db",
        &db_path,
        "template",
        "make",
        "1",
        "--cadence",
        "daily",
    ])
    .assert()
    .success();

    cm().args(["--db", &db_path, "template", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    cm().args(["--db", &db_path, "template", "list"])
        .assert()
        .success()
        .stdout(contains("Standup"));
}

#[test]
fn test_template_delete_unknown_id_fails() {
    let db_path = setup_test_db("tpl_missing");
    init_db(&db_path);

    cm().args(["--db", &db_path, "template", "del", "42"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No template found with id 42"));
}
