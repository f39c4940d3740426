#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cm() -> Command {
    cargo_bin_cmd!("clearmind")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clearmind.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique cloud-mirror directory inside the system temp dir
pub fn setup_sync_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clearmind_mirror", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Initialize the schema for a throwaway DB
pub fn init_db(db_path: &str) {
    cm().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    cm().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "--from",
        "09:00",
        "--to",
        "10:00",
        "--task",
        "Write weekly report",
    ])
    .assert()
    .success();

    cm().args([
        "--db",
        db_path,
        "add",
        "2025-09-02",
        "--from",
        "14:00",
        "--to",
        "15:00",
        "--task",
        "Call the bank",
    ])
    .assert()
    .success();
}
