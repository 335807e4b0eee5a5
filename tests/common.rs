#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfranklin::core::store::ExerciseStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfr() -> Command {
    cargo_bin_cmd!("rfranklin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfranklin.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfranklin_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh store on a file of its own.
pub fn fresh_store(name: &str) -> ExerciseStore {
    let db_path = setup_test_db(name);
    ExerciseStore::open_path(&db_path).expect("open store")
}

/// Store holding `n` empty rows.
pub fn store_with_rows(name: &str, n: usize) -> ExerciseStore {
    let mut store = fresh_store(name);
    for i in 0..n {
        assert!(store.insert_row(i).expect("insert"));
    }
    store
}

/// Initialize a DB through the CLI.
pub fn init_db(db_path: &str) {
    rfr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
