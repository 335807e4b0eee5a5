use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rfranklin::core::store::ExerciseStore;
use rfranklin::models::field::Field;
use std::fs;

mod common;
use common::{init_db, rfr, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rfr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.row_count().unwrap(), 0);
}

#[test]
fn test_new_and_list() {
    let db_path = setup_test_db("cli_new_list");
    init_db(&db_path);

    rfr()
        .args(["--db", &db_path, "new"])
        .assert()
        .success()
        .stdout(contains("Exercise #1 created"))
        .stdout(contains("1. Take Notes"));

    rfr()
        .args(["--db", &db_path, "set", "author", "Joseph Addison"])
        .assert()
        .success();

    rfr()
        .args(["--db", &db_path, "new"])
        .assert()
        .success()
        .stdout(contains("Exercise #2 created"));

    rfr()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Author"))
        .stdout(contains("Joseph Addison"))
        .stdout(contains("2*"));
}

#[test]
fn test_list_empty() {
    let db_path = setup_test_db("cli_list_empty");
    init_db(&db_path);

    rfr()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No exercises yet"));
}

#[test]
fn test_set_requires_selection() {
    let db_path = setup_test_db("cli_set_nosel");
    init_db(&db_path);

    rfr()
        .args(["--db", &db_path, "set", "notes", "hello"])
        .assert()
        .failure()
        .stderr(contains("No exercise selected"));
}

#[test]
fn test_set_unknown_field() {
    let db_path = setup_test_db("cli_set_unknown");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "set", "title", "x"])
        .assert()
        .failure()
        .stderr(contains("Unknown field: title"));
}

#[test]
fn test_set_not_editable_in_step() {
    let db_path = setup_test_db("cli_set_locked");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "set", "poetry", "verse"])
        .assert()
        .success()
        .stdout(contains("not editable"));

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.get_field(0, Field::Poetry).unwrap().unwrap(), "");
}

#[test]
fn test_set_value_from_stdin_and_file() {
    let db_path = setup_test_db("cli_set_input");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "set", "original"])
        .write_stdin("The original text.\nSecond line.")
        .assert()
        .success();

    let notes_file = temp_out("cli_set_input_notes", "txt");
    fs::write(&notes_file, "one\ntwo\n").unwrap();
    rfr()
        .args(["--db", &db_path, "set", "notes", "--file", &notes_file])
        .assert()
        .success();

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(
        store.get_field(0, Field::Original).unwrap().unwrap(),
        "The original text.\nSecond line."
    );
    assert_eq!(store.get_field(0, Field::Notes).unwrap().unwrap(), "one\ntwo\n");
}

#[test]
fn test_full_walkthrough_seeds_corrections() {
    let db_path = setup_test_db("cli_walkthrough");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "set", "notes", "dark night\nstorm"])
        .assert()
        .success();

    rfr()
        .args(["--db", &db_path, "step", "2"])
        .assert()
        .success()
        .stdout(contains("2. Reconstruct"))
        .stdout(contains("dark night"))
        .stdout(contains("read-only"));

    rfr()
        .args(["--db", &db_path, "set", "rewrite", "It was a dark and stormy night."])
        .assert()
        .success();

    rfr()
        .args(["--db", &db_path, "step", "3"])
        .assert()
        .success()
        .stdout(contains("3. Corrections"))
        .stdout(contains("It was a dark and stormy night."));

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(
        store.get_field(0, Field::Correction).unwrap().unwrap(),
        "It was a dark and stormy night."
    );
}

#[test]
fn test_step_three_keeps_corrections_without_confirmation() {
    let db_path = setup_test_db("cli_keep_corrections");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr().args(["--db", &db_path, "step", "3"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "correction", "mine"])
        .assert()
        .success();
    rfr().args(["--db", &db_path, "step", "2"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "rewrite", "theirs"])
        .assert()
        .success();

    // empty stdin answers "no"
    rfr()
        .args(["--db", &db_path, "step", "3"])
        .write_stdin("")
        .assert()
        .success();

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.get_field(0, Field::Correction).unwrap().unwrap(), "mine");
    drop(store);

    rfr().args(["--db", &db_path, "step", "2"]).assert().success();
    rfr()
        .args(["--db", &db_path, "step", "3"])
        .write_stdin("y\n")
        .assert()
        .success();

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.get_field(0, Field::Correction).unwrap().unwrap(), "theirs");
}

#[test]
fn test_step_overwrite_flag() {
    let db_path = setup_test_db("cli_overwrite_flag");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr().args(["--db", &db_path, "step", "3"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "correction", "old"])
        .assert()
        .success();
    rfr().args(["--db", &db_path, "step", "2"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "rewrite", "new"])
        .assert()
        .success();
    rfr()
        .args(["--db", &db_path, "step", "3", "--overwrite"])
        .assert()
        .success();

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.get_field(0, Field::Correction).unwrap().unwrap(), "new");
}

#[test]
fn test_invalid_step_number() {
    let db_path = setup_test_db("cli_bad_step");
    init_db(&db_path);

    rfr()
        .args(["--db", &db_path, "step", "7"])
        .assert()
        .failure()
        .stderr(contains("Invalid step: 7"));
}

#[test]
fn test_select_resets_to_first_step() {
    let db_path = setup_test_db("cli_select");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr().args(["--db", &db_path, "step", "5"]).assert().success();

    rfr()
        .args(["--db", &db_path, "select", "1"])
        .assert()
        .success()
        .stdout(contains("Exercise #1"))
        .stdout(contains("1. Take Notes"));

    rfr()
        .args(["--db", &db_path, "select", "3"])
        .assert()
        .failure()
        .stderr(contains("Invalid row number: 3"));

    rfr()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No exercise selected"));
}

#[test]
fn test_remove_with_force_shifts_selection() {
    let db_path = setup_test_db("cli_remove");
    init_db(&db_path);
    for author in ["first", "second", "third"] {
        rfr().args(["--db", &db_path, "new"]).assert().success();
        rfr()
            .args(["--db", &db_path, "set", "author", author])
            .assert()
            .success();
    }

    rfr()
        .args(["--db", &db_path, "remove", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("has been removed"));

    rfr()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Exercise #2"))
        .stdout(contains("third"));

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.row_count().unwrap(), 2);
    assert_eq!(store.get_field(0, Field::Author).unwrap().unwrap(), "second");
}

#[test]
fn test_remove_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_remove_cancel");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "remove", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    let store = ExerciseStore::open_path(&db_path).unwrap();
    assert_eq!(store.row_count().unwrap(), 1);
}

#[test]
fn test_remove_out_of_range() {
    let db_path = setup_test_db("cli_remove_oob");
    init_db(&db_path);

    rfr()
        .args(["--db", &db_path, "remove", "1", "--force"])
        .assert()
        .failure()
        .stderr(contains("Invalid row number: 1"));

    rfr()
        .args(["--db", &db_path, "remove", "0", "--force"])
        .assert()
        .failure();
}

#[test]
fn test_jumble_and_reveal() {
    let db_path = setup_test_db("cli_jumble");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "notes", "alpha\nbeta\n\ngamma"])
        .assert()
        .success();
    rfr().args(["--db", &db_path, "step", "6"]).assert().success();

    rfr()
        .args(["--db", &db_path, "jumble", "--seed", "42"])
        .assert()
        .success()
        .stdout(contains("alpha"))
        .stdout(contains("beta"))
        .stdout(contains("gamma"))
        .stdout(contains("[3]"))
        .stdout(contains("[4]").not());

    rfr()
        .args(["--db", &db_path, "reveal"])
        .assert()
        .success()
        .stdout(contains("[1] alpha"))
        .stdout(contains("[2] beta"))
        .stdout(contains("[3] gamma"));
}

#[test]
fn test_jumble_same_seed_same_output() {
    let db_path = setup_test_db("cli_jumble_seed");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "notes", "a\nb\nc\nd\ne\nf"])
        .assert()
        .success();

    let run = || {
        rfr()
            .args(["--db", &db_path, "jumble", "--seed", "9"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_jumble_empty_notes() {
    let db_path = setup_test_db("cli_jumble_empty");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "jumble"])
        .assert()
        .success()
        .stdout(contains("nothing to jumble"));
}

#[test]
fn test_complete_lists_distinct_values() {
    let db_path = setup_test_db("cli_complete");
    init_db(&db_path);
    for author in ["Steele", "Addison", "Steele"] {
        rfr().args(["--db", &db_path, "new"]).assert().success();
        rfr()
            .args(["--db", &db_path, "set", "author", author])
            .assert()
            .success();
    }

    rfr()
        .args(["--db", &db_path, "complete", "author"])
        .assert()
        .success()
        .stdout("Addison\nSteele\n");

    rfr()
        .args(["--db", &db_path, "complete", "author", "st"])
        .assert()
        .success()
        .stdout("Steele\n");
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "source", "Spectator"])
        .assert()
        .success();

    rfr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("new"))
        .stdout(contains("edit"))
        .stdout(contains("Source"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total exercises"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "author", "Addison, Joseph"])
        .assert()
        .success();

    let json_out = temp_out("cli_export", "json");
    rfr()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json_out])
        .assert()
        .success()
        .stdout(contains("1 exercises exported"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json[0]["row"], 1);
    assert_eq!(json[0]["author"], "Addison, Joseph");
    assert_eq!(json[0]["prose"], "");

    // refuses to overwrite without --force
    rfr()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json_out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let csv_out = temp_out("cli_export", "csv");
    rfr()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Row,Author,Source,Original,Notes,Rewrite,Correction,Poetry,Prose"
    );
    assert_eq!(lines.next().unwrap(), "1,\"Addison, Joseph\",,,,,,,");
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("cli_backup");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    let out = temp_out("cli_backup", "db");
    rfr()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let copy = ExerciseStore::open_path(&out).unwrap();
    assert_eq!(copy.row_count().unwrap(), 1);
    drop(copy);

    let zipped = temp_out("cli_backup", "zip");
    rfr()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(std::path::Path::new(&zipped).exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_relative_db_name_is_one_database() {
    let root = std::env::temp_dir().join("rfranklin_relative_db");
    fs::remove_dir_all(&root).ok();
    let cwd = root.join("cwd");
    let data_home = root.join("data");
    let config_home = root.join("config");
    fs::create_dir_all(&cwd).unwrap();

    let run = |args: &[&str]| {
        let mut cmd = rfr();
        cmd.current_dir(&cwd)
            .env("XDG_DATA_HOME", &data_home)
            .env("XDG_CONFIG_HOME", &config_home)
            .args(args);
        cmd
    };

    run(&["--db", "mine.db", "--test", "init"]).assert().success();
    run(&["--db", "mine.db", "new"]).assert().success();
    run(&["--db", "mine.db", "set", "author", "Joseph Addison"])
        .assert()
        .success();

    run(&["--db", "mine.db", "list"])
        .assert()
        .success()
        .stdout(contains("Joseph Addison"));

    let db_file = data_home.join("franklin_writing_exercise").join("mine.db");
    assert!(db_file.exists());
    assert!(!cwd.join("mine.db").exists());

    let store = ExerciseStore::open_path(&db_file.to_string_lossy()).unwrap();
    assert_eq!(store.row_count().unwrap(), 1);
}

#[test]
fn test_jumble_outside_step_six_warns() {
    let db_path = setup_test_db("cli_jumble_step_warning");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();
    rfr()
        .args(["--db", &db_path, "set", "notes", "one\ntwo"])
        .assert()
        .success();

    rfr()
        .args(["--db", &db_path, "jumble", "--seed", "1"])
        .assert()
        .success()
        .stdout(contains("not at step 6"))
        .stdout(contains("[2]"));

    rfr().args(["--db", &db_path, "step", "6"]).assert().success();
    rfr()
        .args(["--db", &db_path, "jumble", "--seed", "1"])
        .assert()
        .success()
        .stdout(contains("not at step 6").not());
}

#[test]
fn test_complete_reports_empty_field() {
    let db_path = setup_test_db("cli_complete_empty");
    init_db(&db_path);
    rfr().args(["--db", &db_path, "new"]).assert().success();

    rfr()
        .args(["--db", &db_path, "complete", "source"])
        .assert()
        .success()
        .stdout(contains("No Source values stored yet"));
}
