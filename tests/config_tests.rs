use rfranklin::config::Config;
use rfranklin::config::migrate::{KNOWN_KEYS, migrate_config_file, missing_keys};
use rfranklin::models::field::Field;
use std::fs;

mod common;
use common::temp_out;

#[test]
fn test_default_config() {
    let cfg = Config::default();
    assert!(cfg.database.ends_with("exercises.db"));
    assert_eq!(
        cfg.list_fields(),
        vec![Field::Author, Field::Source, Field::Original]
    );
    assert_eq!(cfg.preview_width, 40);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_out("cfg_missing", "conf");
    let cfg = Config::load_from(std::path::Path::new(&path)).unwrap();
    assert_eq!(cfg.preview_width, 40);
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = temp_out("cfg_partial", "conf");
    fs::write(&path, "database: /tmp/custom.db\nlist_columns: [Author, Poetry, bogus]\n").unwrap();

    let cfg = Config::load_from(std::path::Path::new(&path)).unwrap();
    assert_eq!(cfg.database, "/tmp/custom.db");
    assert_eq!(cfg.list_fields(), vec![Field::Author, Field::Poetry]);
    assert_eq!(cfg.preview_width, 40);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let path = temp_out("cfg_invalid", "conf");
    fs::write(&path, "preview_width: [not a number\n").unwrap();
    assert!(Config::load_from(std::path::Path::new(&path)).is_err());
}

#[test]
fn test_check_and_migrate() {
    let path = temp_out("cfg_migrate", "conf");
    let p = std::path::Path::new(&path);
    fs::write(&path, "database: /tmp/kept.db\n").unwrap();

    assert_eq!(
        missing_keys(p).unwrap(),
        vec!["list_columns", "preview_width", "separator_char"]
    );

    let added = migrate_config_file(p).unwrap();
    assert_eq!(added.len(), 3);
    assert!(missing_keys(p).unwrap().is_empty());

    let cfg = Config::load_from(p).unwrap();
    assert_eq!(cfg.database, "/tmp/kept.db");

    // second run has nothing to do
    assert!(migrate_config_file(p).unwrap().is_empty());
}

#[test]
fn test_missing_file_reports_all_keys() {
    let path = temp_out("cfg_absent", "conf");
    assert_eq!(missing_keys(std::path::Path::new(&path)).unwrap(), KNOWN_KEYS.to_vec());
}

#[test]
fn test_save_and_reload() {
    let path = temp_out("cfg_save", "conf");
    let p = std::path::Path::new(&path);
    let cfg = Config {
        preview_width: 12,
        ..Config::default()
    };
    cfg.save_to(p).unwrap();

    let loaded = Config::load_from(p).unwrap();
    assert_eq!(loaded.preview_width, 12);
    assert_eq!(loaded.list_columns, cfg.list_columns);
}
