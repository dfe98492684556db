use clinicbook_core::{default_log_level, init_logging_from_config, ConfigError, CoreConfig};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoreConfig::load(dir.path().join("absent.json")).unwrap();

    assert_eq!(config, CoreConfig::default());
    assert_eq!(config.log_level, default_log_level());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinicbook.json");
    std::fs::write(
        &path,
        r#"{ "log_level": "warn", "data_path": "/var/lib/clinicbook/registry.sqlite3" }"#,
    )
    .unwrap();

    let config = CoreConfig::load(&path).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(
        config.data_path,
        PathBuf::from("/var/lib/clinicbook/registry.sqlite3")
    );
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = CoreConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn logging_stays_off_without_log_dir() {
    let config = CoreConfig::default();
    assert!(!init_logging_from_config(&config).unwrap());
}
