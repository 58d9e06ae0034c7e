//! Integration tests for Settings loading from an explicit config file.
//!
//! Note: these tests assume no PARCELDEPOT_* variables are set.

use std::fs;

use tempfile::TempDir;

use parceldepot::application::ApplicationError;
use parceldepot::config::Settings;
use parceldepot::infrastructure::ServiceContainer;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("parceldepot.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_config_file_when_load_then_values_applied() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
seed = 42
default_station = "West Gate Station"
"#,
    );

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.default_station.as_deref(), Some("West Gate Station"));
}

#[test]
fn given_station_number_in_config_when_load_then_resolved_to_name() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "default_station = \"1\"\n");

    let settings = Settings::load(Some(&path)).unwrap();
    assert_eq!(settings.default_station.as_deref(), Some("South Gate Station"));
}

#[test]
fn given_unknown_station_in_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "default_station = \"Harbour\"\n");

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(
        matches!(&err, ApplicationError::Config { message } if message.contains("Harbour")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_unknown_key_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "stations = [\"Harbour\"]\n");

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_loaded_settings_when_serialized_then_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "seed = 3\n");

    let settings = Settings::load(Some(&path)).unwrap();
    let reparsed_path = write_config(&dir, &settings.to_toml().unwrap());
    assert_eq!(Settings::load(Some(&reparsed_path)).unwrap(), settings);
}

#[test]
fn given_seeded_settings_when_building_container_then_codes_reproducible() {
    let settings = Settings {
        seed: Some(2024),
        default_station: None,
    };
    let mut first = ServiceContainer::new(settings.clone());
    let mut second = ServiceContainer::new(settings);

    for id in ["a", "b", "c"] {
        let x = first.store.insert("North Gate Station", "ZT", id, "Kim").unwrap();
        let y = second.store.insert("North Gate Station", "ZT", id, "Kim").unwrap();
        assert_eq!(x.pickup_code(), y.pickup_code());
    }
}
