use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let temp = tempfile::tempdir().expect("tempdir");
    let settings = load_settings_from(&temp.path().join("missing.toml"), env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.storage_key, "items");
}

#[test]
fn file_values_override_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_file = temp.path().join("tracker.toml");
    fs::write(
        &config_file,
        "storage_path = \"/var/lib/tracker/meals.json\"\nstorage_key = \"meals\"\n",
    )
    .expect("write config");

    let settings = load_settings_from(&config_file, env_from(&[]));
    assert_eq!(
        settings.storage_path,
        PathBuf::from("/var/lib/tracker/meals.json")
    );
    assert_eq!(settings.storage_key, "meals");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_file = temp.path().join("tracker.toml");
    fs::write(&config_file, "storage_key = \"meals\"\n").expect("write config");

    let settings = load_settings_from(
        &config_file,
        env_from(&[
            ("TRACKER_STORAGE_KEY", "snacks"),
            ("TRACKER_STORAGE_PATH", "a.json"),
            ("APP__STORAGE_PATH", "b.json"),
            ("APP__LOG_FILTER", "debug"),
        ]),
    );
    assert_eq!(settings.storage_key, "snacks");
    assert_eq!(settings.storage_path, PathBuf::from("b.json"));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn malformed_file_is_ignored() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_file = temp.path().join("tracker.toml");
    fs::write(&config_file, "storage_key = [not a string").expect("write config");

    let settings = load_settings_from(&config_file, env_from(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn blank_storage_path_falls_back_to_default() {
    assert_eq!(
        normalize_storage_path(Path::new("  ")),
        Settings::default().storage_path
    );
}

#[test]
fn directory_storage_path_gets_default_file_name() {
    assert_eq!(
        normalize_storage_path(Path::new("data/")),
        PathBuf::from("data/tracker.json")
    );
}

#[test]
fn prepare_creates_parent_dir() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = temp.path().join("nested").join("tracker.json");

    let prepared = prepare_storage_path(&target).expect("prepare");
    assert_eq!(prepared, target);
    assert!(temp.path().join("nested").is_dir());
}
