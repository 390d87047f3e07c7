use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

pub const DEFAULT_CONFIG_FILE: &str = "tracker.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("./data/tracker.json"),
            storage_key: storage::DEFAULT_COLLECTION_KEY.into(),
            log_filter: "warn".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let config_file = std::env::var("TRACKER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
    load_settings_from(&config_file, |key| std::env::var(key).ok())
}

/// Defaults, then the flat `key = "value"` table in `config_file`, then
/// environment variables. Unreadable or malformed files are ignored.
pub fn load_settings_from(
    config_file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_file) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("storage_path") {
                settings.storage_path = PathBuf::from(v);
            }
            if let Some(v) = file_cfg.get("storage_key") {
                settings.storage_key = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Some(v) = env("TRACKER_STORAGE_PATH") {
        settings.storage_path = PathBuf::from(v);
    }
    if let Some(v) = env("APP__STORAGE_PATH") {
        settings.storage_path = PathBuf::from(v);
    }

    if let Some(v) = env("TRACKER_STORAGE_KEY") {
        settings.storage_key = v;
    }
    if let Some(v) = env("APP__STORAGE_KEY") {
        settings.storage_key = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

/// Normalizes the configured storage path and makes sure its directory exists.
pub fn prepare_storage_path(raw: &Path) -> anyhow::Result<PathBuf> {
    let path = normalize_storage_path(raw);
    storage::ensure_parent_dir_exists(&path).with_context(|| {
        format!("failed to prepare storage path '{}'", path.display())
    })?;
    Ok(path)
}

fn normalize_storage_path(raw: &Path) -> PathBuf {
    let as_text = raw.to_string_lossy();
    let trimmed = as_text.trim();

    if trimmed.is_empty() {
        return Settings::default().storage_path;
    }

    if raw.is_dir() || trimmed.ends_with('/') || trimmed.ends_with('\\') {
        return Path::new(trimmed).join("tracker.json");
    }

    PathBuf::from(trimmed)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
