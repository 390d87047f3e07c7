//! Local persistence for the tracked item collection.
//!
//! The whole collection lives as one JSON blob under a single key of a
//! string key-value store, mirroring how a browser keeps it in local storage.
//! Every mutation is a read-modify-write of that blob.

use anyhow::{Context, Result};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use shared::domain::{Item, ItemId};

pub const DEFAULT_COLLECTION_KEY: &str = "items";

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Key-value store kept as a JSON object in a single file.
///
/// The file is re-read on every access and rewritten through a sibling
/// temporary file, so a crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_parent_dir_exists(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read key-value file '{}'", self.path.display())
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).with_context(|| {
            format!("malformed key-value file '{}'", self.path.display())
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let body = serde_json::to_string_pretty(entries)?;
        let tmp_path = temp_path_for(&self.path);
        fs::write(&tmp_path, body)
            .with_context(|| format!("failed to write '{}'", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "failed to replace key-value file '{}'",
                self.path.display()
            )
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

pub fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };

    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for storage file '{}'",
            parent.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Mirror of the item collection consumed by the orchestrator.
pub trait ItemPersistence {
    fn load(&self) -> Result<Vec<Item>>;
    fn store_append(&mut self, item: &Item) -> Result<()>;
    fn remove(&mut self, id: ItemId) -> Result<()>;
    fn update(&mut self, item: &Item) -> Result<()>;
    fn clear_all(&mut self) -> Result<()>;
}

/// Keeps the collection under one key of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct LocalItemStorage<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> LocalItemStorage<K> {
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_COLLECTION_KEY)
    }

    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        let blob = serde_json::to_string(items).context("failed to serialize items")?;
        self.backend
            .set(&self.key, blob)
            .with_context(|| format!("failed to store collection '{}'", self.key))
    }
}

impl<K: KeyValueStore> ItemPersistence for LocalItemStorage<K> {
    fn load(&self) -> Result<Vec<Item>> {
        let Some(blob) = self
            .backend
            .get(&self.key)
            .with_context(|| format!("failed to read collection '{}'", self.key))?
        else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&blob)
            .with_context(|| format!("malformed collection stored under '{}'", self.key))
    }

    fn store_append(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load()?;
        items.push(item.clone());
        self.save(&items)
    }

    fn remove(&mut self, id: ItemId) -> Result<()> {
        let mut items = self.load()?;
        items.retain(|stored| stored.id != id);
        self.save(&items)
    }

    fn update(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load()?;
        if let Some(stored) = items.iter_mut().find(|stored| stored.id == item.id) {
            *stored = item.clone();
        }
        self.save(&items)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.backend
            .remove(&self.key)
            .with_context(|| format!("failed to clear collection '{}'", self.key))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
