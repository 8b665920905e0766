use crate::grid::{GridError, GridResult};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

/// Key/value storage for grid preference blobs.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<Value>;
    fn save(&self, key: &str, value: &Value) -> GridResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: Value) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value);
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn save(&self, key: &str, value: &Value) -> GridResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// One JSON object on disk mapping storage keys to blobs.
///
/// Concurrent writers are not coordinated; the last write wins.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Map<String, Value> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Map::new(),
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            _ => {
                log::warn!(
                    "Preference file {} is not a JSON object, starting fresh",
                    self.path.display()
                );
                Map::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Option<Value> {
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        self.read_all().remove(key)
    }

    fn save(&self, key: &str, value: &Value) -> GridResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());

        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.clone());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                GridError::preferences(format!("{}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| GridError::preferences(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| GridError::preferences(format!("{}: {}", self.path.display(), e)))
    }
}
