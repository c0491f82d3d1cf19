//! Key-value storage capability.
//!
//! The cache and submission log persist through this trait so tests can
//! substitute an in-memory store for the on-disk one.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait KvStore {
    /// Read a value. Any failure reads as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Storage is best-effort; failures are swallowed.
    fn set(&self, key: &str, value: &str);
}

/// Directory-backed store: one JSON file per key.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store under the user data directory.
    pub fn default_location() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aufiles");
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if std::fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            eprintln!("warning: cache write failed: {e}");
        }
    }
}

/// In-memory store. Used by tests and anywhere persistence is unwanted.
#[derive(Default)]
pub struct MemStore {
    values: Mutex<HashMap<String, String>>,
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}
