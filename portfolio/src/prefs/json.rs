//! JSON file backend with an in-memory cache.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::{PreferenceBackend, PreferenceError};

/// Stores every key in one JSON object on disk. Reads are served from the
/// cache; each write rewrites the file.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    cache: BTreeMap<String, String>,
}

impl JsonFileBackend {
    /// Open the file at `path`, which need not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let cache = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("loaded {} preference(s) from {}", cache.len(), path.display());
        Ok(Self { path, cache })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.cache)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PreferenceBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.cache.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.cache.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.cache.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<(), PreferenceError> {
        if self.cache.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
