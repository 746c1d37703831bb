//! File-backed session store
//!
//! Keeps all slots in one JSON object on disk. Writes go to a temp file
//! first and are renamed into place.

use super::SessionStore;
use crate::config::SESSION_FILE_NAME;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at `<data_dir>/session.json`
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(slots)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;
        tracing::debug!("Session saved to {:?}", self.path);
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.load().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable session file: {}", e);
            BTreeMap::new()
        });
        slots.insert(key.to_string(), value.to_string());
        self.save(&slots)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.load().unwrap_or_default();
        if slots.remove(key).is_some() || self.path.exists() {
            self.save(&slots)?;
        }
        Ok(())
    }
}
