//! File-backed store: one file per key, atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::KeyValueStore;

/// Persists each key as a file named after the key inside `dir`.
/// Writes go through a temp file + rename so a crash mid-write never
/// leaves a truncated value behind.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if missing
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys are storage names, not paths
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!("Invalid storage key: {key:?}");
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stored value: {}", path.display()))?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let temp = self.dir.join(format!("{key}.tmp"));
        fs::write(&temp, value)
            .with_context(|| format!("Failed to write temp file: {}", temp.display()))?;
        fs::rename(&temp, &path)
            .with_context(|| format!("Failed to rename temp file into place: {}", path.display()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stored value: {}", path.display()))?;
        }
        Ok(())
    }
}
