use super::KeyValueStore;
use crate::error::{PagepadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed slots: each key is stored as `<root>/<key>.json`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PagepadError::Io)?;
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if bad {
        return Err(PagepadError::Storage(format!(
            "Invalid storage key: {:?}",
            key
        )));
    }
    Ok(())
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(PagepadError::Io)?;
        Ok(Some(value))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        self.ensure_dir()?;
        fs::write(path, value).map_err(PagepadError::Io)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(PagepadError::Io)?;
        }
        Ok(())
    }
}
