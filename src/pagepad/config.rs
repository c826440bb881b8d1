use crate::error::{PagepadError, Result};
use crate::model::DEFAULT_ICON;
use crate::storage::{DEFAULT_STORAGE_KEY, SELECTION_SUFFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 3] = ["storage-key", "default-icon", "confirm-delete"];

/// Configuration for pagepad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagepadConfig {
    /// Storage slot the page list lives under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Icon given to newly created pages
    #[serde(default = "default_icon")]
    pub default_icon: String,

    /// Ask before deleting a page
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for PagepadConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_icon: default_icon(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl PagepadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PagepadError::Io)?;
        let config: PagepadConfig =
            serde_json::from_str(&content).map_err(PagepadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PagepadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PagepadError::Serialization)?;
        fs::write(config_path, content).map_err(PagepadError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "default-icon" => Some(self.default_icon.clone()),
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let key = value.trim();
                validate_storage_key(key)?;
                self.storage_key = key.to_string();
            }
            "default-icon" => {
                if value.trim().is_empty() {
                    return Err(PagepadError::Api("default-icon cannot be empty".into()));
                }
                self.default_icon = value.trim().to_string();
            }
            "confirm-delete" => {
                self.confirm_delete = parse_bool(value).ok_or_else(|| {
                    PagepadError::Api(format!("confirm-delete expects true/false, got {}", value))
                })?;
            }
            other => return Err(PagepadError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

/// The page list shares the data dir with `config.json` and the `<key>.selected` slot,
/// so those names are off limits.
fn validate_storage_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PagepadError::Api("storage-key cannot be empty".into()));
    }
    let stem = CONFIG_FILENAME.trim_end_matches(".json");
    if key.eq_ignore_ascii_case(stem) || key.ends_with(SELECTION_SUFFIX) {
        return Err(PagepadError::Api(format!(
            "storage-key {} is reserved",
            key
        )));
    }
    if key.starts_with('.') || key.chars().any(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(PagepadError::Api(format!(
            "storage-key {} is not a valid slot name",
            key
        )));
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
