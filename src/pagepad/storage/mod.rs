//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! - [`KeyValueStore`]: a string-keyed slot store, the local-storage analogue. It knows
//!   nothing about pages.
//! - [`StorageAdapter`]: reads and writes the page list (and the selected id) as JSON
//!   under a fixed key of a [`KeyValueStore`].
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production storage, one file per key:
//!
//! ```text
//! <data dir>/
//! ├── notion-pages.json            # JSON array of page records
//! ├── notion-pages.selected.json   # selected page id (JSON string)
//! └── config.json                  # see config.rs
//! ```
//!
//! - [`memory::InMemoryStorage`]: no persistence, used by tests.
//!
//! Writes are whole-value overwrites. There is no partial write, no transaction and no
//! retry; backend errors propagate to the caller.

use crate::error::Result;
use crate::model::{Page, PageId};

pub mod fs;
pub mod memory;

pub const DEFAULT_STORAGE_KEY: &str = "notion-pages";
pub const SELECTION_SUFFIX: &str = ".selected";

/// String-keyed persistent slots.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the slot was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Clear the slot. Clearing an empty slot is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// What [`StorageAdapter::load`] hands back to the page store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    pub pages: Vec<Page>,
    pub selected: Option<PageId>,
}

pub struct StorageAdapter<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn selection_key(&self) -> String {
        format!("{}{}", self.key, SELECTION_SUFFIX)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Load the persisted pages, seeding the welcome page on first run.
    ///
    /// The stored selection is only honoured when it still names an existing page;
    /// otherwise the first page is selected (or none for an empty list).
    pub fn load(&mut self) -> Result<LoadedState> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            let welcome = Page::welcome();
            log::info!("no pages stored under '{}', seeding welcome page", self.key);
            let pages = vec![welcome];
            self.save(&pages)?;
            let selected = Some(pages[0].id.clone());
            self.save_selection(selected.as_ref())?;
            return Ok(LoadedState { pages, selected });
        };

        let pages: Vec<Page> = serde_json::from_str(&raw)?;
        log::debug!("loaded {} pages from '{}'", pages.len(), self.key);

        let stored_selection = self.load_selection()?;
        let selected = stored_selection
            .filter(|id| pages.iter().any(|p| &p.id == id))
            .or_else(|| pages.first().map(|p| p.id.clone()));

        Ok(LoadedState { pages, selected })
    }

    /// Serialize and overwrite the full page list.
    pub fn save(&mut self, pages: &[Page]) -> Result<()> {
        let json = serde_json::to_string(pages)?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("saved {} pages to '{}'", pages.len(), self.key);
        Ok(())
    }

    pub fn save_selection(&mut self, selected: Option<&PageId>) -> Result<()> {
        let key = self.selection_key();
        match selected {
            Some(id) => {
                let json = serde_json::to_string(id)?;
                self.backend.set_item(&key, &json)
            }
            None => self.backend.remove_item(&key),
        }
    }

    fn load_selection(&self) -> Result<Option<PageId>> {
        match self.backend.get_item(&self.selection_key())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStorage;
    use super::*;
    use crate::error::PagepadError;
    use crate::model::{DEFAULT_ICON, WELCOME_ICON, WELCOME_TITLE};

    #[test]
    fn empty_storage_seeds_welcome_page() {
        let mut adapter = StorageAdapter::new(InMemoryStorage::new());
        let state = adapter.load().unwrap();

        assert_eq!(state.pages.len(), 1);
        assert_eq!(state.pages[0].title, WELCOME_TITLE);
        assert_eq!(state.pages[0].icon, WELCOME_ICON);
        assert_eq!(state.selected, Some(state.pages[0].id.clone()));
    }

    #[test]
    fn seeded_welcome_page_is_written_immediately() {
        let mut adapter = StorageAdapter::new(InMemoryStorage::new());
        adapter.load().unwrap();

        let raw = adapter.backend().get_item(DEFAULT_STORAGE_KEY).unwrap();
        assert!(raw.unwrap().contains("Welcome to Notion Clone"));
    }

    #[test]
    fn save_of_load_is_byte_identical() {
        let mut adapter = StorageAdapter::new(InMemoryStorage::new());
        let mut pages = adapter.load().unwrap().pages;
        pages.push(Page::new(DEFAULT_ICON));
        adapter.save(&pages).unwrap();
        let before = adapter.backend().get_item(DEFAULT_STORAGE_KEY).unwrap();

        let reloaded = adapter.load().unwrap();
        adapter.save(&reloaded.pages).unwrap();
        let after = adapter.backend().get_item(DEFAULT_STORAGE_KEY).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn stored_empty_list_is_not_reseeded() {
        let mut backend = InMemoryStorage::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "[]").unwrap();
        let mut adapter = StorageAdapter::new(backend);

        let state = adapter.load().unwrap();
        assert!(state.pages.is_empty());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn stale_selection_falls_back_to_first_page() {
        let mut adapter = StorageAdapter::new(InMemoryStorage::new());
        let a = Page::new(DEFAULT_ICON);
        let b = Page::new(DEFAULT_ICON);
        adapter.save(&[a.clone(), b.clone()]).unwrap();
        adapter.save_selection(Some(&PageId::from("gone"))).unwrap();

        assert_eq!(adapter.load().unwrap().selected, Some(a.id));
    }

    #[test]
    fn stored_selection_is_restored() {
        let mut adapter = StorageAdapter::new(InMemoryStorage::new());
        let a = Page::new(DEFAULT_ICON);
        let b = Page::new(DEFAULT_ICON);
        adapter.save(&[a, b.clone()]).unwrap();
        adapter.save_selection(Some(&b.id)).unwrap();

        assert_eq!(adapter.load().unwrap().selected, Some(b.id));
    }

    #[test]
    fn clearing_selection_removes_slot() {
        let mut adapter = StorageAdapter::new(InMemoryStorage::new());
        adapter.save_selection(Some(&PageId::from("x"))).unwrap();
        adapter.save_selection(None).unwrap();
        let key = adapter.selection_key();
        assert_eq!(adapter.backend().get_item(&key).unwrap(), None);
    }

    #[test]
    fn malformed_data_fails_at_load() {
        let mut backend = InMemoryStorage::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let mut adapter = StorageAdapter::new(backend);

        assert!(matches!(
            adapter.load(),
            Err(PagepadError::Serialization(_))
        ));
    }

    #[test]
    fn custom_key_is_used() {
        let mut adapter = StorageAdapter::with_key(InMemoryStorage::new(), "work");
        adapter.load().unwrap();
        assert!(adapter.backend().get_item("work").unwrap().is_some());
        assert!(adapter.backend().get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
