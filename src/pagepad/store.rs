//! # Page Store
//!
//! The in-memory ordered page list plus the selected id. It is the only place page state
//! is mutated and the only caller of [`StorageAdapter`] writes: every successful
//! create, delete or update persists the whole list.
//!
//! Invariants held here:
//! - ids are unique (fresh ids come from [`PageId::generate`])
//! - order is insertion order
//! - the selected id, when present, names a page in the list

use crate::error::{PagepadError, Result};
use crate::model::{Page, PageId, PagePatch, DEFAULT_ICON};
use crate::storage::{KeyValueStore, StorageAdapter};

pub struct PageStore<S: KeyValueStore> {
    pages: Vec<Page>,
    selected: Option<PageId>,
    storage: StorageAdapter<S>,
    default_icon: String,
}

impl<S: KeyValueStore> PageStore<S> {
    /// Load state through the adapter (seeding the welcome page on first run).
    pub fn open(mut storage: StorageAdapter<S>) -> Result<Self> {
        let state = storage.load()?;
        Ok(Self {
            pages: state.pages,
            selected: state.selected,
            storage,
            default_icon: DEFAULT_ICON.to_string(),
        })
    }

    pub fn with_default_icon(mut self, icon: impl Into<String>) -> Self {
        self.default_icon = icon.into();
        self
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn selected_id(&self) -> Option<&PageId> {
        self.selected.as_ref()
    }

    pub fn get(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn position(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| &p.id == id)
    }

    /// The selected page, if any.
    pub fn current(&self) -> Option<&Page> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn storage(&self) -> &StorageAdapter<S> {
        &self.storage
    }

    /// Append a blank page and select it.
    pub fn create(&mut self) -> Result<Page> {
        let mut page = Page::new(self.default_icon.clone());
        while self.get(&page.id).is_some() {
            page.id = PageId::generate();
        }

        self.pages.push(page.clone());
        self.selected = Some(page.id.clone());
        self.storage.save(&self.pages)?;
        self.storage.save_selection(self.selected.as_ref())?;
        log::info!("created page {}", page.id);
        Ok(page)
    }

    /// Remove the page with `id`. Absent ids are a no-op and return `None`.
    ///
    /// Removing the selected page moves the selection to the first remaining page.
    pub fn delete(&mut self, id: &PageId) -> Result<Option<Page>> {
        let Some(index) = self.position(id) else {
            log::debug!("delete of unknown page {} ignored", id);
            return Ok(None);
        };

        let removed = self.pages.remove(index);
        self.storage.save(&self.pages)?;

        if self.selected.as_ref() == Some(id) {
            self.selected = self.pages.first().map(|p| p.id.clone());
            self.storage.save_selection(self.selected.as_ref())?;
        }

        log::info!("deleted page {}", id);
        Ok(Some(removed))
    }

    /// Merge `patch` into the page with `id`. Absent ids are a no-op and return `None`.
    pub fn update(&mut self, id: &PageId, patch: &PagePatch) -> Result<Option<Page>> {
        let Some(page) = self.pages.iter_mut().find(|p| &p.id == id) else {
            log::debug!("update of unknown page {} ignored", id);
            return Ok(None);
        };

        patch.apply_to(page);
        let updated = page.clone();
        self.storage.save(&self.pages)?;
        log::debug!("updated page {}", id);
        Ok(Some(updated))
    }

    /// Select an existing page. Unknown ids are rejected and the selection is kept.
    pub fn select(&mut self, id: &PageId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(PagepadError::PageNotFound(id.to_string()));
        }
        self.selected = Some(id.clone());
        self.storage.save_selection(self.selected.as_ref())?;
        Ok(())
    }
}
