use crate::error::{PagepadError, Result};
use crate::index::PageSelector;
use crate::model::{Page, PageId};
use crate::storage::KeyValueStore;
use crate::store::PageStore;

/// Resolves a selector to a page id. Positions must exist; ids are returned as given so
/// callers can decide whether an unknown id is an error or a no-op.
///
/// Ids written by the browser app are millisecond timestamps, so a numeric selector that
/// names an existing id wins over the position with the same number.
pub fn resolve_selector<S: KeyValueStore>(
    store: &PageStore<S>,
    selector: &PageSelector,
) -> Result<PageId> {
    match selector {
        PageSelector::Index(n) => {
            let as_id = PageId::from(n.to_string());
            if store.get(&as_id).is_some() {
                return Ok(as_id);
            }
            n.checked_sub(1)
                .and_then(|i| store.pages().get(i))
                .map(|p| p.id.clone())
                .ok_or_else(|| PagepadError::Api(format!("Index {} not found", n)))
        }
        PageSelector::Id(id) => Ok(id.clone()),
    }
}

/// The selected page, or `NoSelection`.
pub fn current_page<S: KeyValueStore>(store: &PageStore<S>) -> Result<&Page> {
    store.current().ok_or(PagepadError::NoSelection)
}

/// The page a command targets: an explicit selector if given, else the selected page.
pub fn target_page<S: KeyValueStore>(
    store: &PageStore<S>,
    selector: Option<&PageSelector>,
) -> Result<Page> {
    match selector {
        Some(selector) => {
            let id = resolve_selector(store, selector)?;
            store
                .get(&id)
                .cloned()
                .ok_or_else(|| PagepadError::PageNotFound(id.to_string()))
        }
        None => current_page(store).cloned(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::storage::memory::fixtures::StorageFixture;
    use crate::storage::memory::InMemoryStorage;
    use crate::storage::StorageAdapter;
    use crate::store::PageStore;

    /// A store holding `count` titled pages, the first one selected.
    pub fn store_with_pages(count: usize) -> PageStore<InMemoryStorage> {
        let storage = StorageFixture::new().with_pages(count).build();
        PageStore::open(StorageAdapter::new(storage)).unwrap()
    }
}
