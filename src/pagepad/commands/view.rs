use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_pages, PageSelector};
use crate::storage::KeyValueStore;
use crate::store::PageStore;

use super::helpers::target_page;

pub const EMPTY_STATE: &str = "No pages yet";

/// Shows one page: the given one, or the selected one. An empty store is not an error.
pub fn run<S: KeyValueStore>(
    store: &PageStore<S>,
    selector: Option<&PageSelector>,
) -> Result<CmdResult> {
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(EMPTY_STATE));
        return Ok(result);
    }

    let page = target_page(store, selector)?;
    let listed = index_pages(store.pages(), store.selected_id())
        .into_iter()
        .filter(|dp| dp.page.id == page.id)
        .collect();
    Ok(CmdResult::default().with_listed_pages(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::store_with_pages;
    use crate::model::PageId;

    #[test]
    fn views_selected_page_by_default() {
        let store = store_with_pages(2);
        let result = run(&store, None).unwrap();
        assert_eq!(result.listed_pages.len(), 1);
        assert_eq!(result.listed_pages[0].index, 1);
        assert!(result.listed_pages[0].is_selected);
    }

    #[test]
    fn views_given_page() {
        let store = store_with_pages(2);
        let result = run(&store, Some(&PageSelector::Index(2))).unwrap();
        assert_eq!(result.listed_pages[0].page.title, "Test Page 2");
        assert!(!result.listed_pages[0].is_selected);
    }

    #[test]
    fn empty_store_shows_empty_state() {
        let mut store = store_with_pages(1);
        let id: PageId = store.pages()[0].id.clone();
        store.delete(&id).unwrap();

        let result = run(&store, None).unwrap();
        assert!(result.listed_pages.is_empty());
        assert_eq!(result.messages[0].content, EMPTY_STATE);
    }
}
