use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_pages;
use crate::storage::KeyValueStore;
use crate::store::PageStore;

pub fn run<S: KeyValueStore>(store: &PageStore<S>) -> Result<CmdResult> {
    let listed = index_pages(store.pages(), store.selected_id());
    Ok(CmdResult::default().with_listed_pages(listed))
}

/// Footer label: "1 page", "3 pages".
pub fn page_count_label(count: usize) -> String {
    if count == 1 {
        "1 page".to_string()
    } else {
        format!("{} pages", count)
    }
}
