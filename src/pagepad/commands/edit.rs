use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PagepadError, Result};
use crate::index::PageSelector;
use crate::model::PagePatch;
use crate::storage::KeyValueStore;
use crate::store::PageStore;

use super::helpers::target_page;

/// Merges `patch` into the targeted page (the selected one when `selector` is `None`).
pub fn run<S: KeyValueStore>(
    store: &mut PageStore<S>,
    selector: Option<&PageSelector>,
    patch: &PagePatch,
) -> Result<CmdResult> {
    let page = target_page(store, selector)?;
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let updated = store
        .update(&page.id, patch)?
        .ok_or_else(|| PagepadError::PageNotFound(page.id.to_string()))?;

    let what = match (&patch.title, &patch.content, &patch.icon) {
        (Some(_), None, None) => "Title",
        (None, Some(_), None) => "Content",
        (None, None, Some(_)) => "Icon",
        _ => "Page",
    };
    result.add_message(CmdMessage::success(format!(
        "{} updated: {} {}",
        what,
        updated.icon,
        updated.display_title()
    )));
    Ok(result.with_affected_pages(vec![updated]))
}

pub fn set_title<S: KeyValueStore>(
    store: &mut PageStore<S>,
    selector: Option<&PageSelector>,
    title: impl Into<String>,
) -> Result<CmdResult> {
    run(store, selector, &PagePatch::title(title))
}

pub fn set_content<S: KeyValueStore>(
    store: &mut PageStore<S>,
    selector: Option<&PageSelector>,
    content: impl Into<String>,
) -> Result<CmdResult> {
    run(store, selector, &PagePatch::content(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::store_with_pages;

    #[test]
    fn title_update_targets_selected_page() {
        let mut store = store_with_pages(2);
        let other = store.pages()[1].clone();

        set_title(&mut store, None, "Renamed").unwrap();

        assert_eq!(store.pages()[0].title, "Renamed");
        assert_eq!(store.pages()[1], other);
    }

    #[test]
    fn empty_title_is_allowed() {
        let mut store = store_with_pages(1);
        let result = set_title(&mut store, None, "").unwrap();
        assert_eq!(store.pages()[0].title, "");
        assert!(result.messages[0].content.contains("Untitled"));
    }

    #[test]
    fn content_update_targets_given_page() {
        let mut store = store_with_pages(2);
        set_content(&mut store, Some(&PageSelector::Index(2)), "<p>new</p>").unwrap();
        assert_eq!(store.pages()[1].content, "<p>new</p>");
        assert_eq!(store.pages()[0].content, "<p>Content for Test Page 1</p>");
    }

    #[test]
    fn empty_patch_is_reported_not_written() {
        let mut store = store_with_pages(1);
        let before = store.pages().to_vec();
        let result = run(&mut store, None, &PagePatch::default()).unwrap();
        assert!(result.affected_pages.is_empty());
        assert_eq!(store.pages(), &before[..]);
    }
}
