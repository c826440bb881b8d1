use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PageSelector;
use crate::storage::KeyValueStore;
use crate::store::PageStore;

use super::helpers::resolve_selector;

pub const CONFIRM_PROMPT: &str = "Delete this page?";

/// Synchronous yes/no prompt shown before a page is removed.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Always answers yes, for `--yes` and non-interactive callers.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

pub fn run<S: KeyValueStore, C: Confirm + ?Sized>(
    store: &mut PageStore<S>,
    selector: &PageSelector,
    confirm: &mut C,
) -> Result<CmdResult> {
    let id = resolve_selector(store, selector)?;
    let mut result = CmdResult::default();

    if store.get(&id).is_none() {
        result.add_message(CmdMessage::info(format!("No page {} to delete.", selector)));
        return Ok(result);
    }

    if !confirm.confirm(CONFIRM_PROMPT) {
        result.add_message(CmdMessage::info("Aborted."));
        return Ok(result);
    }

    if let Some(removed) = store.delete(&id)? {
        result.add_message(CmdMessage::success(format!(
            "Page deleted: {} {}",
            removed.icon,
            removed.display_title()
        )));
        if store.is_empty() {
            result.add_message(CmdMessage::info(super::view::EMPTY_STATE));
        }
        result.affected_pages.push(removed);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::store_with_pages;
    use crate::model::PageId;

    #[test]
    fn deletes_after_confirmation() {
        let mut store = store_with_pages(2);
        let second = store.pages()[1].id.clone();
        let mut asked = Vec::new();
        let mut confirm = |prompt: &str| {
            asked.push(prompt.to_string());
            true
        };

        let result = run(&mut store, &PageSelector::Index(1), &mut confirm).unwrap();

        assert_eq!(asked, vec![CONFIRM_PROMPT.to_string()]);
        assert_eq!(result.affected_pages.len(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_id(), Some(&second));
    }

    #[test]
    fn declining_leaves_store_untouched() {
        let mut store = store_with_pages(2);
        let before = store.pages().to_vec();

        let result = run(&mut store, &PageSelector::Index(2), &mut |_: &str| false).unwrap();

        assert!(result.affected_pages.is_empty());
        assert_eq!(store.pages(), &before[..]);
    }

    #[test]
    fn unknown_id_is_a_noop_without_prompt() {
        let mut store = store_with_pages(1);
        let mut prompted = false;
        let mut confirm = |_: &str| {
            prompted = true;
            true
        };
        let selector = PageSelector::Id(PageId::from("missing-id"));

        let result = run(&mut store, &selector, &mut confirm).unwrap();

        assert!(!prompted);
        assert!(result.affected_pages.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleting_last_page_reports_empty_state() {
        let mut store = store_with_pages(1);
        let result = run(&mut store, &PageSelector::Index(1), &mut AssumeYes).unwrap();
        assert!(store.is_empty());
        assert_eq!(result.messages.last().unwrap().content, "No pages yet");
    }
}
