use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PageSelector;
use crate::storage::KeyValueStore;
use crate::store::PageStore;

use super::helpers::resolve_selector;

pub fn run<S: KeyValueStore>(store: &mut PageStore<S>, selector: &PageSelector) -> Result<CmdResult> {
    let id = resolve_selector(store, selector)?;
    store.select(&id)?;

    let mut result = CmdResult::default();
    if let Some(page) = store.current() {
        result.add_message(CmdMessage::success(format!(
            "Selected: {} {}",
            page.icon,
            page.display_title()
        )));
        result.affected_pages.push(page.clone());
    }
    Ok(result)
}
