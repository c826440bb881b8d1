use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::store::PageStore;

pub fn run<S: KeyValueStore>(store: &mut PageStore<S>) -> Result<CmdResult> {
    let page = store.create()?;
    let position = store.len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Page created ({}): {} {}",
        position,
        page.icon,
        page.display_title()
    )));
    Ok(result.with_affected_pages(vec![page]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::store_with_pages;

    #[test]
    fn creates_and_selects_new_page() {
        let mut store = store_with_pages(1);
        let result = run(&mut store).unwrap();

        let created = &result.affected_pages[0];
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_id(), Some(&created.id));
        assert!(result.messages[0].content.contains("(2)"));
        assert!(result.messages[0].content.contains("Untitled"));
    }
}
