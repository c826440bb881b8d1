use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PagepadError, Result};
use crate::index::PageSelector;
use crate::markup::{apply_format, FormatCommand, Selection};
use crate::model::PagePatch;
use crate::storage::KeyValueStore;
use crate::store::PageStore;

use super::helpers::target_page;

/// How the caller describes the selection; resolved against the page body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatTarget {
    #[default]
    Caret,
    Text(String),
    Range { start: usize, end: usize },
}

impl FormatTarget {
    fn resolve(&self, content: &str) -> Result<Selection> {
        match self {
            FormatTarget::Caret => Ok(Selection::Caret),
            FormatTarget::Text(text) => Selection::find(content, text),
            FormatTarget::Range { start, end } => Ok(Selection::range(*start, *end)),
        }
    }
}

pub fn run<S: KeyValueStore>(
    store: &mut PageStore<S>,
    selector: Option<&PageSelector>,
    command: FormatCommand,
    target: &FormatTarget,
) -> Result<CmdResult> {
    let page = target_page(store, selector)?;
    let selection = target.resolve(&page.content)?;
    let content = apply_format(&page.content, command, selection)?;

    let updated = store
        .update(&page.id, &PagePatch::content(content))?
        .ok_or_else(|| PagepadError::PageNotFound(page.id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Applied {} to {}",
        command,
        updated.display_title()
    )));
    Ok(result.with_affected_pages(vec![updated]))
}
