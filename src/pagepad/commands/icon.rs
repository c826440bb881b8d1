use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PagepadError, Result};
use crate::index::PageSelector;
use crate::model::{PagePatch, ICON_SET};
use crate::storage::KeyValueStore;
use crate::store::PageStore;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::edit;

/// Picks an icon from [`ICON_SET`] at random and assigns it.
pub fn change<S: KeyValueStore, R: Rng + ?Sized>(
    store: &mut PageStore<S>,
    selector: Option<&PageSelector>,
    rng: &mut R,
) -> Result<CmdResult> {
    let icon = ICON_SET
        .choose(rng)
        .copied()
        .unwrap_or(crate::model::DEFAULT_ICON);
    edit::run(store, selector, &PagePatch::icon(icon))
}

/// Assigns an explicit glyph.
pub fn set<S: KeyValueStore>(
    store: &mut PageStore<S>,
    selector: Option<&PageSelector>,
    icon: &str,
) -> Result<CmdResult> {
    let icon = icon.trim();
    if icon.is_empty() {
        return Err(PagepadError::Api("Icon cannot be empty".into()));
    }
    let mut result = edit::run(store, selector, &PagePatch::icon(icon))?;
    if !ICON_SET.contains(&icon) {
        result.add_message(CmdMessage::info(format!(
            "Icon {} is not one of the built-in icons",
            icon
        )));
    }
    Ok(result)
}
