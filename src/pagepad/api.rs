//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every pagepad operation, whatever UI drives it.
//!
//! The facade:
//! - **Owns** the [`PageStore`], so there is no ambient global state
//! - **Normalizes inputs** (strings into [`PageSelector`]s and [`FormatCommand`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`) and no I/O beyond what the
//! store does.
//!
//! `PagepadApi<S: KeyValueStore>` is generic over the slot backend:
//! - Production: `PagepadApi<FileStorage>`
//! - Testing: `PagepadApi<InMemoryStorage>`

use crate::commands;
use crate::commands::delete::Confirm;
use crate::commands::format::FormatTarget;
use crate::config::PagepadConfig;
use crate::error::{PagepadError, Result};
use crate::index::PageSelector;
use crate::markup::FormatCommand;
use crate::model::PageId;
use crate::storage::{KeyValueStore, StorageAdapter};
use crate::store::PageStore;
use rand::Rng;

pub struct PagepadApi<S: KeyValueStore> {
    store: PageStore<S>,
    paths: commands::PagepadPaths,
}

impl<S: KeyValueStore> PagepadApi<S> {
    pub fn new(store: PageStore<S>, paths: commands::PagepadPaths) -> Self {
        Self { store, paths }
    }

    /// Opens the page store on `backend` using the storage key and default icon from `config`.
    pub fn open(
        backend: S,
        config: &PagepadConfig,
        paths: commands::PagepadPaths,
    ) -> Result<Self> {
        let adapter = StorageAdapter::with_key(backend, config.storage_key.clone());
        let store = PageStore::open(adapter)?.with_default_icon(config.default_icon.clone());
        Ok(Self::new(store, paths))
    }

    pub fn store(&self) -> &PageStore<S> {
        &self.store
    }

    pub fn paths(&self) -> &commands::PagepadPaths {
        &self.paths
    }

    pub fn list_pages(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_page(&mut self) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store)
    }

    pub fn select_page(&mut self, page: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(page)?;
        commands::select::run(&mut self.store, &selector)
    }

    pub fn delete_page<C: Confirm + ?Sized>(
        &mut self,
        page: &str,
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(page)?;
        commands::delete::run(&mut self.store, &selector, confirm)
    }

    pub fn view_page(&self, page: Option<&str>) -> Result<commands::CmdResult> {
        let selector = parse_optional_selector(page)?;
        commands::view::run(&self.store, selector.as_ref())
    }

    pub fn set_title(&mut self, page: Option<&str>, title: String) -> Result<commands::CmdResult> {
        let selector = parse_optional_selector(page)?;
        commands::edit::set_title(&mut self.store, selector.as_ref(), title)
    }

    pub fn set_content(
        &mut self,
        page: Option<&str>,
        content: String,
    ) -> Result<commands::CmdResult> {
        let selector = parse_optional_selector(page)?;
        commands::edit::set_content(&mut self.store, selector.as_ref(), content)
    }

    /// Replaces the body of the page with exactly this id. Used when the id came from the
    /// store itself and must not be re-read as a position.
    pub fn set_content_by_id(
        &mut self,
        id: &PageId,
        content: String,
    ) -> Result<commands::CmdResult> {
        let selector = PageSelector::Id(id.clone());
        commands::edit::set_content(&mut self.store, Some(&selector), content)
    }

    pub fn format_page(
        &mut self,
        page: Option<&str>,
        command: &str,
        target: &FormatTarget,
    ) -> Result<commands::CmdResult> {
        let selector = parse_optional_selector(page)?;
        let command: FormatCommand = command.parse()?;
        commands::format::run(&mut self.store, selector.as_ref(), command, target)
    }

    pub fn change_icon<R: Rng + ?Sized>(
        &mut self,
        page: Option<&str>,
        rng: &mut R,
    ) -> Result<commands::CmdResult> {
        let selector = parse_optional_selector(page)?;
        commands::icon::change(&mut self.store, selector.as_ref(), rng)
    }

    pub fn set_icon(&mut self, page: Option<&str>, icon: &str) -> Result<commands::CmdResult> {
        let selector = parse_optional_selector(page)?;
        commands::icon::set(&mut self.store, selector.as_ref(), icon)
    }
}

fn parse_selector(input: &str) -> Result<PageSelector> {
    input.parse().map_err(PagepadError::Api)
}

fn parse_optional_selector(input: Option<&str>) -> Result<Option<PageSelector>> {
    input.map(parse_selector).transpose()
}

pub use crate::commands::delete::AssumeYes;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PagepadPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn api() -> PagepadApi<InMemoryStorage> {
        let paths = PagepadPaths {
            data_dir: PathBuf::from("/nonexistent/pagepad-test"),
        };
        PagepadApi::open(InMemoryStorage::new(), &PagepadConfig::default(), paths).unwrap()
    }

    #[test]
    fn starts_with_welcome_page() {
        let api = api();
        let listed = api.list_pages().unwrap().listed_pages;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].page.icon, "👋");
    }

    #[test]
    fn create_then_edit_dispatches_to_new_page() {
        let mut api = api();
        api.create_page().unwrap();
        api.set_title(None, "Plans".into()).unwrap();
        api.format_page(None, "h1", &FormatTarget::Caret).unwrap();

        let page = api.store().current().unwrap();
        assert_eq!(page.title, "Plans");
        assert_eq!(page.content, "<h1>Heading</h1>");
    }

    #[test]
    fn select_by_index_string() {
        let mut api = api();
        api.create_page().unwrap();
        api.select_page("1").unwrap();
        assert_eq!(api.store().current().unwrap().id.as_str(), "1");
    }

    #[test]
    fn bad_selector_and_command_are_errors() {
        let mut api = api();
        assert!(api.select_page("0").is_err());
        assert!(api
            .format_page(None, "underline", &FormatTarget::Caret)
            .is_err());
    }

    #[test]
    fn set_content_by_id_ignores_positions() {
        use crate::storage::{KeyValueStore, DEFAULT_STORAGE_KEY};

        let mut backend = InMemoryStorage::new();
        backend
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":"9","title":"Nine","content":"","icon":"📄","createdAt":0,"updatedAt":0},
                    {"id":"2","title":"Two","content":"<p>a</p>","icon":"📄","createdAt":0,"updatedAt":0}]"#,
            )
            .unwrap();
        let paths = PagepadPaths {
            data_dir: PathBuf::from("/nonexistent/pagepad-test"),
        };
        let mut api = PagepadApi::open(backend, &PagepadConfig::default(), paths).unwrap();

        api.set_content_by_id(&PageId::from("2"), "<p>b</p>".into())
            .unwrap();

        let pages = api.store().pages();
        assert_eq!(pages[0].content, "");
        assert_eq!(pages[1].content, "<p>b</p>");
    }

    #[test]
    fn delete_with_assume_yes() {
        let mut api = api();
        api.delete_page("1", &mut AssumeYes).unwrap();
        assert!(api.store().is_empty());
        let viewed = api.view_page(None).unwrap();
        assert_eq!(viewed.messages[0].content, "No pages yet");
    }

    #[test]
    fn change_icon_uses_given_rng() {
        let mut api = api();
        let mut rng = StdRng::seed_from_u64(1);
        api.change_icon(None, &mut rng).unwrap();
        let icon = &api.store().current().unwrap().icon;
        assert!(crate::model::ICON_SET.contains(&icon.as_str()));
    }
}
