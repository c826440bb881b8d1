use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory slots for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    items: HashMap<String, String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Page;
    use crate::storage::DEFAULT_STORAGE_KEY;

    pub struct StorageFixture {
        pub storage: InMemoryStorage,
        pages: Vec<Page>,
    }

    impl Default for StorageFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StorageFixture {
        pub fn new() -> Self {
            Self {
                storage: InMemoryStorage::new(),
                pages: Vec::new(),
            }
        }

        /// Adds a titled page with a short paragraph body.
        pub fn with_page(mut self, title: &str) -> Self {
            let mut page = Page::new(crate::model::DEFAULT_ICON);
            page.title = title.to_string();
            page.content = format!("<p>Content for {}</p>", title);
            self.pages.push(page);
            self
        }

        pub fn with_pages(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_page(&format!("Test Page {}", i + 1));
            }
            self
        }

        /// Writes the accumulated pages under the default key, even when there are none.
        pub fn build(mut self) -> InMemoryStorage {
            let json = serde_json::to_string(&self.pages).unwrap();
            self.storage.set_item(DEFAULT_STORAGE_KEY, &json).unwrap();
            self.storage
        }
    }
}
