use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const DEFAULT_ICON: &str = "📄";
pub const UNTITLED: &str = "Untitled";

pub const WELCOME_ID: &str = "1";
pub const WELCOME_TITLE: &str = "Welcome to Notion Clone";
pub const WELCOME_ICON: &str = "👋";
pub const WELCOME_CONTENT: &str = concat!(
    "<h1>Welcome!</h1>",
    "<p>This is a minimal Notion clone built with Next.js and React.</p>",
    "<h2>Features</h2>",
    "<ul><li>Create multiple pages</li><li>Rich text editing</li>",
    "<li>Auto-save to local storage</li><li>Clean, minimal interface</li></ul>",
    "<h2>Getting Started</h2>",
    "<p>Click the \"+ New Page\" button in the sidebar to create a new page.</p>",
    "<p>Start typing to edit this page!</p>",
);

/// Glyphs the icon picker draws from.
pub const ICON_SET: [&str; 12] = [
    "📄", "📝", "📋", "📌", "📍", "🎯", "💡", "⭐", "🔥", "✨", "🎨", "🚀",
];

/// Opaque page identity. Assigned once at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single note page. The body markup is opaque to everything except `markup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub content: String,
    pub icon: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(icon: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PageId::generate(),
            title: String::new(),
            content: String::new(),
            icon: icon.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The page seeded into an empty store on first run.
    pub fn welcome() -> Self {
        let now = Utc::now();
        Self {
            id: PageId::from(WELCOME_ID),
            title: WELCOME_TITLE.to_string(),
            content: WELCOME_CONTENT.to_string(),
            icon: WELCOME_ICON.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }
}

/// Partial update merged into an existing page. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub icon: Option<String>,
}

impl PagePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn icon(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.icon.is_none()
    }

    /// Merges into `page` and bumps `updated_at`. Identity and creation time are never touched.
    pub fn apply_to(&self, page: &mut Page) {
        if let Some(title) = &self.title {
            page.title = title.clone();
        }
        if let Some(content) = &self.content {
            page.content = content.clone();
        }
        if let Some(icon) = &self.icon {
            page.icon = icon.clone();
        }
        page.updated_at = Utc::now();
    }
}
