//! # Display Indexes
//!
//! Page ids are opaque and long, so the CLI refers to pages by their 1-based position in
//! the list (`1`, `2`, ...). A [`PageSelector`] accepts either form; anything that does
//! not parse as a position is taken as a page id.

use crate::model::{Page, PageId};
use std::fmt;
use std::str::FromStr;

/// A user input naming a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelector {
    Index(usize),
    Id(PageId),
}

impl fmt::Display for PageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelector::Index(i) => write!(f, "{}", i),
            PageSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for PageSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty page selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(0) => Err("page indexes start at 1".to_string()),
            Ok(n) => Ok(PageSelector::Index(n)),
            Err(_) => Ok(PageSelector::Id(PageId::from(s))),
        }
    }
}

/// A page as shown in the list: its position and whether it is the selected one.
#[derive(Debug, Clone)]
pub struct DisplayPage {
    pub page: Page,
    pub index: usize,
    pub is_selected: bool,
}

/// Numbers pages in store order, starting at 1.
pub fn index_pages(pages: &[Page], selected: Option<&PageId>) -> Vec<DisplayPage> {
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| DisplayPage {
            page: page.clone(),
            index: i + 1,
            is_selected: selected == Some(&page.id),
        })
        .collect()
}
