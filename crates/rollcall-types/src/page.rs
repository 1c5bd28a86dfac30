use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot of a page-number window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageItem {
    /// A navigable page number (1-based)
    Page(usize),
    /// A gap of one or more hidden pages
    Ellipsis,
}

impl PageItem {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::Ellipsis)
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "…"),
        }
    }
}

impl From<usize> for PageItem {
    fn from(page: usize) -> Self {
        PageItem::Page(page)
    }
}
