//! Pagination types
//!
//! Configuration and value types shared by the paginator and its views.

use crate::error::{Error, Result};
use crate::types::{Navigation, PageCount};
use std::ops::RangeInclusive;

/// Configuration for a paginated view
///
/// `data_limit`, `page_limit` and `title` have no defaults here; callers
/// always supply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Items shown per page
    pub data_limit: usize,
    /// Page-number buttons shown per window
    pub page_limit: usize,
    /// Heading shown above the items
    pub title: String,
    /// Rule used to derive the page count
    pub page_count: PageCount,
    /// Bound handling for page transitions
    pub navigation: Navigation,
}

impl PaginationConfig {
    /// Create a config with rounded page count and lax navigation
    pub fn new(data_limit: usize, page_limit: usize, title: impl Into<String>) -> Self {
        Self {
            data_limit,
            page_limit,
            title: title.into(),
            page_count: PageCount::default(),
            navigation: Navigation::default(),
        }
    }

    /// Set the page count rule
    #[must_use]
    pub fn page_count(mut self, page_count: PageCount) -> Self {
        self.page_count = page_count;
        self
    }

    /// Set the navigation mode
    #[must_use]
    pub fn navigation(mut self, navigation: Navigation) -> Self {
        self.navigation = navigation;
        self
    }

    /// Reject zero limits
    pub fn validate(&self) -> Result<()> {
        if self.data_limit == 0 {
            return Err(Error::invalid_value("data_limit", "must be at least 1"));
        }
        if self.page_limit == 0 {
            return Err(Error::invalid_value("page_limit", "must be at least 1"));
        }
        Ok(())
    }
}

/// A page transition that actually moved the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// Page before the transition
    pub from: usize,
    /// Page after the transition
    pub to: usize,
}

impl PageChange {
    /// Build a change, or `None` when the page did not move
    pub fn between(from: usize, to: usize) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }
}

/// Contiguous run of page numbers shown as buttons
///
/// Always holds exactly `len` numbers starting at `first`; it is not clamped
/// to the real page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    first: usize,
    len: usize,
}

impl PageWindow {
    /// Window of `page_limit` pages containing `page`.
    ///
    /// Windows are aligned to multiples of `page_limit`; page 0 falls in the
    /// first window. A zero `page_limit` is treated as 1.
    pub fn containing(page: usize, page_limit: usize) -> Self {
        let page_limit = page_limit.max(1);
        let start = (page.saturating_sub(1) / page_limit) * page_limit;
        Self {
            first: start + 1,
            len: page_limit,
        }
    }

    /// First page number in the window
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last page number in the window
    pub fn last(&self) -> usize {
        self.first + self.len - 1
    }

    /// Number of buttons in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// Windows are never empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Page numbers in order
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.first..=self.last()
    }

    /// Check if a page number is one of the buttons
    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }

    /// Collect the page numbers
    pub fn to_vec(&self) -> Vec<usize> {
        self.pages().collect()
    }
}

impl IntoIterator for PageWindow {
    type Item = usize;
    type IntoIter = RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}
