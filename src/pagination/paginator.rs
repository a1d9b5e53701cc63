//! Paginator over a borrowed item list

use super::types::{PageChange, PageWindow, PaginationConfig};
use crate::error::{Error, Result};
use crate::types::Navigation;
use tracing::debug;

/// Current-page state over a fixed, borrowed item list
///
/// The page count is derived once at construction. The current page starts
/// at 1 and only moves through the transition methods.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    data: &'a [T],
    config: PaginationConfig,
    total_pages: usize,
    current_page: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Create a paginator positioned on page 1
    pub fn new(data: &'a [T], config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        let total_pages = config.page_count.total_pages(data.len(), config.data_limit);

        Ok(Self {
            data,
            config,
            total_pages,
            current_page: 1,
        })
    }

    /// The configuration this paginator was built with
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// The full item list
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Number of pages, fixed at construction
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Page currently shown
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items on the current page
    pub fn paginated_data(&self) -> &'a [T] {
        self.page_data(self.current_page)
    }

    /// Items on `page`, clipped to the list.
    ///
    /// Pages past the data (and page 0) give an empty slice.
    pub fn page_data(&self, page: usize) -> &'a [T] {
        let Some(start) = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.config.data_limit))
        else {
            return &[];
        };
        if start >= self.data.len() {
            return &[];
        }
        let end = start
            .saturating_add(self.config.data_limit)
            .min(self.data.len());
        &self.data[start..end]
    }

    /// Page-number buttons around the current page
    pub fn pagination_group(&self) -> PageWindow {
        PageWindow::containing(self.current_page, self.config.page_limit)
    }

    /// Advance one page
    pub fn go_to_next_page(&mut self) -> Option<PageChange> {
        self.move_to(self.current_page.saturating_add(1))
    }

    /// Go back one page
    pub fn go_to_previous_page(&mut self) -> Option<PageChange> {
        self.move_to(self.current_page.saturating_sub(1))
    }

    /// Jump to a page picked from the window
    pub fn change_page(&mut self, page: usize) -> Option<PageChange> {
        self.move_to(page)
    }

    /// Jump to the page a button label names.
    ///
    /// Only labels of the buttons in the current window are accepted; any
    /// other number fails with [`Error::InvalidPage`] and leaves the page as is.
    pub fn change_page_label(&mut self, label: &str) -> Result<Option<PageChange>> {
        let page = label
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::invalid_page(label))?;
        let window = self.pagination_group();
        if !window.contains(page) {
            return Err(Error::page_not_shown(page, window.first(), window.last()));
        }
        Ok(self.change_page(page))
    }

    /// Previous control is marked disabled on page 1.
    ///
    /// The marker is cosmetic; it does not block the transition.
    pub fn is_previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    /// Next control is marked disabled on exactly the last counted page
    pub fn is_next_disabled(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Check if a page number lies within `[1, total_pages]`
    pub fn is_within_bounds(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    fn move_to(&mut self, target: usize) -> Option<PageChange> {
        let target = match self.config.navigation {
            Navigation::Lax => target,
            Navigation::Clamped => target.clamp(1, self.total_pages.max(1)),
        };

        let change = PageChange::between(self.current_page, target)?;
        debug!(
            "Page {} -> {} (of {})",
            change.from, change.to, self.total_pages
        );
        self.current_page = target;
        Some(change)
    }
}
