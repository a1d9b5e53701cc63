//! Fetch orchestration
//!
//! The [`Shell`] fetches the item list once, keeps the outcome as a
//! [`FetchState`], and picks what to display: the error alone, the empty
//! notice, or the paginated component.
//!
//! # Cancellation
//!
//! [`Shell::mount`] borrows the shell mutably and writes state only after
//! the fetch resolves. Dropping the future (unmount, timeout, `select!`)
//! cancels the request and leaves the shell in [`FetchState::Loading`];
//! a later `mount` fetches again.

use crate::error::Result;
use crate::pagination::{PaginationConfig, Paginator};
use crate::render::{PageView, Render};
use crate::source::DataSource;
use std::fmt;
use tracing::{debug, warn};

/// Heading shown above the component
pub const HEADING: &str = "Data here!";

/// Shown when the fetch returned no items
pub const EMPTY_MESSAGE: &str = "No Posts to display";

/// Outcome of the one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing fetched yet
    Loading,
    /// Fetch failed; the message replaces the whole display
    Failed(String),
    /// Fetch succeeded
    Loaded(Vec<T>),
}

impl<T> FetchState<T> {
    /// Fetched items, if any were loaded
    pub fn items(&self) -> Option<&[T]> {
        match self {
            FetchState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    /// Error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Check if the fetch is still pending
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// What the shell displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    /// Error message, nothing else
    Error(String),
    /// No items (also shown while loading)
    Empty,
    /// A rendered page
    Page(PageView),
}

impl ShellView {
    /// Display for the paginator's current page
    pub fn page<T, R>(paginator: &Paginator<'_, T>, renderer: &R) -> Self
    where
        R: Render<T> + ?Sized,
    {
        ShellView::Page(PageView::build(paginator, renderer))
    }
}

impl fmt::Display for ShellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellView::Error(message) => write!(f, "{message}"),
            ShellView::Empty => write!(f, "{HEADING}\n\n{EMPTY_MESSAGE}"),
            ShellView::Page(page) => write!(f, "{HEADING}\n\n{page}"),
        }
    }
}

/// Owns the data source and the fetched items
pub struct Shell<S: DataSource> {
    source: S,
    state: FetchState<S::Item>,
    mounted: bool,
}

impl<S: DataSource> Shell<S> {
    /// Create an unmounted shell
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: FetchState::Loading,
            mounted: false,
        }
    }

    /// Current fetch state
    pub fn state(&self) -> &FetchState<S::Item> {
        &self.state
    }

    /// Check if a fetch has completed
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fetch once. Later calls return the stored state without fetching.
    pub async fn mount(&mut self) -> &FetchState<S::Item> {
        if self.mounted {
            return &self.state;
        }

        let result = self.source.fetch().await;
        self.mounted = true;
        self.state = match result {
            Ok(items) => {
                debug!("Loaded {} items", items.len());
                FetchState::Loaded(items)
            }
            Err(e) => {
                warn!("Fetch failed: {e}");
                FetchState::Failed(e.display_message())
            }
        };
        &self.state
    }

    /// Paginator over the loaded items, positioned on page 1.
    ///
    /// `None` unless the fetch loaded at least one item.
    pub fn paginator(&self, config: PaginationConfig) -> Result<Option<Paginator<'_, S::Item>>> {
        match self.state.items() {
            Some(items) if !items.is_empty() => Paginator::new(items, config).map(Some),
            _ => Ok(None),
        }
    }

    /// Initial display: page 1 when there are items
    pub fn view<R>(&self, config: PaginationConfig, renderer: &R) -> Result<ShellView>
    where
        R: Render<S::Item> + ?Sized,
    {
        if let Some(message) = self.state.error() {
            return Ok(ShellView::Error(message.to_string()));
        }
        Ok(match self.paginator(config)? {
            Some(paginator) => ShellView::page(&paginator, renderer),
            None => ShellView::Empty,
        })
    }
}

impl<S: DataSource + fmt::Debug> fmt::Debug for Shell<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("source", &self.source)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
