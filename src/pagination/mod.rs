//! Pagination module
//!
//! Client-side pagination over an in-memory item list.
//!
//! # Overview
//!
//! A [`Paginator`] borrows the full item list and tracks the current page.
//! From that it derives the slice of items on the page and the window of
//! page-number buttons around it. Every transition that moves the page
//! returns a [`PageChange`] so the host can reset its viewport.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{PageChange, PageWindow, PaginationConfig};
