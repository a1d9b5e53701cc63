#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

//! # post-pager
//!
//! Fetch a list of posts once, then browse them with client-side
//! pagination: a page of items, a window of page-number buttons, and
//! Previous/Next controls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use post_pager::http::HttpClient;
//! use post_pager::pagination::PaginationConfig;
//! use post_pager::render::PostRenderer;
//! use post_pager::shell::Shell;
//! use post_pager::source::{HttpSource, DEFAULT_POSTS_URL};
//! use post_pager::types::Post;
//!
//! #[tokio::main]
//! async fn main() -> post_pager::Result<()> {
//!     let source: HttpSource<Post> = HttpSource::new(HttpClient::new()?, DEFAULT_POSTS_URL);
//!     let mut shell = Shell::new(source);
//!     shell.mount().await;
//!
//!     let view = shell.view(PaginationConfig::new(10, 5, "Posts"), &PostRenderer)?;
//!     println!("{view}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   fetch once   ┌──────────────┐
//! │  DataSource  │ ─────────────▶ │    Shell     │ loading / failed / loaded
//! └──────────────┘                └──────┬───────┘
//!                                        │ &[T]
//!                                 ┌──────▼───────┐
//!                                 │  Paginator   │ slice + page window
//!                                 └──────┬───────┘
//!                                        │ Render<T>
//!                                 ┌──────▼───────┐
//!                                 │   PageView   │ items + control bar
//!                                 └──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client
pub mod http;

/// Data sources
pub mod source;

/// Pagination engine
pub mod pagination;

/// Item renderers and page views
pub mod render;

/// Fetch orchestration
pub mod shell;

/// Application configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use pagination::{PaginationConfig, Paginator};
pub use render::{PostRenderer, Render};
pub use shell::{FetchState, Shell, ShellView};
