//! CLI module
//!
//! Command-line interface for the pager.
//!
//! # Commands
//!
//! - `show` - Render one page and exit
//! - `browse` - Interactive paging over stdin
//! - `info` - Item and page counts

mod browse;
mod commands;
mod runner;

pub use browse::{BrowseCommand, BrowseSession};
pub use commands::{Cli, Commands};
pub use runner::Runner;

#[cfg(test)]
mod tests;
