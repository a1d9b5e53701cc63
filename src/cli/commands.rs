//! CLI commands and argument parsing

use crate::config::AppConfig;
use crate::error::Result;
use crate::types::{Navigation, PageCount};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch posts once and page through them
#[derive(Parser, Debug)]
#[command(name = "post-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Endpoint returning a JSON array of posts
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Items per page
    #[arg(long, global = true)]
    pub data_limit: Option<usize>,

    /// Page buttons per window
    #[arg(long, global = true)]
    pub page_limit: Option<usize>,

    /// Component heading
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Page count rule
    #[arg(long, global = true, value_enum)]
    pub page_count: Option<PageCount>,

    /// Bound handling for page transitions
    #[arg(long, global = true, value_enum)]
    pub navigation: Option<Navigation>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render one page and exit
    Show {
        /// Page to show (as if its button was clicked)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Page through the posts interactively
    Browse,

    /// Show item and page counts
    Info,
}

impl Cli {
    /// Config file (or defaults) with flag overrides applied, validated
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(url) = &self.url {
            config.url.clone_from(url);
        }
        if let Some(data_limit) = self.data_limit {
            config.data_limit = data_limit;
        }
        if let Some(page_limit) = self.page_limit {
            config.page_limit = page_limit;
        }
        if let Some(title) = &self.title {
            config.title.clone_from(title);
        }
        if let Some(page_count) = self.page_count {
            config.page_count = page_count;
        }
        if let Some(navigation) = self.navigation {
            config.navigation = navigation;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.http.timeout_secs = timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }
}
