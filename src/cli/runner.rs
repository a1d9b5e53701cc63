//! CLI runner - executes commands

use crate::cli::browse::BrowseSession;
use crate::cli::commands::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClient;
use crate::render::{PostRenderer, TerminalViewport};
use crate::shell::{Shell, ShellView};
use crate::source::{DataSource, HttpSource};
use crate::types::Post;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.cli.resolve_config()?;
        let client =
            HttpClient::with_config(config.http_client()).context("Failed to build HTTP client")?;
        let source: HttpSource<Post> = HttpSource::new(client, config.url.clone());

        info!("Fetching posts from {}", config.url);
        let mut shell = Shell::new(source);
        shell.mount().await;

        let mut out = io::stdout();
        match &self.cli.command {
            Commands::Show { page } => show(&shell, &config, *page, &mut out),
            Commands::Info => summary(&shell, &config, &mut out),
            Commands::Browse => {
                let viewport = TerminalViewport::new(io::stdout(), out.is_terminal());
                browse(&shell, &config, io::stdin().lock(), &mut out, viewport)
            }
        }
    }
}

/// Print one page, as if its button had been clicked
pub fn show<S, W>(shell: &Shell<S>, config: &AppConfig, page: usize, out: &mut W) -> Result<()>
where
    S: DataSource<Item = Post>,
    W: Write,
{
    let view = match shell.paginator(config.pagination())? {
        Some(mut paginator) => {
            paginator.change_page_label(&page.to_string())?;
            ShellView::page(&paginator, &PostRenderer)
        }
        None => shell.view(config.pagination(), &PostRenderer)?,
    };
    writeln!(out, "{view}")?;
    failure_of(shell)
}

/// Print item and page counts
pub fn summary<S, W>(shell: &Shell<S>, config: &AppConfig, out: &mut W) -> Result<()>
where
    S: DataSource<Item = Post>,
    W: Write,
{
    if let Some(message) = shell.state().error() {
        writeln!(out, "{message}")?;
        return failure_of(shell);
    }

    let items = shell.state().items().unwrap_or_default();
    let pagination = config.pagination();
    let total_pages = pagination
        .page_count
        .total_pages(items.len(), pagination.data_limit);
    let counted = (total_pages * pagination.data_limit).min(items.len());

    writeln!(out, "Source: {}", config.url)?;
    writeln!(out, "Items: {}", items.len())?;
    writeln!(out, "Pages: {total_pages}")?;
    writeln!(out, "Items per page: {}", pagination.data_limit)?;
    writeln!(out, "Page buttons: {}", pagination.page_limit)?;
    if counted < items.len() {
        writeln!(
            out,
            "Items past the last counted page: {}",
            items.len() - counted
        )?;
    }
    Ok(())
}

/// Interactive loop; falls back to the static display when there is
/// nothing to page through
pub fn browse<S, I, W, V>(
    shell: &Shell<S>,
    config: &AppConfig,
    input: I,
    out: &mut W,
    viewport: V,
) -> Result<()>
where
    S: DataSource<Item = Post>,
    I: BufRead,
    W: Write,
    V: crate::render::Viewport,
{
    match shell.paginator(config.pagination())? {
        Some(paginator) => {
            let mut session = BrowseSession::new(paginator, &PostRenderer, viewport);
            session.run(input, out)
        }
        None => {
            let view = shell.view(config.pagination(), &PostRenderer)?;
            writeln!(out, "{view}")?;
            failure_of(shell)
        }
    }
}

fn failure_of<S: DataSource>(shell: &Shell<S>) -> Result<()> {
    match shell.state().error() {
        Some(message) => Err(Error::fetch_failed(message)),
        None => Ok(()),
    }
}
