//! Tests for the CLI module

use super::runner::{browse, show, summary};
use super::*;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageChange, PaginationConfig, Paginator};
use crate::render::{PostRenderer, Viewport};
use crate::shell::Shell;
use crate::source::{DataSource, StaticSource};
use crate::types::{Navigation, PageCount, Post};
use async_trait::async_trait;
use clap::Parser;
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[derive(Debug, Default)]
struct RecordingViewport {
    resets: usize,
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&mut self) -> Result<()> {
        self.resets += 1;
        Ok(())
    }
}

struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    type Item = Post;

    async fn fetch(&self) -> Result<Vec<Post>> {
        Err(Error::http_status(502, "bad gateway"))
    }
}

fn posts(n: usize) -> Vec<Post> {
    (1..=n)
        .map(|i| Post::new(i, format!("title {i}"), format!("body {i}")))
        .collect()
}

async fn loaded_shell(n: usize) -> Shell<StaticSource<Post>> {
    let mut shell = Shell::new(StaticSource::new(posts(n)));
    shell.mount().await;
    shell
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

// ============================================================================
// Argument Parsing Tests
// ============================================================================

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["post-pager", "show", "--page", "3"]).unwrap();
    assert_eq!(cli.command, Commands::Show { page: 3 });
}

#[test]
fn test_parse_show_default_page() {
    let cli = Cli::try_parse_from(["post-pager", "show"]).unwrap();
    assert_eq!(cli.command, Commands::Show { page: 1 });
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "post-pager",
        "browse",
        "--data-limit",
        "20",
        "--page-count",
        "ceiling",
        "--navigation",
        "clamped",
    ])
    .unwrap();

    assert_eq!(cli.command, Commands::Browse);
    assert_eq!(cli.data_limit, Some(20));
    assert_eq!(cli.page_count, Some(PageCount::Ceiling));
    assert_eq!(cli.navigation, Some(Navigation::Clamped));
}

#[test]
fn test_resolve_config_overrides() {
    let cli = Cli::try_parse_from([
        "post-pager",
        "info",
        "--url",
        "http://localhost:9000/posts",
        "--page-limit",
        "3",
        "--title",
        "Articles",
        "--timeout-secs",
        "5",
    ])
    .unwrap();

    let config = cli.resolve_config().unwrap();
    assert_eq!(config.url, "http://localhost:9000/posts");
    assert_eq!(config.page_limit, 3);
    assert_eq!(config.title, "Articles");
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.data_limit, 10);
}

#[test]
fn test_resolve_config_flag_beats_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pager.yaml");
    std::fs::write(&path, "data_limit: 25\npage_limit: 4\n").unwrap();

    let cli = Cli::try_parse_from([
        "post-pager",
        "show",
        "--config",
        path.to_str().unwrap(),
        "--data-limit",
        "7",
    ])
    .unwrap();

    let config = cli.resolve_config().unwrap();
    assert_eq!(config.data_limit, 7);
    assert_eq!(config.page_limit, 4);
}

#[test]
fn test_resolve_config_rejects_zero() {
    let cli = Cli::try_parse_from(["post-pager", "show", "--data-limit", "0"]).unwrap();
    assert!(matches!(
        cli.resolve_config(),
        Err(Error::InvalidConfigValue { .. })
    ));
}

// ============================================================================
// Browse Command Tests
// ============================================================================

#[test]
fn test_browse_command_parse() {
    assert_eq!(BrowseCommand::parse("n"), BrowseCommand::Next);
    assert_eq!(BrowseCommand::parse(" Next "), BrowseCommand::Next);
    assert_eq!(BrowseCommand::parse("prev"), BrowseCommand::Previous);
    assert_eq!(BrowseCommand::parse("q"), BrowseCommand::Quit);
    assert_eq!(BrowseCommand::parse("?"), BrowseCommand::Help);
    assert_eq!(BrowseCommand::parse("   "), BrowseCommand::Empty);
    assert_eq!(BrowseCommand::parse("7"), BrowseCommand::Page("7".to_string()));
}

#[test]
fn test_session_apply_resets_viewport_on_change() {
    let data = posts(30);
    let paginator = Paginator::new(&data, PaginationConfig::new(10, 5, "Posts")).unwrap();
    let mut session = BrowseSession::new(paginator, &PostRenderer, RecordingViewport::default());

    let change = session.apply(&BrowseCommand::Next).unwrap();
    assert_eq!(change, Some(PageChange { from: 1, to: 2 }));

    // Clicking the current page is not a change
    let change = session.apply(&BrowseCommand::Page("2".to_string())).unwrap();
    assert_eq!(change, None);

    let err = session
        .apply(&BrowseCommand::Page("two".to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPage { .. }));

    assert_eq!(session.paginator().current_page(), 2);
    assert_eq!(session.into_viewport().resets, 1);
}

#[test]
fn test_session_apply_rejects_page_outside_window() {
    let data = posts(100);
    let paginator = Paginator::new(&data, PaginationConfig::new(10, 5, "Posts")).unwrap();
    let mut session = BrowseSession::new(paginator, &PostRenderer, RecordingViewport::default());

    let err = session
        .apply(&BrowseCommand::Page("42".to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPage { .. }));

    assert_eq!(session.paginator().current_page(), 1);
    assert_eq!(session.into_viewport().resets, 0);
}

#[test]
fn test_session_run_reports_page_outside_window() {
    let data = posts(100);
    let paginator = Paginator::new(&data, PaginationConfig::new(10, 5, "Posts")).unwrap();
    let mut session = BrowseSession::new(paginator, &PostRenderer, RecordingViewport::default());

    let mut out = Vec::new();
    session.run(Cursor::new("42
q
"), &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("Invalid page '42': pick one of the pages shown (1-5)"));
    assert_eq!(session.paginator().current_page(), 1);
}

#[test]
fn test_session_run() {
    let data = posts(3);
    let paginator = Paginator::new(&data, PaginationConfig::new(2, 2, "Posts")).unwrap();
    let mut session = BrowseSession::new(paginator, &PostRenderer, RecordingViewport::default());

    let input = Cursor::new("n\nbogus\nq\nn\n");
    let mut out = Vec::new();
    session.run(input, &mut out).unwrap();

    let text = output(out);
    assert!(text.starts_with("Data here!\n\nPosts\n\n#1\ntitle 1\nbody 1\n"));
    assert!(text.contains("Previous 1 [2] (Next)"));
    assert!(text.contains("Invalid page 'bogus': expected a page number"));
    // Input after quit is not read
    assert_eq!(session.paginator().current_page(), 2);
    assert_eq!(session.into_viewport().resets, 1);
}

#[test]
fn test_session_run_stops_at_end_of_input() {
    let data = posts(3);
    let paginator = Paginator::new(&data, PaginationConfig::new(2, 2, "Posts")).unwrap();
    let mut session = BrowseSession::new(paginator, &PostRenderer, RecordingViewport::default());

    let mut out = Vec::new();
    session.run(Cursor::new("2\n"), &mut out).unwrap();
    assert_eq!(session.paginator().current_page(), 2);
}

// ============================================================================
// Runner Command Tests
// ============================================================================

#[tokio::test]
async fn test_show_page() {
    let shell = loaded_shell(23).await;
    let mut out = Vec::new();

    show(&shell, &AppConfig::default(), 3, &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("#21\ntitle 21"));
    assert!(text.contains("#23\ntitle 23"));
    assert!(!text.contains("#20\n"));
    assert!(text.ends_with("Previous 1 2 [3] 4 5 Next\n"));
}

#[tokio::test]
async fn test_show_clamped_page() {
    let shell = loaded_shell(23).await;
    let config = AppConfig {
        navigation: Navigation::Clamped,
        ..AppConfig::default()
    };
    let mut out = Vec::new();

    show(&shell, &config, 4, &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("#11\ntitle 11"));
    assert!(text.ends_with("Previous 1 [2] 3 4 5 (Next)\n"));
}

#[tokio::test]
async fn test_show_page_outside_window() {
    let shell = loaded_shell(100).await;
    let mut out = Vec::new();

    let err = show(&shell, &AppConfig::default(), 9, &mut out).unwrap_err();

    assert!(matches!(err, Error::InvalidPage { .. }));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_show_empty() {
    let shell = loaded_shell(0).await;
    let mut out = Vec::new();

    show(&shell, &AppConfig::default(), 1, &mut out).unwrap();
    assert_eq!(output(out), "Data here!\n\nNo Posts to display\n");
}

#[tokio::test]
async fn test_show_failed_fetch() {
    let mut shell = Shell::new(FailingSource);
    shell.mount().await;
    let mut out = Vec::new();

    let err = show(&shell, &AppConfig::default(), 1, &mut out).unwrap_err();

    assert_eq!(output(out), "Something went wrong during data fetch\n");
    assert!(matches!(err, Error::FetchFailed { .. }));
}

#[tokio::test]
async fn test_summary_reports_uncounted_items() {
    let shell = loaded_shell(23).await;
    let mut out = Vec::new();

    summary(&shell, &AppConfig::default(), &mut out).unwrap();

    assert_eq!(
        output(out),
        "Source: https://jsonplaceholder.typicode.com/posts\n\
         Items: 23\n\
         Pages: 2\n\
         Items per page: 10\n\
         Page buttons: 5\n\
         Items past the last counted page: 3\n"
    );
}

#[tokio::test]
async fn test_summary_ceiling() {
    let shell = loaded_shell(23).await;
    let config = AppConfig {
        page_count: PageCount::Ceiling,
        ..AppConfig::default()
    };
    let mut out = Vec::new();

    summary(&shell, &config, &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("Pages: 3\n"));
    assert!(!text.contains("past the last counted page"));
}

#[tokio::test]
async fn test_browse_with_items() {
    let shell = loaded_shell(12).await;
    let mut out = Vec::new();
    let mut viewport = RecordingViewport::default();

    browse(
        &shell,
        &AppConfig::default(),
        Cursor::new("next\nquit\n"),
        &mut out,
        &mut viewport,
    )
    .unwrap();

    let text = output(out);
    assert!(text.contains("#11\ntitle 11"));
    assert_eq!(viewport.resets, 1);
}

#[tokio::test]
async fn test_browse_failed_fetch() {
    let mut shell = Shell::new(FailingSource);
    shell.mount().await;
    let mut out = Vec::new();

    let result = browse(
        &shell,
        &AppConfig::default(),
        Cursor::new("n\n"),
        &mut out,
        RecordingViewport::default(),
    );

    assert!(result.is_err());
    assert_eq!(output(out), "Something went wrong during data fetch\n");
}
