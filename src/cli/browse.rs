//! Interactive paging loop

use crate::error::{Error, Result};
use crate::pagination::{PageChange, Paginator};
use crate::render::{Render, Viewport};
use crate::shell::ShellView;
use std::io::{BufRead, Write};

const HELP: &str = "Commands: n/next, p/prev, <page number>, q/quit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Next control
    Next,
    /// Previous control
    Previous,
    /// Page button with this label
    Page(String),
    /// Leave the loop
    Quit,
    /// Show the command list
    Help,
    /// Nothing entered
    Empty,
}

impl BrowseCommand {
    /// Parse a line; anything unrecognised is treated as a page label
    pub fn parse(line: &str) -> Self {
        let word = line.trim();
        match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "q" | "quit" | "exit" => Self::Quit,
            "h" | "help" | "?" => Self::Help,
            _ => Self::Page(word.to_string()),
        }
    }
}

/// Drives a paginator from line-based input
pub struct BrowseSession<'a, 'r, T, R: ?Sized, V> {
    paginator: Paginator<'a, T>,
    renderer: &'r R,
    viewport: V,
}

impl<'a, 'r, T, R, V> BrowseSession<'a, 'r, T, R, V>
where
    R: Render<T> + ?Sized,
    V: Viewport,
{
    /// Create a session over a positioned paginator
    pub fn new(paginator: Paginator<'a, T>, renderer: &'r R, viewport: V) -> Self {
        Self {
            paginator,
            renderer,
            viewport,
        }
    }

    /// The paginator in its current state
    pub fn paginator(&self) -> &Paginator<'a, T> {
        &self.paginator
    }

    /// Give back the viewport
    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// Apply one command. Returns the change, if the page moved.
    pub fn apply(&mut self, command: &BrowseCommand) -> Result<Option<PageChange>> {
        let change = match command {
            BrowseCommand::Next => self.paginator.go_to_next_page(),
            BrowseCommand::Previous => self.paginator.go_to_previous_page(),
            BrowseCommand::Page(label) => self.paginator.change_page_label(label)?,
            BrowseCommand::Quit | BrowseCommand::Help | BrowseCommand::Empty => None,
        };
        if change.is_some() {
            self.viewport.scroll_to_top()?;
        }
        Ok(change)
    }

    /// Render, read a command, repeat until quit or end of input
    pub fn run<I, O>(&mut self, input: I, out: &mut O) -> Result<()>
    where
        I: BufRead,
        O: Write,
    {
        self.draw(out)?;
        let mut lines = input.lines();

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let command = BrowseCommand::parse(&line?);

            match command {
                BrowseCommand::Quit => break,
                BrowseCommand::Help => writeln!(out, "{HELP}")?,
                BrowseCommand::Empty => {}
                _ => match self.apply(&command) {
                    Ok(Some(_)) => self.draw(out)?,
                    Ok(None) => {}
                    Err(e @ Error::InvalidPage { .. }) => writeln!(out, "{e}. {HELP}")?,
                    Err(e) => return Err(e),
                },
            }
        }
        Ok(())
    }

    fn draw<O: Write>(&self, out: &mut O) -> Result<()> {
        let view = ShellView::page(&self.paginator, self.renderer);
        writeln!(out, "{view}")?;
        Ok(())
    }
}
