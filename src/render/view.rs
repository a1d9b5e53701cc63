//! Rendered page view

use super::renderer::Render;
use crate::pagination::Paginator;
use std::fmt;

/// What a control does when picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Go back one page
    Previous,
    /// Jump to a page number
    Page(usize),
    /// Advance one page
    Next,
}

/// One button in the control bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Action behind the button
    pub kind: ControlKind,
    /// Button text
    pub label: String,
    /// Marked disabled (cosmetic only)
    pub disabled: bool,
    /// Marks the current page
    pub active: bool,
}

impl Control {
    fn previous(disabled: bool) -> Self {
        Self {
            kind: ControlKind::Previous,
            label: "Previous".to_string(),
            disabled,
            active: false,
        }
    }

    fn next(disabled: bool) -> Self {
        Self {
            kind: ControlKind::Next,
            label: "Next".to_string(),
            disabled,
            active: false,
        }
    }

    fn page(page: usize, active: bool) -> Self {
        Self {
            kind: ControlKind::Page(page),
            label: page.to_string(),
            disabled: false,
            active,
        }
    }

    /// Style classes, e.g. `prev disabled` or `paginationItem active`
    pub fn class_name(&self) -> String {
        let (base, marker) = match self.kind {
            ControlKind::Previous => ("prev", self.disabled.then_some("disabled")),
            ControlKind::Next => ("next", self.disabled.then_some("disabled")),
            ControlKind::Page(_) => ("paginationItem", self.active.then_some("active")),
        };
        match marker {
            Some(marker) => format!("{base} {marker}"),
            None => base.to_string(),
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active {
            write!(f, "[{}]", self.label)
        } else if self.disabled {
            write!(f, "({})", self.label)
        } else {
            write!(f, "{}", self.label)
        }
    }
}

/// One rendered page of the pagination component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Component heading
    pub title: String,
    /// Rendered items on the page, in order
    pub items: Vec<String>,
    /// Previous, the page window, then Next
    pub controls: Vec<Control>,
}

impl PageView {
    /// Render the paginator's current page
    pub fn build<T, R>(paginator: &Paginator<'_, T>, renderer: &R) -> Self
    where
        R: Render<T> + ?Sized,
    {
        let current = paginator.current_page();
        let items = paginator
            .paginated_data()
            .iter()
            .map(|item| renderer.render(item))
            .collect();

        let window = paginator.pagination_group();
        let mut controls = Vec::with_capacity(window.len() + 2);
        controls.push(Control::previous(paginator.is_previous_disabled()));
        controls.extend(window.pages().map(|page| Control::page(page, page == current)));
        controls.push(Control::next(paginator.is_next_disabled()));

        Self {
            title: paginator.config().title.clone(),
            items,
            controls,
        }
    }

    /// The control bar as one line
    pub fn control_bar(&self) -> String {
        self.controls
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for item in &self.items {
            writeln!(f)?;
            writeln!(f, "{item}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.control_bar())
    }
}
