//! Item renderers

use crate::types::Post;

/// Draws one item as a block of text
pub trait Render<T: ?Sized> {
    /// Render a single item
    fn render(&self, item: &T) -> String;
}

impl<T: ?Sized, F> Render<T> for F
where
    F: Fn(&T) -> String,
{
    fn render(&self, item: &T) -> String {
        self(item)
    }
}

/// Renders a [`Post`] as id, title and body lines
#[derive(Debug, Clone, Copy, Default)]
pub struct PostRenderer;

impl Render<Post> for PostRenderer {
    fn render(&self, item: &Post) -> String {
        format!(
            "#{}\n{}\n{}",
            item.id_label(),
            item.title_text(),
            item.body_text()
        )
    }
}
