//! Rendering module
//!
//! Turns paginator state into display text.
//!
//! - [`Render`] - injectable per-item renderer, generic over the item type
//! - [`PageView`] - one rendered page: title, items and the control bar
//! - [`Viewport`] - host display that is reset to the top on page changes

mod renderer;
mod view;
mod viewport;

pub use renderer::{PostRenderer, Render};
pub use view::{Control, ControlKind, PageView};
pub use viewport::{TerminalViewport, Viewport};
