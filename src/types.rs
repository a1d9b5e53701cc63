//! Common types used throughout post-pager
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Post
// ============================================================================

/// One fetched record.
///
/// Only `id` is required. `title` and `body` take any JSON value and default
/// to `null`; anything else the API sends is kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier, also the record's identity
    pub id: JsonValue,
    /// Post title
    #[serde(default)]
    pub title: JsonValue,
    /// Post body
    #[serde(default)]
    pub body: JsonValue,
    /// Fields not covered above
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Post {
    /// Create a post with no extra fields
    pub fn new(
        id: impl Into<JsonValue>,
        title: impl Into<JsonValue>,
        body: impl Into<JsonValue>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            extra: JsonObject::new(),
        }
    }

    /// Identifier as display text (`1`, not `"1"`, for string ids)
    pub fn id_label(&self) -> String {
        value_text(&self.id)
    }

    /// Title as display text
    pub fn title_text(&self) -> String {
        value_text(&self.title)
    }

    /// Body as display text
    pub fn body_text(&self) -> String {
        value_text(&self.body)
    }
}

/// Strings bare, `null` empty, everything else as compact JSON
fn value_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Page Count
// ============================================================================

/// How the number of pages is derived from the item count
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PageCount {
    /// Round `len / data_limit` to the nearest integer, halves up.
    /// Undercounts when the last page is less than half full.
    #[default]
    Rounded,
    /// Ceiling division: every item lands on a counted page
    Ceiling,
}

impl PageCount {
    /// Number of pages for `len` items at `per_page` items each.
    ///
    /// `per_page` must be non-zero.
    pub fn total_pages(self, len: usize, per_page: usize) -> usize {
        match self {
            PageCount::Rounded => {
                let (whole, rest) = (len / per_page, len % per_page);
                if rest >= per_page - rest {
                    whole + 1
                } else {
                    whole
                }
            }
            PageCount::Ceiling => len.div_ceil(per_page),
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// How page transitions treat the page bounds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Transitions are applied as asked; the page can leave `[1, total_pages]`
    #[default]
    Lax,
    /// Transitions are clamped to `[1, max(1, total_pages)]`
    Clamped,
}
