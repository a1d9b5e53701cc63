//! Error types for post-pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Message shown for any non-success HTTP status.
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong during data fetch";

/// The main error type for post-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Config could not be assembled
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A config field holds a value outside its domain
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// Config file is not valid YAML for [`AppConfig`](crate::config::AppConfig)
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Response body is not the expected JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport failure: DNS, connect, TLS or a broken body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Request did not finish in time
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout
        timeout_ms: u64,
    },

    /// Source URL does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A fetch that did not yield data; the message is shown verbatim
    #[error("{message}")]
    FetchFailed {
        /// Message the shell displayed
        message: String,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// Input does not name one of the page buttons on screen
    #[error("Invalid page '{label}': {reason}")]
    InvalidPage {
        /// Label as entered
        label: String,
        /// Why it was refused
        reason: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Terminal or file I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Error wrapped with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a fetch failure carrying the message the shell showed
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create an error for a label that is not a page number
    pub fn invalid_page(label: impl Into<String>) -> Self {
        Self::InvalidPage {
            label: label.into(),
            reason: "expected a page number".to_string(),
        }
    }

    /// Create an error for a page that has no button in the window
    pub fn page_not_shown(page: usize, first: usize, last: usize) -> Self {
        Self::InvalidPage {
            label: page.to_string(),
            reason: format!("pick one of the pages shown ({first}-{last})"),
        }
    }

    /// The flat message the shell displays in place of the UI.
    ///
    /// Status codes are dropped: every non-success status reads the same.
    pub fn display_message(&self) -> String {
        match self {
            Error::HttpStatus { .. } => FETCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for post-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
