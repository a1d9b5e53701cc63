//! HTTP client module
//!
//! Thin wrapper over reqwest used by the data source.
//!
//! # Features
//!
//! - **Single GET**: one request per fetch with a whole-request timeout
//! - **Status mapping**: any non-success status becomes [`Error::HttpStatus`]
//! - **JSON decoding**: body parse failures surface as [`Error::JsonParse`]
//!
//! [`Error::HttpStatus`]: crate::error::Error::HttpStatus
//! [`Error::JsonParse`]: crate::error::Error::JsonParse

mod client;

pub use client::{HttpClient, HttpClientConfig};
