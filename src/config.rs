//! Application configuration
//!
//! Settings can come from a YAML file; command-line flags override
//! individual fields afterwards. Every field has a default, so an empty
//! file is a valid config.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::pagination::PaginationConfig;
use crate::source::DEFAULT_POSTS_URL;
use crate::types::{Navigation, PageCount};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Endpoint returning the JSON array of posts
    pub url: String,

    /// Items per page
    pub data_limit: usize,

    /// Page buttons per window
    pub page_limit: usize,

    /// Component heading
    pub title: String,

    /// Page count rule
    pub page_count: PageCount,

    /// Bound handling for page transitions
    pub navigation: Navigation,

    /// HTTP settings
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_POSTS_URL.to_string(),
            data_limit: 10,
            page_limit: 5,
            title: "Posts".to_string(),
            page_count: PageCount::default(),
            navigation: Navigation::default(),
            http: HttpConfig::default(),
        }
    }
}

/// HTTP settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Override the user agent
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl AppConfig {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Check limits and URL
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.url)?;
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value("http.timeout_secs", "must be at least 1"));
        }
        self.pagination().validate()
    }

    /// Pagination settings
    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig::new(self.data_limit, self.page_limit, self.title.clone())
            .page_count(self.page_count)
            .navigation(self.navigation)
    }

    /// HTTP client settings
    pub fn http_client(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig {
            timeout: Duration::from_secs(self.http.timeout_secs),
            ..HttpClientConfig::default()
        };
        if let Some(agent) = &self.http.user_agent {
            config.user_agent.clone_from(agent);
        }
        config
    }
}
