//! Data sources
//!
//! A [`DataSource`] yields the full item list in one call. The shell calls
//! it once per mount.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::Post;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Default endpoint for posts
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Anything that can produce the item list
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Item type produced
    type Item: Send;

    /// Fetch every item, in order
    async fn fetch(&self) -> Result<Vec<Self::Item>>;
}

/// Fetches a JSON array with one `GET`
pub struct HttpSource<T = Post> {
    client: HttpClient,
    url: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpSource<T> {
    /// Create a source reading `url` through `client`
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            _item: PhantomData,
        }
    }

    /// URL this source reads
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<T> std::fmt::Debug for HttpSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSource")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T> DataSource for HttpSource<T>
where
    T: DeserializeOwned + Send,
{
    type Item = T;

    async fn fetch(&self) -> Result<Vec<T>> {
        let items: Vec<T> = self.client.get_json(&self.url).await?;
        debug!("Fetched {} items from {}", items.len(), self.url);
        Ok(items)
    }
}

/// Serves a fixed list; used for demos and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource<T> {
    items: Vec<T>,
}

impl<T> StaticSource<T> {
    /// Create a source that always returns `items`
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T> DataSource for StaticSource<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn fetch(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }
}
