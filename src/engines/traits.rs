//! Engine traits and types

use crate::error::Result;
use crate::results::SearchResult;
use std::collections::HashMap;

/// Parameters for a single page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// Search query string
    pub query: String,
    /// 1-based offset of the first result on this page
    pub start: usize,
    /// Number of results requested for this page
    pub num: usize,
}

impl PageParams {
    pub fn new(query: impl Into<String>, start: usize, num: usize) -> Self {
        Self {
            query: query.into(),
            start,
            num,
        }
    }
}

/// HTTP GET request to be made on behalf of an engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A paged search provider
///
/// Engines only build requests and parse responses; the transport and the
/// pagination loop live in [`crate::search::Fetcher`].
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Largest page the provider serves in one round trip
    fn max_page_size(&self) -> usize {
        10
    }

    /// Build the HTTP request for one page
    fn request(&self, params: &PageParams) -> Result<EngineRequest>;

    /// Parse the HTTP response into results; an empty vector means no more pages
    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>>;
}
