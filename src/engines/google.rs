//! Google Custom Search JSON API engine

use super::traits::*;
use crate::config::GoogleSettings;
use crate::error::{Result, SearchError};
use crate::results::{parse_timestamp, SearchResult};
use serde_json::Value;
use tracing::{trace, warn};

/// Most results the API returns per request
pub const MAX_PAGE_SIZE: usize = 10;

/// Metatags consulted, in order, for the indexed timestamp
const DATE_KEYS: &[&str] = &["article:published_time", "og:updated_time", "date"];

/// Google Custom Search engine
pub struct GoogleCse {
    endpoint: String,
    api_key: String,
    search_engine_id: String,
    safe_search: bool,
}

impl GoogleCse {
    pub fn new(api_key: impl Into<String>, search_engine_id: impl Into<String>) -> Self {
        Self {
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            search_engine_id: search_engine_id.into(),
            safe_search: true,
        }
    }

    pub fn from_settings(settings: &GoogleSettings) -> Self {
        Self::new(&settings.api_key, &settings.search_engine_id)
            .with_endpoint(&settings.endpoint)
            .with_safe_search(settings.safe_search)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_safe_search(mut self, safe_search: bool) -> Self {
        self.safe_search = safe_search;
        self
    }

    fn parse_results(&self, root: &Value) -> Vec<SearchResult> {
        let Some(items) = root.get("items").and_then(Value::as_array) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| self.parse_item(item))
            .collect()
    }

    fn parse_item(&self, item: &Value) -> Option<SearchResult> {
        let Some(link) = text(item, "link") else {
            trace!("skipping item without link");
            return None;
        };

        let mut result = SearchResult::new(link).with_safe(self.safe_search);
        result.title = text(item, "title").map(str::to_string);
        result.display_link = text(item, "displayLink").map(str::to_string);
        result.snippet = text(item, "snippet").map(str::to_string);
        result.mime_type = text(item, "mime").map(str::to_string);
        result.file_format = text(item, "fileFormat").map(str::to_string);

        if let Some(meta) = item
            .pointer("/pagemap/metatags")
            .and_then(Value::as_array)
            .and_then(|tags| tags.first())
        {
            result.indexed_time = DATE_KEYS
                .iter()
                .filter_map(|key| text(meta, key))
                .find_map(parse_timestamp);
            result.language_code = text(meta, "og:locale").map(str::to_string);
        }

        Some(result)
    }
}

impl Engine for GoogleCse {
    fn name(&self) -> &str {
        "google_cse"
    }

    fn max_page_size(&self) -> usize {
        MAX_PAGE_SIZE
    }

    fn request(&self, params: &PageParams) -> Result<EngineRequest> {
        let num = params.num.min(MAX_PAGE_SIZE);
        let mut request = EngineRequest::get(&self.endpoint)
            .header("Accept", "application/json")
            .param("key", &self.api_key)
            .param("cx", &self.search_engine_id)
            .param("q", &params.query)
            .param("start", params.start.to_string())
            .param("num", num.to_string());

        if self.safe_search {
            request = request.param("safe", "active");
        }

        Ok(request)
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>> {
        if !response.is_success() {
            let message = error_message(&response.text);
            warn!(status = response.status, url = %response.url, %message, "search provider error");
            return Err(SearchError::Provider {
                status: response.status,
                message,
            });
        }

        let root: Value = response.json()?;
        Ok(self.parse_results(&root))
    }
}

/// String value of `key`; other JSON types count as absent
fn text<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

/// Pull `error.message` out of an API error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
