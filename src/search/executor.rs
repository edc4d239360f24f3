//! Paged result fetching

use super::SearchClient;
use crate::config::Settings;
use crate::engines::{Engine, GoogleCse, PageParams};
use crate::error::{Result, SearchError};
use crate::network::HttpClient;
use crate::results::SearchResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Fetches up to a requested number of results, one page at a time
pub struct Fetcher {
    /// HTTP client for making requests
    client: HttpClient,
    /// Provider the pages are requested from
    engine: Arc<dyn Engine>,
}

impl Fetcher {
    /// Create a new fetcher
    pub fn new(client: HttpClient, engine: Arc<dyn Engine>) -> Self {
        Self { client, engine }
    }

    /// Build the Google CSE fetcher described by validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let engine = Arc::new(GoogleCse::from_settings(&settings.google));
        Ok(Self::new(client, engine))
    }

    /// Fetch at most `max_results` results for `query`
    ///
    /// Pages of `min(max_results, engine page size)` are requested starting
    /// at offset 1. The offset always advances by that page size, even when
    /// the provider returns a short page. The loop ends once enough results
    /// are collected or a page comes back empty. Any failure aborts the
    /// whole fetch.
    pub async fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(SearchError::invalid_argument("query must not be blank"));
        }
        if max_results == 0 {
            return Err(SearchError::invalid_argument("max_results must be positive"));
        }

        let started = Instant::now();
        let page_size = max_results.min(self.engine.max_page_size());
        let mut start = 1;
        let mut pages = 0;
        let mut all = Vec::with_capacity(page_size);

        while all.len() < max_results {
            let remaining = max_results - all.len();
            let params = PageParams::new(query, start, page_size.min(remaining));

            debug!(
                engine = self.engine.name(),
                start = params.start,
                num = params.num,
                "requesting page"
            );

            let request = self.engine.request(&params)?;
            let response = self.client.execute(request).await?;
            let page = self.engine.response(response)?;
            pages += 1;

            if page.is_empty() {
                debug!(start, "empty page, no more results");
                break;
            }

            all.extend(page);
            start += page_size;
        }

        all.truncate(max_results);

        info!(
            "Fetched {} results for '{}' in {} pages ({:?})",
            all.len(),
            query,
            pages,
            started.elapsed()
        );

        Ok(all)
    }
}

#[async_trait]
impl SearchClient for Fetcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        self.fetch(query, max_results).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CSE_PATH: &str = "/customsearch/v1";

    fn page(first: usize, count: usize) -> Value {
        let items: Vec<Value> = (first..first + count)
            .map(|n| {
                json!({
                    "title": format!("Result {}", n),
                    "link": format!("https://example.com/{}", n),
                    "displayLink": "example.com",
                })
            })
            .collect();
        json!({ "items": items })
    }

    fn fetcher(server: &MockServer) -> Fetcher {
        let engine = GoogleCse::new("key", "cx").with_endpoint(format!("{}{}", server.uri(), CSE_PATH));
        Fetcher::new(HttpClient::new().unwrap(), Arc::new(engine))
    }

    async fn mount_page(server: &MockServer, start: usize, num: usize, body: Value) {
        Mock::given(method("GET"))
            .and(path(CSE_PATH))
            .and(query_param("start", start.to_string()))
            .and(query_param("num", num.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn requested_starts(server: &MockServer) -> Vec<String> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "start")
                    .map(|(_, v)| v.into_owned())
            })
            .collect()
    }

    #[tokio::test]
    async fn test_three_pages_for_twenty_five() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 10, page(1, 10)).await;
        mount_page(&server, 11, 10, page(11, 10)).await;
        mount_page(&server, 21, 5, page(21, 5)).await;

        let results = fetcher(&server).fetch("rust", 25).await.unwrap();

        assert_eq!(results.len(), 25);
        assert_eq!(results[0].link, "https://example.com/1");
        assert_eq!(results[24].link, "https://example.com/25");
        assert_eq!(requested_starts(&server).await, vec!["1", "11", "21"]);
    }

    #[tokio::test]
    async fn test_empty_page_stops_early() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 10, page(1, 10)).await;
        mount_page(&server, 11, 10, json!({})).await;

        let results = fetcher(&server).fetch("rust", 25).await.unwrap();

        assert_eq!(results.len(), 10);
        assert_eq!(requested_starts(&server).await, vec!["1", "11"]);
    }

    #[tokio::test]
    async fn test_short_pages_still_advance_by_page_size() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 10, page(1, 10)).await;
        mount_page(&server, 11, 10, page(11, 7)).await;
        mount_page(&server, 21, 8, page(21, 5)).await;
        mount_page(&server, 31, 3, json!({ "items": [] })).await;

        let results = fetcher(&server).fetch("rust", 25).await.unwrap();

        assert_eq!(results.len(), 22);
        assert_eq!(requested_starts(&server).await, vec!["1", "11", "21", "31"]);
    }

    #[tokio::test]
    async fn test_overshooting_page_is_truncated() {
        let server = MockServer::start().await;
        // Provider ignores `num` and returns a full page
        mount_page(&server, 1, 3, page(1, 10)).await;

        let results = fetcher(&server).fetch("rust", 3).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[2].link, "https://example.com/3");
    }

    #[tokio::test]
    async fn test_small_request_uses_smaller_page() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 4, page(1, 2)).await;
        mount_page(&server, 5, 2, json!({})).await;

        let results = fetcher(&server).fetch("rust", 4).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(requested_starts(&server).await, vec!["1", "5"]);
    }

    #[tokio::test]
    async fn test_huge_count_does_not_reserve_upfront() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 10, json!({})).await;

        let results = fetcher(&server).fetch("rust", usize::MAX / 2).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(requested_starts(&server).await, vec!["1"]);
    }

    #[tokio::test]
    async fn test_provider_error_discards_partial_results() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 10, page(1, 10)).await;
        Mock::given(method("GET"))
            .and(path(CSE_PATH))
            .and(query_param("start", "11"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "Quota exceeded" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = fetcher(&server).fetch("rust", 20).await.unwrap_err();

        match err {
            SearchError::Provider { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_network() {
        let server = MockServer::start().await;
        let fetcher = fetcher(&server);

        let blank = fetcher.fetch("   ", 10).await.unwrap_err();
        let zero = fetcher.fetch("rust", 0).await.unwrap_err();

        assert_eq!(blank.kind(), ErrorKind::InvalidArgument);
        assert_eq!(zero.kind(), ErrorKind::InvalidArgument);
        assert!(requested_starts(&server).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_client_delegates_to_fetch() {
        let server = MockServer::start().await;
        mount_page(&server, 1, 2, page(1, 2)).await;

        let client: &dyn SearchClient = &fetcher(&server);
        let results = client.search("rust", 2).await.unwrap();
        assert_eq!(results.len(), 2);
    }
}
