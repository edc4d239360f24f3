//! Search orchestration module
//!
//! Fetches raw results from the provider and runs them through the filter.

mod executor;

pub use executor::Fetcher;

use crate::error::Result;
use crate::filter::{FilterCriteria, SearchFilter};
use crate::results::SearchResult;
use async_trait::async_trait;
use tracing::info;

/// Any provider able to return up to `max_results` results for a query
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>>;
}

/// Fetch `criteria.max_results()` raw results and filter them
pub async fn execute_filtered_search(
    client: &dyn SearchClient,
    query: &str,
    criteria: &FilterCriteria,
) -> Result<Vec<SearchResult>> {
    let raw = client.search(query, criteria.max_results()).await?;
    let filtered = SearchFilter::new().apply(&raw, Some(criteria));

    info!(
        "{} of {} results for '{}' passed the filter",
        filtered.len(),
        raw.len(),
        query
    );

    Ok(filtered)
}
