//! In-memory result filtering
//!
//! Applies a [`FilterCriteria`] to a list of results. Every check is
//! conjunctive; results are kept in input order and evaluation stops as soon
//! as the cap is reached.

mod criteria;

pub use criteria::{FilterCriteria, DEFAULT_MAX_RESULTS};

use crate::results::SearchResult;

/// Pure filtering layer over fetched results
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilter;

impl SearchFilter {
    pub fn new() -> Self {
        Self
    }

    /// Return the results matching `criteria`, truncated to its cap
    ///
    /// An empty input yields an empty output; absent criteria yield a copy of
    /// the input. Neither argument is modified.
    pub fn apply(
        &self,
        results: &[SearchResult],
        criteria: Option<&FilterCriteria>,
    ) -> Vec<SearchResult> {
        if results.is_empty() {
            return Vec::new();
        }
        let Some(criteria) = criteria else {
            return results.to_vec();
        };

        results
            .iter()
            .filter(|result| Self::matches(result, criteria))
            .take(criteria.max_results())
            .cloned()
            .collect()
    }

    /// Check a single result against every predicate
    pub fn matches(result: &SearchResult, criteria: &FilterCriteria) -> bool {
        Self::within_date_window(result, criteria)
            && Self::passes_whitelist(result, criteria)
            && Self::passes_blacklist(result, criteria)
            && Self::matches_mime_type(result, criteria)
            && Self::matches_language(result, criteria)
            && (!criteria.safe_only() || result.safe)
    }

    fn within_date_window(result: &SearchResult, criteria: &FilterCriteria) -> bool {
        // Undated results cannot be excluded by date
        let Some(indexed) = result.indexed_time else {
            return true;
        };
        if criteria.from_date().is_some_and(|from| indexed < from) {
            return false;
        }
        if criteria.to_date().is_some_and(|to| indexed > to) {
            return false;
        }
        true
    }

    fn passes_whitelist(result: &SearchResult, criteria: &FilterCriteria) -> bool {
        let whitelist = criteria.domain_whitelist();
        match result.display_link.as_deref() {
            Some(host) if !whitelist.is_empty() => {
                let host = host.to_lowercase();
                whitelist.iter().any(|domain| host_matches(&host, domain))
            }
            _ => true,
        }
    }

    fn passes_blacklist(result: &SearchResult, criteria: &FilterCriteria) -> bool {
        let blacklist = criteria.domain_blacklist();
        match result.display_link.as_deref() {
            Some(host) if !blacklist.is_empty() => {
                let host = host.to_lowercase();
                !blacklist.iter().any(|domain| host_matches(&host, domain))
            }
            _ => true,
        }
    }

    fn matches_mime_type(result: &SearchResult, criteria: &FilterCriteria) -> bool {
        let allowed = criteria.mime_types();
        if allowed.is_empty() {
            return true;
        }
        result
            .mime_type
            .as_deref()
            .is_some_and(|mime| allowed.contains(&mime.to_lowercase()))
    }

    fn matches_language(result: &SearchResult, criteria: &FilterCriteria) -> bool {
        let allowed = criteria.language_codes();
        if allowed.is_empty() {
            return true;
        }
        let Some(lang) = result.language_code.as_deref() else {
            return false;
        };
        // "en" accepts "en-US" and "en_US"
        let lang = lang.to_lowercase();
        allowed.iter().any(|code| lang.starts_with(code.as_str()))
    }
}

/// `host` and `domain` are both lowercase
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
