//! Filter criteria applied to a raw result list

use crate::error::{Result, SearchError};
use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;

/// Default cap on the number of filtered results
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Set of predicates and the result cap applied by [`super::SearchFilter`]
///
/// Built once per search with the consuming `with_*` methods. String sets are
/// normalized to lowercase on insertion so matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    from_date: Option<DateTime<FixedOffset>>,
    to_date: Option<DateTime<FixedOffset>>,
    domain_whitelist: HashSet<String>,
    domain_blacklist: HashSet<String>,
    mime_types: HashSet<String>,
    language_codes: HashSet<String>,
    safe_only: bool,
    max_results: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            from_date: None,
            to_date: None,
            domain_whitelist: HashSet::new(),
            domain_blacklist: HashSet::new(),
            mime_types: HashSet::new(),
            language_codes: HashSet::new(),
            safe_only: true,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl FilterCriteria {
    /// Create criteria with the given cap; fails if `max_results` is zero
    pub fn new(max_results: usize) -> Result<Self> {
        Self::default().with_max_results(max_results)
    }

    /// Set the result cap; fails if `max_results` is zero
    pub fn with_max_results(mut self, max_results: usize) -> Result<Self> {
        if max_results == 0 {
            return Err(SearchError::invalid_argument("max_results must be positive"));
        }
        self.max_results = max_results;
        Ok(self)
    }

    pub fn with_from_date(mut self, from: DateTime<FixedOffset>) -> Self {
        self.from_date = Some(from);
        self
    }

    pub fn with_to_date(mut self, to: DateTime<FixedOffset>) -> Self {
        self.to_date = Some(to);
        self
    }

    pub fn with_domain_whitelist<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.domain_whitelist, domains);
        self
    }

    pub fn with_domain_blacklist<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.domain_blacklist, domains);
        self
    }

    pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.mime_types, mime_types);
        self
    }

    pub fn with_language_codes<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.language_codes, languages);
        self
    }

    pub fn with_safe_only(mut self, safe_only: bool) -> Self {
        self.safe_only = safe_only;
        self
    }

    pub fn from_date(&self) -> Option<DateTime<FixedOffset>> {
        self.from_date
    }

    pub fn to_date(&self) -> Option<DateTime<FixedOffset>> {
        self.to_date
    }

    /// Lowercased whitelist entries
    pub fn domain_whitelist(&self) -> &HashSet<String> {
        &self.domain_whitelist
    }

    /// Lowercased blacklist entries
    pub fn domain_blacklist(&self) -> &HashSet<String> {
        &self.domain_blacklist
    }

    pub fn mime_types(&self) -> &HashSet<String> {
        &self.mime_types
    }

    pub fn language_codes(&self) -> &HashSet<String> {
        &self.language_codes
    }

    pub fn safe_only(&self) -> bool {
        self.safe_only
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

fn extend_normalized<I, S>(set: &mut HashSet<String>, values: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    set.extend(
        values
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty()),
    );
}
