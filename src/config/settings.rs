//! Settings structures for search-filter-rs configuration

use crate::error::{Result, SearchError};
use crate::filter::DEFAULT_MAX_RESULTS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Google Custom Search JSON API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Upper bound for `outgoing.request_timeout`, in seconds
pub const MAX_REQUEST_TIMEOUT: f64 = 300.0;

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub google: GoogleSettings,
    pub outgoing: OutgoingSettings,
    pub filter: FilterSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            SearchError::configuration(format!("invalid settings file {}: {}", path.display(), e))
        })
    }

    /// Merge with environment variables (SEARCH_FILTER_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEARCH_FILTER_API_KEY") {
            self.google.api_key = val;
        }
        if let Ok(val) = std::env::var("SEARCH_FILTER_ENGINE_ID") {
            self.google.search_engine_id = val;
        }
        if let Ok(val) = std::env::var("SEARCH_FILTER_ENDPOINT") {
            self.google.endpoint = val;
        }
        if let Ok(val) = std::env::var("SEARCH_FILTER_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }

    /// Check that everything needed before the first fetch is present
    ///
    /// Credentials are trimmed in place.
    pub fn validate(&mut self) -> Result<()> {
        self.google.api_key = required("google.api_key", &self.google.api_key)?;
        self.google.search_engine_id =
            required("google.search_engine_id", &self.google.search_engine_id)?;

        Url::parse(&self.google.endpoint).map_err(|e| {
            SearchError::configuration(format!(
                "google.endpoint '{}' is not a valid URL: {}",
                self.google.endpoint, e
            ))
        })?;

        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 || timeout > MAX_REQUEST_TIMEOUT {
            return Err(SearchError::configuration(format!(
                "outgoing.request_timeout must be between 0 and {} seconds",
                MAX_REQUEST_TIMEOUT
            )));
        }
        if self.filter.max_results == 0 {
            return Err(SearchError::configuration("filter.max_results must be positive"));
        }
        Ok(())
    }
}

fn required(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SearchError::configuration(format!(
            "required setting missing or blank: {}",
            key
        )));
    }
    Ok(value.to_string())
}

/// Search provider credentials and behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    /// API key for the Custom Search JSON API
    pub api_key: String,
    /// Programmable search engine id (`cx`)
    pub search_engine_id: String,
    /// API endpoint
    pub endpoint: String,
    /// Ask the provider for safe search; results are flagged accordingly
    pub safe_search: bool,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_engine_id: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            safe_search: true,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Appended to the default user agent
    pub useragent_suffix: Option<String>,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            useragent_suffix: None,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Defaults used when the user does not override them per search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub max_results: usize,
    pub safe_only: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            safe_only: true,
        }
    }
}
