//! Result type definitions

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single search result
///
/// Results are identified by their link: two results with the same link
/// compare equal even if the provider returned different metadata for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the page
    pub title: Option<String>,
    /// The URL of the result
    pub link: String,
    /// Host shown by the provider (e.g. `blog.example.com`)
    pub display_link: Option<String>,
    /// Content snippet/description
    pub snippet: Option<String>,
    /// MIME type reported by the provider (e.g. `application/pdf`)
    pub mime_type: Option<String>,
    /// Human readable file format (e.g. `PDF/Adobe Acrobat`)
    pub file_format: Option<String>,
    /// Publication or last update time, when the page exposes one
    pub indexed_time: Option<DateTime<FixedOffset>>,
    /// Free-form locale tag such as `en-US` or `en_US`
    pub language_code: Option<String>,
    /// Whether the result was produced under upstream safe search
    #[serde(default = "default_safe")]
    pub safe: bool,
}

fn default_safe() -> bool {
    true
}

impl SearchResult {
    /// Create a new result with only its link set
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            title: None,
            link: link.into(),
            display_link: None,
            snippet: None,
            mime_type: None,
            file_format: None,
            indexed_time: None,
            language_code: None,
            safe: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_display_link(mut self, host: impl Into<String>) -> Self {
        self.display_link = Some(host.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn with_file_format(mut self, format: impl Into<String>) -> Self {
        self.file_format = Some(format.into());
        self
    }

    pub fn with_indexed_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.indexed_time = Some(time);
        self
    }

    pub fn with_language_code(mut self, lang: impl Into<String>) -> Self {
        self.language_code = Some(lang.into());
        self
    }

    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }
}

impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl Eq for SearchResult {}

impl Hash for SearchResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.link.hash(state);
    }
}
