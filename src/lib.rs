//! search-filter-rs: Google Custom Search with client-side result filtering
//!
//! Results are fetched page by page from the Custom Search JSON API and then
//! narrowed down in memory by date window, domain lists, MIME type, language
//! and safety flag.

pub mod config;
pub mod console;
pub mod engines;
pub mod error;
pub mod filter;
pub mod network;
pub mod results;
pub mod search;

pub use config::Settings;
pub use engines::{Engine, GoogleCse};
pub use error::{Result, SearchError};
pub use filter::{FilterCriteria, SearchFilter};
pub use results::SearchResult;
pub use search::{execute_filtered_search, Fetcher, SearchClient};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
