use chrono::{DateTime, FixedOffset};
use clap::Parser;
use search_filter::config::FilterSettings;
use search_filter::console::input::parse_datetime;
use search_filter::console::OutputFormat;
use search_filter::filter::FilterCriteria;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "search-filter-rs",
    about = "Google Custom Search with client-side result filtering",
    version
)]
pub struct Cli {
    /// Search query; starts the interactive console when omitted
    pub query: Option<String>,

    /// Path to settings.yml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of results to fetch and return
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_results: Option<u64>,

    /// Drop results indexed before this RFC 3339 timestamp
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<DateTime<FixedOffset>>,

    /// Drop results indexed after this RFC 3339 timestamp
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<DateTime<FixedOffset>>,

    /// Only keep results from these domains
    #[arg(long = "allow-domain", value_delimiter = ',')]
    pub allow_domains: Vec<String>,

    /// Drop results from these domains
    #[arg(long = "deny-domain", value_delimiter = ',')]
    pub deny_domains: Vec<String>,

    /// Only keep results with these MIME types
    #[arg(long = "mime", value_delimiter = ',')]
    pub mime_types: Vec<String>,

    /// Only keep results whose language starts with one of these codes
    #[arg(long = "lang", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Keep results not flagged as safe
    #[arg(long)]
    pub allow_unsafe: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build filter criteria from the flags, using `defaults` for anything unset
    pub fn criteria(&self, defaults: &FilterSettings) -> search_filter::Result<FilterCriteria> {
        let max = match self.max_results {
            Some(n) => usize::try_from(n).map_err(|_| {
                search_filter::SearchError::invalid_argument(format!("{} is too large", n))
            })?,
            None => defaults.max_results,
        };

        let mut criteria = FilterCriteria::new(max)?
            .with_domain_whitelist(&self.allow_domains)
            .with_domain_blacklist(&self.deny_domains)
            .with_mime_types(&self.mime_types)
            .with_language_codes(&self.languages)
            .with_safe_only(defaults.safe_only && !self.allow_unsafe);

        if let Some(from) = self.from {
            criteria = criteria.with_from_date(from);
        }
        if let Some(to) = self.to {
            criteria = criteria.with_to_date(to);
        }
        Ok(criteria)
    }
}

fn parse_date_arg(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_datetime(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("search-filter-rs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_query_means_interactive() {
        let cli = parse(&[]);
        assert!(cli.query.is_none());
        assert_eq!(cli.format, OutputFormat::Text);

        let criteria = cli.criteria(&FilterSettings::default()).unwrap();
        assert_eq!(criteria.max_results(), 20);
        assert!(criteria.safe_only());
    }

    #[test]
    fn test_one_shot_flags() {
        let cli = parse(&[
            "rust async",
            "-n",
            "15",
            "--from",
            "2024-01-01T00:00:00Z",
            "--allow-domain",
            "docs.rs,GitHub.com",
            "--allow-domain",
            "rust-lang.org",
            "--deny-domain",
            "spam.example",
            "--mime",
            "text/html",
            "--lang",
            "en,de",
            "--allow-unsafe",
            "--format",
            "json",
        ]);

        assert_eq!(cli.query.as_deref(), Some("rust async"));
        assert_eq!(cli.format, OutputFormat::Json);

        let criteria = cli.criteria(&FilterSettings::default()).unwrap();
        assert_eq!(criteria.max_results(), 15);
        let whitelist = criteria.domain_whitelist();
        assert_eq!(whitelist.len(), 3);
        assert!(whitelist.contains("github.com"));
        assert!(whitelist.contains("rust-lang.org"));
        assert!(criteria.domain_blacklist().contains("spam.example"));
        assert!(criteria.mime_types().contains("text/html"));
        assert_eq!(criteria.language_codes().len(), 2);
        assert!(criteria.from_date().is_some());
        assert!(criteria.to_date().is_none());
        assert!(!criteria.safe_only());
    }

    #[test]
    fn test_defaults_come_from_settings() {
        let defaults = FilterSettings {
            max_results: 7,
            safe_only: false,
        };
        let criteria = parse(&["q"]).criteria(&defaults).unwrap();
        assert_eq!(criteria.max_results(), 7);
        assert!(!criteria.safe_only());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["search-filter-rs", "q", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["search-filter-rs", "q", "--from", "last week"]).is_err());
        assert!(Cli::try_parse_from(["search-filter-rs", "q", "--format", "xml"]).is_err());
    }
}
