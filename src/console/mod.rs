//! Interactive console
//!
//! A prompt loop that reads a query and its filter criteria, runs the
//! search and prints the filtered results. Input and output are generic so
//! the loop can be driven from memory in tests.

pub mod input;
pub mod render;

pub use render::OutputFormat;

use crate::config::FilterSettings;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::search::{execute_filtered_search, SearchClient};
use std::io::{BufRead, Write};
use tracing::warn;

const BANNER_RULE: &str = "============================================================";

pub struct Console<'a, R, W> {
    input: R,
    output: W,
    client: &'a dyn SearchClient,
    defaults: FilterSettings,
    format: OutputFormat,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(input: R, output: W, client: &'a dyn SearchClient, defaults: FilterSettings) -> Self {
        Self {
            input,
            output,
            client,
            defaults,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run until the user types `quit`/`exit` or input ends
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        loop {
            let Some(query) = self.prompt("\n> Enter search query (or 'quit' to exit): ")? else {
                break;
            };
            if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
                break;
            }
            if query.is_empty() {
                writeln!(self.output, "[WARN] Query must not be empty.")?;
                continue;
            }

            let criteria = self.ask_criteria()?;

            match execute_filtered_search(self.client, &query, &criteria).await {
                Ok(results) => render::render(&mut self.output, &results, self.format)?,
                Err(e) => {
                    warn!("search for '{}' failed: {}", query, e);
                    writeln!(self.output, "[ERROR] Search failed: {}", e)?;
                }
            }
        }

        writeln!(self.output, "\nGoodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, " search-filter-rs v{} (interactive)", crate::VERSION)?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Self::prompt`] but end of input reads as an empty answer
    fn ask(&mut self, message: &str) -> Result<String> {
        Ok(self.prompt(message)?.unwrap_or_default())
    }

    fn ask_criteria(&mut self) -> Result<FilterCriteria> {
        let default_max = self.defaults.max_results;
        let mut criteria = FilterCriteria::new(default_max)?;

        let max = self.ask(&format!("Max results [{}]: ", default_max))?;
        if !max.is_empty() {
            match input::parse_max_results(&max).and_then(|n| criteria.clone().with_max_results(n)) {
                Ok(updated) => criteria = updated,
                Err(e) => writeln!(self.output, "[WARN] {}. Using default {}.", e, default_max)?,
            }
        }

        let from = self.ask("Filter by from-date (ISO-8601, e.g., 2024-01-01T00:00:00Z) [skip]: ")?;
        if !from.is_empty() {
            match input::parse_datetime(&from) {
                Ok(date) => criteria = criteria.with_from_date(date),
                Err(_) => writeln!(self.output, "[WARN] Invalid date format. Ignoring from-date.")?,
            }
        }

        let to = self.ask("Filter by to-date (ISO-8601) [skip]: ")?;
        if !to.is_empty() {
            match input::parse_datetime(&to) {
                Ok(date) => criteria = criteria.with_to_date(date),
                Err(_) => writeln!(self.output, "[WARN] Invalid date format. Ignoring to-date.")?,
            }
        }

        let whitelist = self.ask("Domain whitelist (comma-separated, e.g., example.com,github.com) [skip]: ")?;
        criteria = criteria.with_domain_whitelist(input::parse_list(&whitelist));

        let blacklist = self.ask("Domain blacklist (comma-separated) [skip]: ")?;
        criteria = criteria.with_domain_blacklist(input::parse_list(&blacklist));

        let mime = self.ask("Restrict MIME types (comma-separated, e.g., application/pdf,text/html) [skip]: ")?;
        criteria = criteria.with_mime_types(input::parse_list(&mime));

        let langs = self.ask("Restrict languages (comma-separated, e.g., en,fa,de) [skip]: ")?;
        criteria = criteria.with_language_codes(input::parse_list(&langs));

        let hint = if self.defaults.safe_only { "[Y/n]" } else { "[y/N]" };
        let safe = self.ask(&format!("Safe results only? {}: ", hint))?;
        let safe_only = if safe.is_empty() {
            self.defaults.safe_only
        } else {
            input::parse_yes_default(&safe)
        };

        Ok(criteria.with_safe_only(safe_only))
    }
}
