//! Human and machine readable output of filtered results

use crate::error::Result;
use crate::results::SearchResult;
use std::io::Write;

const RULE: &str = "------------------------------------------------------------";

/// Output format for result listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Enumerated plain text
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Write `results` in the requested format
pub fn render<W: Write>(out: &mut W, results: &[SearchResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, results),
        OutputFormat::Json => render_json(out, results),
    }
}

pub fn render_text<W: Write>(out: &mut W, results: &[SearchResult]) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "\nNo results matched the filter criteria.")?;
        return Ok(());
    }

    writeln!(out, "\nFiltered results ({}):", results.len())?;
    writeln!(out, "{}", RULE)?;
    for (index, r) in results.iter().enumerate() {
        writeln!(out, "#{}", index + 1)?;
        if let Some(title) = &r.title {
            writeln!(out, "Title : {}", title)?;
        }
        writeln!(out, "URL   : {}", r.link)?;
        if let Some(host) = &r.display_link {
            writeln!(out, "Host  : {}", host)?;
        }
        if let Some(date) = &r.indexed_time {
            writeln!(out, "Date  : {}", date.to_rfc3339())?;
        }
        if let Some(mime) = &r.mime_type {
            writeln!(out, "MIME  : {}", mime)?;
        }
        if let Some(format) = &r.file_format {
            writeln!(out, "Format: {}", format)?;
        }
        if let Some(lang) = &r.language_code {
            writeln!(out, "Lang  : {}", lang)?;
        }
        if let Some(snippet) = &r.snippet {
            writeln!(out, "Snippet:\n{}", snippet.trim_end())?;
        }
        writeln!(out, "{}", RULE)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, results: &[SearchResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}
