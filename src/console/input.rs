//! Parsing of free-form user input into criteria values

use crate::error::{Result, SearchError};
use crate::results::parse_timestamp;
use chrono::{DateTime, FixedOffset};

/// Split a comma-separated list, dropping blank entries
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an ISO-8601 timestamp with offset, e.g. `2024-01-01T00:00:00Z`
pub fn parse_datetime(raw: &str) -> Result<DateTime<FixedOffset>> {
    parse_timestamp(raw).ok_or_else(|| {
        SearchError::invalid_argument(format!(
            "'{}' is not an ISO-8601 timestamp with offset",
            raw.trim()
        ))
    })
}

/// Parse a strictly positive result count
pub fn parse_max_results(raw: &str) -> Result<usize> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SearchError::invalid_argument(format!("'{}' is not a number", raw.trim())))?;
    if value <= 0 {
        return Err(SearchError::invalid_argument("max results must be positive"));
    }
    usize::try_from(value)
        .map_err(|_| SearchError::invalid_argument(format!("{} is too large", value)))
}

/// Yes/no answer where anything but an explicit "n"/"no" means yes
pub fn parse_yes_default(raw: &str) -> bool {
    let raw = raw.trim();
    !(raw.eq_ignore_ascii_case("n") || raw.eq_ignore_ascii_case("no"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list(" example.com, ,github.com,"),
            vec!["example.com", "github.com"]
        );
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_datetime() {
        let parsed = parse_datetime("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let err = parse_datetime("01/01/2024").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_parse_max_results() {
        assert_eq!(parse_max_results(" 15 ").unwrap(), 15);
        assert_eq!(
            parse_max_results("0").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            parse_max_results("-3").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(parse_max_results("ten").is_err());
    }

    #[test]
    fn test_parse_yes_default() {
        assert!(parse_yes_default(""));
        assert!(parse_yes_default("y"));
        assert!(parse_yes_default("whatever"));
        assert!(!parse_yes_default("n"));
        assert!(!parse_yes_default(" No "));
    }
}
