// ABOUTME: Error types for the memedex scraper including ErrorCode enum and ScrapeError struct.
// ABOUTME: Every failure carries its code, the URL involved, and the operation that hit it.

use std::fmt;

/// Categories a scrape failure can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    Timeout,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Timeout => "timeout",
        };
        write!(f, "{}", s)
    }
}

/// Error returned by the fallible scrape operations.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memedex: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    /// Construct an `InvalidUrl` error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Construct a `Fetch` error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Construct a `Timeout` error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Timeout,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// True when the code is `InvalidUrl`.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// True when the code is `Fetch`.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// True when the code is `Timeout`.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_url_and_code() {
        let err = ScrapeError::fetch("https://knowyourmeme.com/memes/doge", "GetMeme", None);
        assert_eq!(
            err.to_string(),
            "memedex: GetMeme https://knowyourmeme.com/memes/doge: fetch error"
        );
    }

    #[test]
    fn display_appends_source() {
        let err = ScrapeError::invalid_url(
            "ftp://example.com",
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        );
        assert_eq!(
            err.to_string(),
            "memedex: Fetch ftp://example.com: invalid URL: scheme must be http or https"
        );
    }

    #[test]
    fn predicates_match_codes() {
        assert!(ScrapeError::invalid_url("u", "op", None).is_invalid_url());
        assert!(ScrapeError::fetch("u", "op", None).is_fetch());
        assert!(ScrapeError::timeout("u", "op", None).is_timeout());
        assert!(!ScrapeError::timeout("u", "op", None).is_fetch());
    }
}
