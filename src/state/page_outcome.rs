/// Page outcome definitions for reporting crawl progress
///
/// Every URL the crawler attempts ends in exactly one of these outcomes.
use std::fmt;

/// Represents the final outcome of a single page fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageOutcome {
    // ===== Success =====
    /// Page was fetched, extracted and written to disk
    Scraped,

    // ===== Fetch failures =====
    /// Page returned HTTP 404 or 410
    DeadLink,

    /// Page returned some other non-success HTTP status
    HttpError,

    /// Page could not be reached (timeout, connection refused, DNS failure, TLS error)
    Unreachable,

    /// Page Content-Type is not HTML
    ContentMismatch,

    // ===== Parse failures =====
    /// Body could not be turned into a document (binary or undecodable payload)
    ParseFailed,

    /// Fetch failed for other reasons (redirect loop, truncated body, etc.)
    Failed,
}

impl PageOutcome {
    /// Returns true if this represents a successful scrape
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Scraped)
    }

    /// Returns true if this represents a failure of any kind
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns true if the failure happened at the fetch stage
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::DeadLink
                | Self::HttpError
                | Self::Unreachable
                | Self::ContentMismatch
                | Self::Failed
        )
    }

    /// Short machine-friendly label for the outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scraped => "scraped",
            Self::DeadLink => "dead_link",
            Self::HttpError => "http_error",
            Self::Unreachable => "unreachable",
            Self::ContentMismatch => "content_mismatch",
            Self::ParseFailed => "parse_failed",
            Self::Failed => "failed",
        }
    }

    /// Maps a non-success HTTP status code to an outcome
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            404 | 410 => Self::DeadLink,
            _ => Self::HttpError,
        }
    }

    /// Returns all possible page outcomes
    pub fn all() -> [Self; 7] {
        [
            Self::Scraped,
            Self::DeadLink,
            Self::HttpError,
            Self::Unreachable,
            Self::ContentMismatch,
            Self::ParseFailed,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
