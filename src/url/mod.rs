//! URL handling module for website-scraper
//!
//! This module provides URL normalization, domain extraction and the
//! same-site scope that keeps the crawl on the seed's domain.

mod domain;
mod normalize;

pub use domain::{extract_domain, DomainScope};
pub use normalize::normalize_url;

use crate::UrlError;
use url::Url;

/// Parses a seed URL as typed by a user
///
/// A bare domain such as `example.com` is given an `https://` scheme before
/// parsing. The result is normalized.
///
/// # Examples
///
/// ```
/// use website_scraper::url::parse_seed_url;
///
/// let url = parse_seed_url("example.com/about/").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/about");
/// ```
pub fn parse_seed_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    if trimmed.contains("://") {
        normalize_url(trimmed)
    } else {
        normalize_url(&format!("https://{}", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_with_scheme() {
        let url = parse_seed_url("http://example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_seed_without_scheme() {
        let url = parse_seed_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_seed_surrounding_whitespace() {
        let url = parse_seed_url("  https://example.com/about  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_empty_seed() {
        assert!(matches!(parse_seed_url("   "), Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_seed_with_unsupported_scheme() {
        assert!(matches!(
            parse_seed_url("ftp://example.com"),
            Err(UrlError::InvalidScheme(_))
        ));
    }
}
