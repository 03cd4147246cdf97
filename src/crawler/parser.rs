//! HTML parser adapter
//!
//! Turns a fetched body into a `scraper::Html` tree. html5ever recovers from
//! any amount of broken markup, so the only bodies rejected here are ones
//! that are not text at all (a PDF or image served as `text/html`, or a body
//! in an encoding that decoded to garbage).

use crate::ScraperError;
use scraper::Html;
use url::Url;

/// Number of leading characters inspected for binary content
const BINARY_SAMPLE_CHARS: usize = 4000;

/// File signatures that mark a body as binary
const BINARY_SIGNATURES: &[&str] = &["%PDF-", "\u{FFFD}PNG", "GIF87a", "GIF89a"];

/// Parses a fetched body into a document tree
///
/// # Arguments
///
/// * `body` - The decoded response body
/// * `url` - The URL the body came from (for error reporting)
///
/// # Returns
///
/// * `Ok(Html)` - The parsed document
/// * `Err(ScraperError::HtmlParse)` - The body is binary or undecodable
///
/// # Example
///
/// ```
/// use url::Url;
/// use website_scraper::crawler::parse_document;
///
/// let url = Url::parse("https://example.com/").unwrap();
/// let document = parse_document("<html><body><p>Hi</body>", &url).unwrap();
/// assert_eq!(document.root_element().value().name(), "html");
/// ```
pub fn parse_document(body: &str, url: &Url) -> Result<Html, ScraperError> {
    if let Some(reason) = binary_reason(body) {
        return Err(ScraperError::HtmlParse {
            url: url.to_string(),
            message: reason,
        });
    }

    let document = Html::parse_document(body);
    if !document.errors.is_empty() {
        tracing::trace!(
            "Recovered from {} markup errors in {}",
            document.errors.len(),
            url
        );
    }

    Ok(document)
}

/// Describes why a body looks binary, or None for text
fn binary_reason(body: &str) -> Option<String> {
    if let Some(signature) = BINARY_SIGNATURES.iter().find(|sig| body.starts_with(**sig)) {
        return Some(format!(
            "body starts with binary signature {:?}",
            signature.trim_start_matches('\u{FFFD}')
        ));
    }

    let mut total = 0usize;
    let mut suspicious = 0usize;
    for c in body.chars().take(BINARY_SAMPLE_CHARS) {
        total += 1;
        if c == '\u{FFFD}' || (c.is_control() && !matches!(c, '\t' | '\n' | '\r' | '\x0c')) {
            suspicious += 1;
        }
    }

    // More than 10% undecodable or control characters
    if total > 0 && suspicious * 10 > total {
        return Some(format!(
            "{} of the first {} characters are binary or undecodable",
            suspicious, total
        ));
    }

    None
}
