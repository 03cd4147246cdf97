use crate::UrlError;
use url::Url;

/// Trailing path segments that name a directory's default document
const INDEX_DOCUMENTS: &[&str] = &["index.html", "index.htm", "index.php"];

/// Normalizes a URL according to website-scraper's normalization rules
///
/// The result is the identity of a page: it is the key of the visited set
/// and the input to output filename derivation.
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject anything that isn't http:// or https://
/// 3. Lowercase the host
/// 4. Normalize path:
///    - Remove dot segments (. and ..)
///    - Collapse repeated slashes
///    - Drop a trailing index.html / index.htm / index.php segment
///    - Remove trailing slash (except for root /)
///    - Empty path becomes /
/// 5. Remove the query string
/// 6. Remove fragment (everything after #)
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - Failed to parse or normalize the URL
///
/// # Examples
///
/// ```
/// use website_scraper::url::normalize_url;
///
/// let url = normalize_url("https://EXAMPLE.COM/docs/index.html?page=2#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if let Some(host) = url.host_str() {
        let normalized_host = host.to_lowercase();
        url.set_host(Some(&normalized_host))
            .map_err(|e| UrlError::Malformed(format!("Failed to set host: {}", e)))?;
    } else {
        return Err(UrlError::MissingDomain);
    }

    let normalized_path = normalize_path(url.path());
    url.set_path(&normalized_path);

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Normalizes a URL path by removing dot segments, index documents and trailing slashes
fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut normalized_segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            // Empty segments come from repeated slashes
            "" | "." => continue,
            ".." => {
                normalized_segments.pop();
            }
            _ => normalized_segments.push(segment),
        }
    }

    if let Some(last) = normalized_segments.last() {
        if INDEX_DOCUMENTS.contains(&last.to_ascii_lowercase().as_str()) {
            normalized_segments.pop();
        }
    }

    if normalized_segments.is_empty() {
        return "/".to_string();
    }

    format!("/{}", normalized_segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_scheme() {
        let result = normalize_url("http://example.com/page").unwrap();
        assert_eq!(result.as_str(), "http://example.com/page");
    }

    #[test]
    fn test_keeps_www() {
        let result = normalize_url("https://www.example.com/").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com/");
    }

    #[test]
    fn test_remove_trailing_slash() {
        let result = normalize_url("https://example.com/page/").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_keep_root_slash() {
        let result = normalize_url("https://example.com/").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_remove_fragment() {
        let result = normalize_url("https://example.com/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_remove_query() {
        let result = normalize_url("https://example.com/page?b=2&a=1").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_drop_index_documents() {
        for doc in ["index.html", "index.htm", "index.php", "INDEX.HTML"] {
            let url = format!("https://example.com/docs/{}", doc);
            let result = normalize_url(&url).unwrap();
            assert_eq!(result.as_str(), "https://example.com/docs", "Failed for {}", doc);
        }
    }

    #[test]
    fn test_root_index_becomes_root() {
        let result = normalize_url("https://example.com/index.html").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_index_only_dropped_as_last_segment() {
        let result = normalize_url("https://example.com/index.html/child").unwrap();
        assert_eq!(result.as_str(), "https://example.com/index.html/child");
    }

    #[test]
    fn test_normalize_path_with_dots() {
        let result = normalize_url("https://example.com/a/../b/./c").unwrap();
        assert_eq!(result.as_str(), "https://example.com/b/c");
    }

    #[test]
    fn test_lowercase_domain() {
        let result = normalize_url("https://EXAMPLE.COM/Page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/Page");
    }

    #[test]
    fn test_keeps_explicit_port() {
        let result = normalize_url("http://127.0.0.1:8080/about/").unwrap();
        assert_eq!(result.as_str(), "http://127.0.0.1:8080/about");
    }

    #[test]
    fn test_complex_normalization() {
        let result =
            normalize_url("http://EXAMPLE.COM/a/../b/index.php?utm_source=test#fragment").unwrap();
        assert_eq!(result.as_str(), "http://example.com/b");
    }

    #[test]
    fn test_invalid_scheme() {
        let result = normalize_url("ftp://example.com/page");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UrlError::InvalidScheme(_)));
    }

    #[test]
    fn test_malformed_url() {
        let result = normalize_url("not a url");
        assert!(matches!(result.unwrap_err(), UrlError::Parse(_)));
    }

    #[test]
    fn test_empty_path_becomes_root() {
        let result = normalize_url("https://example.com").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_multiple_slashes() {
        let result = normalize_url("https://example.com///path//to///page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/path/to/page");
    }

    #[test]
    fn test_parent_directory_at_root() {
        let result = normalize_url("https://example.com/../page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_url("https://Example.com/a//b/?q=1#x").unwrap();
        let twice = normalize_url(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }
}
