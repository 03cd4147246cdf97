//! Navigation link extraction
//!
//! Only anchors inside navigation regions feed the crawl frontier. Links in
//! body copy, footers and sidebars are ignored.

use crate::content::regions::in_navigation;
use crate::url::{normalize_url, DomainScope};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts same-site page links from a document's navigation regions
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` inside `<nav>` or `role="navigation"` elements
///
/// **Exclude:**
/// - Anchors outside navigation regions
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links and data URIs
/// - Fragment-only links (same page anchors)
/// - Links that don't resolve to an http(s) URL
/// - Links outside the domain scope
/// - The page's own URL
///
/// Relative links are resolved against `page_url`. Results are normalized,
/// rebased onto the seed host spelling and deduplicated, in the order they
/// first appear in the document.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use url::Url;
/// use website_scraper::crawler::extract_nav_links;
/// use website_scraper::url::DomainScope;
///
/// let page = Url::parse("https://example.com/").unwrap();
/// let scope = DomainScope::from_url(&page).unwrap();
/// let html = Html::parse_document(
///     r#"<nav><a href="/about">About</a><a href="https://other.com/">Other</a></nav>
///        <p><a href="/body-link">Body</a></p>"#,
/// );
///
/// let links = extract_nav_links(&html, &page, &scope);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/about");
/// ```
pub fn extract_nav_links(document: &Html, page_url: &Url, scope: &DomainScope) -> Vec<Url> {
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            tracing::error!("Invalid link selector: {:?}", e);
            return Vec::new();
        }
    };

    let own_url = normalize_url(page_url.as_str())
        .ok()
        .map(|url| scope.rebase(url.clone()).unwrap_or(url));

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in document.root_element().select(&selector) {
        if !in_navigation(anchor) {
            continue;
        }

        // Skip if it has the download attribute
        if anchor.value().attr("download").is_some() {
            continue;
        }

        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let Some(absolute_url) = resolve_link(href, page_url) else {
            tracing::trace!("Skipping unresolvable link {:?} on {}", href, page_url);
            continue;
        };

        let normalized = match normalize_url(absolute_url.as_str()) {
            Ok(url) => url,
            Err(e) => {
                tracing::trace!("Skipping link {}: {}", absolute_url, e);
                continue;
            }
        };

        let Some(link) = scope.rebase(normalized) else {
            tracing::trace!("Skipping off-site link {}", absolute_url);
            continue;
        };

        if own_url.as_ref() == Some(&link) {
            continue;
        }

        if seen.insert(link.as_str().to_string()) {
            links.push(link);
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only links
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/docs/guide").unwrap()
    }

    fn links_for(body: &str) -> Vec<String> {
        let page = page_url();
        let scope = DomainScope::from_url(&Url::parse("https://example.com/").unwrap()).unwrap();
        let document = Html::parse_document(body);
        extract_nav_links(&document, &page, &scope)
            .into_iter()
            .map(|url| url.to_string())
            .collect()
    }

    #[test]
    fn test_only_navigation_links() {
        let links = links_for(
            r#"
            <nav><a href="/about">About</a></nav>
            <main><a href="/in-body">Body</a></main>
            <footer><a href="/legal">Legal</a></footer>
            "#,
        );
        assert_eq!(links, ["https://example.com/about"]);
    }

    #[test]
    fn test_role_navigation_links() {
        let links = links_for(r#"<div role="navigation"><ul><li><a href="/team">Team</a></li></ul></div>"#);
        assert_eq!(links, ["https://example.com/team"]);
    }

    #[test]
    fn test_relative_links_resolved_against_page() {
        let links = links_for(r#"<nav><a href="intro">Intro</a><a href="../faq/">FAQ</a></nav>"#);
        assert_eq!(
            links,
            ["https://example.com/docs/intro", "https://example.com/faq"]
        );
    }

    #[test]
    fn test_off_domain_links_dropped() {
        let links = links_for(
            r#"<nav>
                <a href="https://other.com/">Other</a>
                <a href="https://blog.example.com/">Blog</a>
                <a href="/contact-us">Contact</a>
            </nav>"#,
        );
        assert_eq!(links, ["https://example.com/contact-us"]);
    }

    #[test]
    fn test_www_links_rebased() {
        let links = links_for(r#"<nav><a href="http://www.example.com/pricing">Pricing</a></nav>"#);
        assert_eq!(links, ["https://example.com/pricing"]);
    }

    #[test]
    fn test_duplicates_collapse_in_discovery_order() {
        let links = links_for(
            r##"<nav>
                <a href="/b">B</a>
                <a href="/a">A</a>
                <a href="/b/">B again</a>
                <a href="/a?ref=menu#top">A again</a>
            </nav>"##,
        );
        assert_eq!(links, ["https://example.com/b", "https://example.com/a"]);
    }

    #[test]
    fn test_self_link_excluded() {
        let links = links_for(
            r#"<nav><a href="/docs/guide/">Guide</a><a href="/docs/guide#part">Part</a><a href="/">Home</a></nav>"#,
        );
        assert_eq!(links, ["https://example.com/"]);
    }

    #[test]
    fn test_special_schemes_skipped() {
        let links = links_for(
            r##"<nav>
                <a href="javascript:void(0)">JS</a>
                <a href="JavaScript:alert(1)">JS upper</a>
                <a href="mailto:hi@example.com">Mail</a>
                <a href="tel:+1234567890">Call</a>
                <a href="data:text/html,hi">Data</a>
                <a href="#section">Jump</a>
                <a href="">Empty</a>
                <a href="ftp://example.com/file">FTP</a>
            </nav>"##,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_download_links_skipped() {
        let links = links_for(r#"<nav><a href="/brochure.pdf" download>Brochure</a></nav>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_href_skipped() {
        let links = links_for(r#"<nav><a href="http://[bad">Bad</a><a href="/ok">Ok</a></nav>"#);
        assert_eq!(links, ["https://example.com/ok"]);
    }

    #[test]
    fn test_no_navigation() {
        assert!(links_for("<p><a href='/x'>x</a></p>").is_empty());
    }
}
