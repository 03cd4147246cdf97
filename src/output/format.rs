//! Plain-text page rendering
//!
//! This module turns an extracted page into the text written to disk.

use crate::content::ExtractedPage;

/// Formats an extracted page as plain text
///
/// Headings come first, each prefixed with one `#` per heading level, then
/// the paragraphs. Every block is separated from the next by a blank line.
/// Non-empty output ends with a single newline; a page with no content
/// renders as an empty string.
///
/// # Example
///
/// ```
/// use url::Url;
/// use website_scraper::content::{ExtractedPage, Heading};
/// use website_scraper::output::render_page;
///
/// let page = ExtractedPage::new(
///     Url::parse("https://example.com/").unwrap(),
///     vec![Heading { level: 2, text: "About".to_string() }],
///     vec!["We make things.".to_string()],
/// );
/// assert_eq!(render_page(&page), "## About\n\nWe make things.\n");
/// ```
pub fn render_page(page: &ExtractedPage) -> String {
    let blocks: Vec<String> = page
        .headings()
        .iter()
        .map(|heading| format!("{} {}", "#".repeat(heading.level as usize), heading.text))
        .chain(page.paragraphs().iter().cloned())
        .collect();

    if blocks.is_empty() {
        return String::new();
    }

    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Heading;
    use url::Url;

    fn page(headings: Vec<(u8, &str)>, paragraphs: Vec<&str>) -> ExtractedPage {
        ExtractedPage::new(
            Url::parse("https://example.com/").unwrap(),
            headings
                .into_iter()
                .map(|(level, text)| Heading {
                    level,
                    text: text.to_string(),
                })
                .collect(),
            paragraphs.into_iter().map(str::to_string).collect(),
        )
    }

    #[test]
    fn test_headings_then_paragraphs() {
        let rendered = render_page(&page(
            vec![(1, "Title"), (3, "Sub")],
            vec!["First.", "Second."],
        ));
        assert_eq!(rendered, "# Title\n\n### Sub\n\nFirst.\n\nSecond.\n");
    }

    #[test]
    fn test_headings_only() {
        assert_eq!(render_page(&page(vec![(2, "Only")], vec![])), "## Only\n");
    }

    #[test]
    fn test_paragraphs_only() {
        assert_eq!(render_page(&page(vec![], vec!["a", "b"])), "a\n\nb\n");
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(render_page(&page(vec![], vec![])), "");
    }
}
