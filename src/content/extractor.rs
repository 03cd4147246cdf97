//! Body content extraction
//!
//! Walks a parsed document in document order and keeps the text of headings
//! and paragraph-like blocks that are not nested inside chrome regions.

use crate::content::regions::{
    has_ancestor, heading_level, in_chrome, is_block, is_chrome, is_paragraph, PARAGRAPH_TAGS,
};
use crate::content::{ExtractedPage, Heading};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Extracts headings and paragraphs from a parsed document
///
/// # Extraction Rules
///
/// **Headings:** every `h1`..`h6` outside chrome regions, in document order.
///
/// **Paragraphs:** every `p`, `pre`, `blockquote`, `li`, `dt`, `dd` and
/// `figcaption` outside chrome regions, in document order. Only the
/// outermost of nested paragraph-like blocks is kept, and its text leaves
/// out nested headings.
///
/// **Chrome:** `nav`, `footer`, `script`, `style`, `noscript`, `template`
/// and elements with `role="navigation"` or `role="contentinfo"`. Text from
/// inside these never appears in the result.
///
/// All text is flattened, whitespace-collapsed and trimmed; entries that end
/// up empty are dropped.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use url::Url;
/// use website_scraper::content::extract_content;
///
/// let html = Html::parse_document(
///     "<nav><h2>Menu</h2></nav><h1>Welcome</h1><p>Hello   <b>there</b></p><footer><p>(c)</p></footer>",
/// );
/// let page = extract_content(&html, &Url::parse("https://example.com/").unwrap());
///
/// assert_eq!(page.headings().len(), 1);
/// assert_eq!(page.headings()[0].text, "Welcome");
/// assert_eq!(page.paragraphs(), ["Hello there"]);
/// ```
pub fn extract_content(document: &Html, source_url: &Url) -> ExtractedPage {
    let mut headings = Vec::new();
    let mut paragraphs = Vec::new();

    let selector_text = format!("h1, h2, h3, h4, h5, h6, {}", PARAGRAPH_TAGS.join(", "));
    let selector = match Selector::parse(&selector_text) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::error!("Invalid content selector {:?}: {:?}", selector_text, e);
            return ExtractedPage::new(source_url.clone(), headings, paragraphs);
        }
    };

    for element in document.root_element().select(&selector) {
        if in_chrome(element) {
            continue;
        }

        if let Some(level) = heading_level(element.value()) {
            let text = flatten_text(element, false);
            if !text.is_empty() {
                headings.push(Heading { level, text });
            }
            continue;
        }

        // Nested blocks were already flattened into their outermost container
        if has_ancestor(element, is_paragraph) {
            continue;
        }

        let text = flatten_text(element, true);
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    tracing::trace!(
        "Extracted {} headings and {} paragraphs from {}",
        headings.len(),
        paragraphs.len(),
        source_url
    );

    ExtractedPage::new(source_url.clone(), headings, paragraphs)
}

/// Flattens an element's text, skipping chrome and optionally heading subtrees
///
/// Iterates descendants instead of recursing, so deeply nested markup cannot
/// exhaust the stack.
fn flatten_text(element: ElementRef<'_>, skip_headings: bool) -> String {
    let root = *element;
    let mut raw = String::new();

    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => {
                let hidden = node
                    .ancestors()
                    .take_while(|ancestor| *ancestor != root)
                    .filter_map(|ancestor| ancestor.value().as_element())
                    .any(|el| is_chrome(el) || (skip_headings && heading_level(el).is_some()));

                if !hidden {
                    raw.push_str(text);
                }
            }
            Node::Element(el) if is_block(el) => raw.push(' '),
            _ => {}
        }
    }

    normalize_text(&raw)
}

/// Collapses whitespace runs to single spaces, drops control characters and trims
///
/// # Example
///
/// ```
/// use website_scraper::content::normalize_text;
///
/// assert_eq!(normalize_text("  Hello,\n\t world\u{0007}!  "), "Hello, world!");
/// ```
pub fn normalize_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
