//! Classification of document regions
//!
//! Navigation regions are the only source of crawl links. Chrome regions
//! (navigation, footers, scripts, styles) never contribute page content.
//! Both checks are structural: they look at tag names and `role` attributes,
//! never at text.

use scraper::node::Element;
use scraper::ElementRef;

/// Tags whose subtrees are never page content
const CHROME_TAGS: &[&str] = &["nav", "footer", "script", "style", "noscript", "template"];

/// ARIA roles equivalent to a chrome tag
const CHROME_ROLES: &[&str] = &["navigation", "contentinfo"];

/// Block-level containers whose text becomes a paragraph
pub(crate) const PARAGRAPH_TAGS: &[&str] =
    &["p", "pre", "blockquote", "li", "dt", "dd", "figcaption"];

/// Tags that separate words when their text is flattened
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

fn has_role(element: &Element, wanted: &[&str]) -> bool {
    element
        .attr("role")
        .map(|role| {
            role.split_ascii_whitespace()
                .any(|r| wanted.iter().any(|w| r.eq_ignore_ascii_case(w)))
        })
        .unwrap_or(false)
}

/// Returns true for `<nav>` and `role="navigation"` elements
pub fn is_navigation(element: &Element) -> bool {
    element.name() == "nav" || has_role(element, &["navigation"])
}

/// Returns true for elements whose subtree is excluded from content
pub fn is_chrome(element: &Element) -> bool {
    CHROME_TAGS.contains(&element.name()) || has_role(element, CHROME_ROLES)
}

/// Heading level (1-6) for `h1`..`h6`, None otherwise
pub fn heading_level(element: &Element) -> Option<u8> {
    match element.name() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Returns true for paragraph-like block containers
pub fn is_paragraph(element: &Element) -> bool {
    PARAGRAPH_TAGS.contains(&element.name())
}

/// Returns true for elements that break words apart when flattened
pub(crate) fn is_block(element: &Element) -> bool {
    BLOCK_TAGS.contains(&element.name())
}

/// Returns true if any ancestor of `element` satisfies `predicate`
pub fn has_ancestor(element: ElementRef<'_>, predicate: impl Fn(&Element) -> bool) -> bool {
    element
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(predicate)
}

/// Returns true if the element sits inside a navigation region
pub fn in_navigation(element: ElementRef<'_>) -> bool {
    has_ancestor(element, is_navigation)
}

/// Returns true if the element sits inside a chrome region
pub fn in_chrome(element: ElementRef<'_>) -> bool {
    has_ancestor(element, is_chrome)
}
