//! Content module: what a scraped page says
//!
//! This module turns a parsed document into an [`ExtractedPage`]: the page's
//! headings and paragraphs with navigation, footer, script and style markup
//! removed.

mod extractor;
pub mod regions;

pub use extractor::{extract_content, normalize_text};

use url::Url;

/// A heading found in page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1 for `h1` through 6 for `h6`
    pub level: u8,

    /// Normalized heading text
    pub text: String,
}

/// The readable content of one page
///
/// Headings and paragraphs are kept as two independent lists, each in
/// document order. Produced once per fetched page and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    source_url: Url,
    headings: Vec<Heading>,
    paragraphs: Vec<String>,
}

impl ExtractedPage {
    /// Creates a page from already-normalized parts
    pub fn new(source_url: Url, headings: Vec<Heading>, paragraphs: Vec<String>) -> Self {
        Self {
            source_url,
            headings,
            paragraphs,
        }
    }

    /// The normalized URL the content came from
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Returns true if the page had no headings and no paragraphs
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.paragraphs.is_empty()
    }
}
