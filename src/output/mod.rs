//! Output module for writing scraped pages and crawl summaries
//!
//! This module handles:
//! - Rendering extracted pages as plain text
//! - Writing one file per page into a domain-named directory
//! - Summarizing per-page outcomes once the crawl is done

mod format;
pub mod stats;
mod writer;

pub use format::render_page;
pub use stats::{format_statistics, log_statistics, CrawlStatistics};
pub use writer::{filename_stem, OutputWriter};
