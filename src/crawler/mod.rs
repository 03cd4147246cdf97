//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with outcome classification
//! - HTML parsing and navigation link extraction
//! - The breadth-first frontier and visited set
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod links;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use links::extract_nav_links;
pub use parser::parse_document;

use crate::config::CrawlConfig;
use crate::ScraperError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration and create the output directory
/// 2. Build the HTTP client
/// 3. Fetch pages breadth-first from the seed
/// 4. Write each page's text and follow its navigation links
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(ScraperError)` - Crawl could not start or its output failed
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport, ScraperError> {
    run_crawl(config).await
}
