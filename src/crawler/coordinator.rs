//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the other pieces together:
//! - Popping URLs from the frontier in breadth-first order
//! - Fetching, parsing and extracting each page
//! - Writing page text through the output writer
//! - Feeding navigation links back into the frontier
//!
//! Pages are processed one at a time. A page that fails to fetch or parse is
//! recorded and skipped; only output failures end the crawl early.

use crate::config::{validate, CrawlConfig};
use crate::content::extract_content;
use crate::crawler::frontier::Frontier;
use crate::crawler::links::extract_nav_links;
use crate::crawler::parser::parse_document;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::output::{log_statistics, CrawlStatistics, OutputWriter};
use crate::state::PageOutcome;
use crate::url::{normalize_url, DomainScope};
use crate::ScraperError;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

/// Result of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The domain-named directory the pages were written to
    pub output_dir: PathBuf,

    /// Number of pages written
    pub pages_scraped: usize,

    /// Every attempted URL with its outcome, in fetch order
    pub outcomes: Vec<(String, PageOutcome)>,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: CrawlConfig,
    scope: DomainScope,
    client: Client,
    frontier: Frontier,
    writer: OutputWriter,
    outcomes: Vec<(String, PageOutcome)>,
    pages_scraped: usize,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Validates the configuration, builds the HTTP client and creates the
    /// output directory. Nothing is fetched yet.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScraperError)` - Invalid configuration, or the output directory
    ///   could not be created
    pub fn new(config: CrawlConfig) -> Result<Self, ScraperError> {
        validate(&config)?;

        let seed = normalize_url(config.seed.as_str())?;
        let scope = DomainScope::from_url(&seed)?;
        let client = build_http_client(&config.settings.request)?;
        let writer = OutputWriter::create(&config.output_root, &scope)?;

        Ok(Self {
            config,
            scope,
            client,
            frontier: Frontier::new(seed),
            writer,
            outcomes: Vec::new(),
            pages_scraped: 0,
        })
    }

    /// Runs the main crawl loop
    ///
    /// This is the core crawling logic that:
    /// 1. Pops the next unvisited URL from the frontier
    /// 2. Marks it visited and fetches it
    /// 3. Parses the body and writes the extracted text
    /// 4. Appends newly discovered navigation links to the frontier, one
    ///    level deeper than the page they were found on
    ///
    /// The loop ends when the frontier is empty or the page limit is reached.
    /// Pages at the depth limit are scraped but their links are not followed.
    pub async fn run(&mut self) -> Result<CrawlReport, ScraperError> {
        tracing::info!(
            "Starting crawl of {} (staying on {})",
            self.config.seed,
            self.scope.host()
        );
        let start_time = Instant::now();
        let max_pages = self.config.settings.crawler.max_pages;

        while let Some((url, depth)) = self.frontier.pop() {
            if let Some(limit) = max_pages {
                if self.outcomes.len() >= limit {
                    tracing::info!(
                        "Reached page limit of {}, {} URLs left unvisited",
                        limit,
                        self.frontier.len() + 1
                    );
                    break;
                }
            }

            self.frontier.mark_visited(&url);
            self.process_url(url, depth).await?;
        }

        tracing::info!(
            "Crawl completed: {} pages scraped, {} URLs visited in {:?}",
            self.pages_scraped,
            self.frontier.visited_count(),
            start_time.elapsed()
        );

        let report = CrawlReport {
            output_dir: self.writer.dir().to_path_buf(),
            pages_scraped: self.pages_scraped,
            outcomes: self.outcomes.clone(),
        };
        log_statistics(&CrawlStatistics::from_report(&report));

        Ok(report)
    }

    /// Fetches a single URL and records its outcome
    async fn process_url(&mut self, url: Url, depth: usize) -> Result<(), ScraperError> {
        tracing::info!("Scraping: {}", url);
        tracing::debug!("Depth of {}: {}", url, depth);

        let fetched = fetch_url(&self.client, &url).await;
        let outcome = match &fetched {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!("Fetched {} (HTTP {})", final_url, status_code);
                self.process_body(&url, depth, final_url, body)?
            }

            FetchResult::ContentMismatch { content_type } => {
                tracing::warn!("Skipping {}: expected HTML, got {}", url, content_type);
                fetched.outcome()
            }

            FetchResult::HttpError { status_code, .. } => {
                tracing::warn!("Skipping {}: HTTP {}", url, status_code);
                fetched.outcome()
            }

            FetchResult::NetworkError { error, .. } => {
                tracing::warn!("Skipping {}: {}", url, error);
                fetched.outcome()
            }
        };

        self.outcomes.push((url.to_string(), outcome));
        Ok(())
    }

    /// Parses a fetched body, writes its content and expands the frontier
    ///
    /// Everything here is synchronous; the parsed document never lives
    /// across an await point.
    fn process_body(
        &mut self,
        url: &Url,
        depth: usize,
        final_url: &Url,
        body: &str,
    ) -> Result<PageOutcome, ScraperError> {
        self.mark_redirect_target(url, final_url);

        let document = match parse_document(body, final_url) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", url, e);
                return Ok(PageOutcome::ParseFailed);
            }
        };

        let page = extract_content(&document, url);
        if page.is_empty() {
            tracing::debug!("No content found on {}", url);
        }

        let path = self.writer.write_page(&page)?;
        self.pages_scraped += 1;
        tracing::info!("Saved content to: {}", path.display());

        if self.config.skip_links {
            return Ok(PageOutcome::Scraped);
        }

        if let Some(max_depth) = self.config.settings.crawler.max_depth {
            if depth >= max_depth {
                tracing::debug!("Reached max depth {} on {}, not following links", max_depth, url);
                return Ok(PageOutcome::Scraped);
            }
        }

        let links = extract_nav_links(&document, final_url, &self.scope);
        let mut added = 0;
        for link in links {
            if self.frontier.push(link.clone(), depth + 1) {
                tracing::debug!("Queued {}", link);
                added += 1;
            } else {
                tracing::trace!("Already seen {}", link);
            }
        }
        tracing::debug!(
            "Found {} new links on {}, {} URLs in frontier",
            added,
            url,
            self.frontier.len()
        );

        Ok(PageOutcome::Scraped)
    }

    /// Marks the in-scope target of a redirect as visited
    fn mark_redirect_target(&mut self, url: &Url, final_url: &Url) {
        let Some(target) = normalize_url(final_url.as_str())
            .ok()
            .and_then(|normalized| self.scope.rebase(normalized))
        else {
            if final_url != url {
                tracing::debug!("{} redirected off-site to {}", url, final_url);
            }
            return;
        };

        if &target != url && self.frontier.mark_visited(&target) {
            tracing::debug!("{} redirected to {}", url, target);
        }
    }
}

/// Runs the main crawl operation
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; individual pages may still have failed
/// * `Err(ScraperError)` - Configuration or output failure
///
/// # Example
///
/// ```no_run
/// use website_scraper::config::{CrawlConfig, Settings};
/// use website_scraper::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig::new("example.com", Settings::default())?;
/// let report = run_crawl(config).await?;
/// println!("{} pages", report.pages_scraped);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlReport, ScraperError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
