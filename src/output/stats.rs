//! Crawl statistics
//!
//! This module summarizes the per-page outcomes recorded during a crawl.

use crate::crawler::CrawlReport;
use crate::state::PageOutcome;
use std::collections::HashMap;
use std::fmt::Write;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Number of pages whose fetch was attempted
    pub pages_attempted: usize,

    /// Number of pages written to disk
    pub pages_scraped: usize,

    /// Count of pages by outcome
    pub pages_by_outcome: HashMap<PageOutcome, usize>,

    /// Pages that failed before a body was received
    pub fetch_failures: usize,

    /// Pages that were not scraped, in fetch order
    pub failed_pages: Vec<(String, PageOutcome)>,
}

impl CrawlStatistics {
    /// Builds statistics from a finished crawl
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut pages_by_outcome = HashMap::new();
        let mut failed_pages = Vec::new();

        for (url, outcome) in &report.outcomes {
            *pages_by_outcome.entry(*outcome).or_insert(0) += 1;
            if outcome.is_error() {
                failed_pages.push((url.clone(), *outcome));
            }
        }

        Self {
            pages_attempted: report.outcomes.len(),
            pages_scraped: report.pages_scraped,
            fetch_failures: failed_pages
                .iter()
                .filter(|(_, outcome)| outcome.is_fetch_failure())
                .count(),
            pages_by_outcome,
            failed_pages,
        }
    }

    /// Number of pages that ended in the given outcome
    pub fn count(&self, outcome: PageOutcome) -> usize {
        self.pages_by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    /// Percentage of attempted pages that were scraped
    pub fn success_rate(&self) -> f64 {
        if self.pages_attempted == 0 {
            return 0.0;
        }
        (self.pages_scraped as f64 / self.pages_attempted as f64) * 100.0
    }
}

/// Formats statistics as a multi-line summary
///
/// # Arguments
///
/// * `stats` - The statistics to format
pub fn format_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Pages attempted: {}", stats.pages_attempted);

    // PageOutcome::all() keeps a stable order
    for outcome in PageOutcome::all() {
        let count = stats.count(outcome);
        if count > 0 {
            let _ = writeln!(out, "  {}: {}", outcome, count);
        }
    }

    if !stats.failed_pages.is_empty() {
        let _ = writeln!(
            out,
            "Skipped pages ({}, {} failed to fetch):",
            stats.failed_pages.len(),
            stats.fetch_failures
        );
        for (url, outcome) in &stats.failed_pages {
            let _ = writeln!(out, "  - {} ({})", url, outcome);
        }
    }

    let _ = write!(
        out,
        "Success rate: {:.1}% ({} / {} pages scraped)",
        stats.success_rate(),
        stats.pages_scraped,
        stats.pages_attempted
    );

    out
}

/// Logs statistics at info level, one line per summary line
pub fn log_statistics(stats: &CrawlStatistics) {
    for line in format_statistics(stats).lines() {
        tracing::info!("{}", line);
    }
}
