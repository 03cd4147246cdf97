//! website-scraper main entry point
//!
//! This is the command-line interface for the website scraper.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use website_scraper::config::{load_settings, CrawlConfig, Settings};
use website_scraper::crawler::crawl;

/// website-scraper: saves the readable text of a website
///
/// Starting from the given URL, website-scraper follows the links found in
/// navigation menus, stays on the same domain, and writes the headings and
/// paragraphs of every page to one text file per page.
#[derive(Parser, Debug)]
#[command(name = "website-scraper")]
#[command(about = "Saves the readable text of a website", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// URL of the page to start from (https:// is assumed when omitted)
    #[arg(value_name = "URL", required_unless_present = "version")]
    url: Option<String>,

    /// Scrape only the given page without following navigation links
    #[arg(long)]
    skip_links: bool,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    version: bool,

    /// Directory in which the site's output directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Stop after this many pages have been attempted
    #[arg(short, long, value_name = "N")]
    max_pages: Option<usize>,

    /// Follow navigation links at most this many levels from the start page
    #[arg(short = 'd', long, value_name = "N")]
    max_depth: Option<usize>,

    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("website-scraper version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_settings(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Settings::default(),
    };

    let Some(url) = cli.url.as_deref() else {
        anyhow::bail!("A URL is required");
    };

    let mut config = CrawlConfig::new(url, settings)
        .context("Invalid crawl configuration")?
        .with_skip_links(cli.skip_links)
        .with_output_root(&cli.output);
    if cli.max_pages.is_some() {
        config = config.with_max_pages(cli.max_pages);
    }
    if cli.max_depth.is_some() {
        config = config.with_max_depth(cli.max_depth);
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries the final result line.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("website_scraper=info,warn"),
            1 => EnvFilter::new("website_scraper=debug,info"),
            2 => EnvFilter::new("website_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the main crawl operation
async fn handle_crawl(config: CrawlConfig) -> anyhow::Result<()> {
    if config.skip_links {
        tracing::info!("Scraping {} only (--skip-links)", config.seed);
    }
    if let Some(limit) = config.settings.crawler.max_pages {
        tracing::info!("Page limit: {}", limit);
    }
    if let Some(depth) = config.settings.crawler.max_depth {
        tracing::info!("Depth limit: {}", depth);
    }

    let report = match crawl(config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).context("Crawl failed");
        }
    };

    println!("Scraping complete!");
    println!(
        "Scraped {} pages to directory: {}",
        report.pages_scraped,
        report.output_dir.display()
    );

    Ok(())
}
