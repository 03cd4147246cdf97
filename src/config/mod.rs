//! Configuration module for website-scraper
//!
//! This module handles the optional TOML settings file, the resolved per-run
//! crawl configuration, and validation of both.
//!
//! # Example
//!
//! ```no_run
//! use website_scraper::config::{load_settings, CrawlConfig};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("scraper.toml")).unwrap();
//! let config = CrawlConfig::new("https://example.com", settings).unwrap();
//! println!("Crawling {}", config.seed);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{CrawlConfig, CrawlerConfig, RequestConfig, Settings};

pub use parser::{load_settings, parse_settings};
pub use validation::{validate, validate_settings};
