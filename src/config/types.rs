use crate::config::validation::validate;
use crate::url::parse_seed_url;
use crate::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

/// Settings that may come from a TOML file
///
/// Every key is optional; missing sections and keys fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub request: RequestConfig,
    pub crawler: CrawlerConfig,
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RequestConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("website-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages to attempt; unbounded when absent
    #[serde(rename = "max-pages")]
    pub max_pages: Option<usize>,

    /// Maximum navigation depth from the seed (seed is depth 0); unbounded when absent
    #[serde(rename = "max-depth")]
    pub max_depth: Option<usize>,
}

/// Fully resolved configuration for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Normalized seed URL; anchors the domain scope
    pub seed: Url,

    /// Scrape the seed page only, without following navigation links
    pub skip_links: bool,

    /// Directory under which the domain-named output directory is created
    pub output_root: PathBuf,

    /// Request and crawler settings
    pub settings: Settings,
}

impl CrawlConfig {
    /// Builds a crawl configuration from a user-supplied seed URL
    ///
    /// The seed is normalized (a bare domain gets `https://`), the output root
    /// defaults to the current directory and link following is enabled.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlConfig)` - Valid configuration
    /// * `Err(ConfigError)` - The seed URL or the settings are invalid
    ///
    /// # Example
    ///
    /// ```
    /// use website_scraper::config::{CrawlConfig, Settings};
    ///
    /// let config = CrawlConfig::new("example.com", Settings::default()).unwrap();
    /// assert_eq!(config.seed.as_str(), "https://example.com/");
    /// assert!(!config.skip_links);
    /// ```
    pub fn new(seed: &str, settings: Settings) -> Result<Self, ConfigError> {
        let seed = parse_seed_url(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", seed.trim(), e)))?;

        let config = Self {
            seed,
            skip_links: false,
            output_root: PathBuf::from("."),
            settings,
        };
        validate(&config)?;

        Ok(config)
    }

    /// Sets single-page mode
    pub fn with_skip_links(mut self, skip_links: bool) -> Self {
        self.skip_links = skip_links;
        self
    }

    /// Sets the directory that receives the domain-named output directory
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// Sets the page limit
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.settings.crawler.max_pages = max_pages;
        self
    }

    /// Sets the depth limit
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.settings.crawler.max_depth = max_depth;
        self
    }
}
