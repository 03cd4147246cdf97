//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests to fetch page markup
//! - Classifying failures into page outcomes
//!
//! A fetch never returns an error to the caller: every failure is a
//! [`FetchResult`] variant, so one bad page cannot stop the crawl.

use crate::config::RequestConfig;
use crate::state::PageOutcome;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Maximum redirect hops followed for a single fetch
const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: Url,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Page is not HTML (Content-Type mismatch)
    ContentMismatch {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Non-success HTTP status
    HttpError {
        /// The HTTP status code
        status_code: u16,
        /// The page outcome this status maps to
        outcome: PageOutcome,
    },

    /// Network error (connection refused, timeout, redirect loop, etc.)
    NetworkError {
        /// Error description
        error: String,
        /// The page outcome this error maps to
        outcome: PageOutcome,
    },
}

impl FetchResult {
    /// The page outcome implied by this result
    ///
    /// A successful fetch maps to `Scraped`; whether the page is actually
    /// scraped still depends on parsing.
    pub fn outcome(&self) -> PageOutcome {
        match self {
            Self::Success { .. } => PageOutcome::Scraped,
            Self::ContentMismatch { .. } => PageOutcome::ContentMismatch,
            Self::HttpError { outcome, .. } | Self::NetworkError { outcome, .. } => *outcome,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The request configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```
/// use website_scraper::config::RequestConfig;
/// use website_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&RequestConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &RequestConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Returns true if a Content-Type header value describes HTML
fn is_html_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml+xml")
}

/// Fetches a URL and classifies the result
///
/// # Result Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with HTML or missing Content-Type | Success |
/// | 2xx with other Content-Type | ContentMismatch |
/// | HTTP 404 / 410 | HttpError → DeadLink |
/// | Other non-2xx | HttpError → HttpError |
/// | Timeout | NetworkError → Unreachable |
/// | Connection refused / DNS / TLS | NetworkError → Unreachable |
/// | Too many redirects, body read error | NetworkError → Failed |
///
/// Redirects are followed (up to 10 hops). There is no retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(&e),
    };

    let status = response.status();
    let final_url = response.url().clone();

    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
            outcome: PageOutcome::from_status(status.as_u16()),
        };
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if let Some(content_type) = content_type {
        if !is_html_content_type(&content_type) {
            return FetchResult::ContentMismatch { content_type };
        }
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(&e),
    }
}

/// Maps a transport error to a failed fetch
fn classify_error(error: &reqwest::Error) -> FetchResult {
    if error.is_timeout() {
        FetchResult::NetworkError {
            error: "Request timeout".to_string(),
            outcome: PageOutcome::Unreachable,
        }
    } else if error.is_connect() {
        FetchResult::NetworkError {
            error: format!("Connection failed: {}", error),
            outcome: PageOutcome::Unreachable,
        }
    } else if error.is_redirect() {
        FetchResult::NetworkError {
            error: format!("Redirect error: {}", error),
            outcome: PageOutcome::Failed,
        }
    } else {
        FetchResult::NetworkError {
            error: error.to_string(),
            outcome: PageOutcome::Failed,
        }
    }
}
