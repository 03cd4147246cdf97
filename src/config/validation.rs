use crate::config::types::{CrawlConfig, CrawlerConfig, RequestConfig, Settings};
use crate::ConfigError;
use url::Url;

/// Longest request or connect timeout accepted, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates a fully resolved crawl configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_seed(&config.seed)?;
    validate_settings(&config.settings)?;
    Ok(())
}

/// Validates settings loaded from a file or built from defaults
pub fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    validate_request_config(&settings.request)?;
    validate_crawler_config(&settings.crawler)?;
    Ok(())
}

/// Validates the seed URL
fn validate_seed(seed: &Url) -> Result<(), ConfigError> {
    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if seed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}

/// Validates HTTP request configuration
fn validate_request_config(config: &RequestConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Header values cannot carry control characters
    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user-agent must not contain control characters, got {:?}",
            config.user_agent
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max-pages must be >= 1".to_string(),
        ));
    }

    Ok(())
}
