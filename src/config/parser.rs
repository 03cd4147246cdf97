use crate::config::types::Settings;
use crate::config::validation::validate_settings;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a settings file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(Settings)` - Successfully loaded and validated settings
/// * `Err(ConfigError)` - Failed to load, parse, or validate the settings
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use website_scraper::config::load_settings;
///
/// let settings = load_settings(Path::new("scraper.toml")).unwrap();
/// println!("Timeout: {}s", settings.request.timeout_secs);
/// ```
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parses and validates settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content)?;
    validate_settings(&settings)?;
    Ok(settings)
}
