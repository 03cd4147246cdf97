use crate::UrlError;
use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (which shouldn't happen for valid HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use website_scraper::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Strips a leading `www.` label, which is treated as the same site
fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// The set of URLs that belong to the crawled site
///
/// Derived once from the seed URL. A URL is in scope when its host equals the
/// seed's host (ignoring a leading `www.` on either side) and its explicit
/// port matches. Every other subdomain is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScope {
    /// Scheme of the seed URL
    scheme: String,

    /// Host of the seed URL, exactly as the seed spells it
    host: String,

    /// Explicit non-default port of the seed URL
    port: Option<u16>,
}

impl DomainScope {
    /// Builds the scope for a seed URL
    ///
    /// # Returns
    ///
    /// * `Ok(DomainScope)` - The seed's scope
    /// * `Err(UrlError)` - The seed has no host
    pub fn from_url(seed: &Url) -> Result<Self, UrlError> {
        let host = extract_domain(seed).ok_or(UrlError::MissingDomain)?;

        Ok(Self {
            scheme: seed.scheme().to_string(),
            host,
            port: seed.port(),
        })
    }

    /// The seed host, as spelled in the seed URL
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns true if the URL belongs to this site
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use website_scraper::url::DomainScope;
    ///
    /// let scope = DomainScope::from_url(&Url::parse("https://example.com/").unwrap()).unwrap();
    /// assert!(scope.contains(&Url::parse("https://www.example.com/about").unwrap()));
    /// assert!(!scope.contains(&Url::parse("https://blog.example.com/").unwrap()));
    /// ```
    pub fn contains(&self, url: &Url) -> bool {
        let Some(host) = extract_domain(url) else {
            return false;
        };

        strip_www(&host) == strip_www(&self.host) && url.port() == self.port
    }

    /// Rewrites an in-scope URL onto the seed's scheme and host spelling
    ///
    /// Returns None for URLs outside the scope. Links to `www.example.com`
    /// found while crawling `example.com` come back as `example.com` links, so
    /// each page has a single identity in the visited set.
    pub fn rebase(&self, mut url: Url) -> Option<Url> {
        if !self.contains(&url) {
            return None;
        }

        if url.host_str() != Some(self.host.as_str()) {
            url.set_host(Some(&self.host)).ok()?;
        }
        if url.scheme() != self.scheme {
            url.set_scheme(&self.scheme).ok()?;
        }

        Some(url)
    }

    /// Name of the directory that holds this site's output
    ///
    /// The host without a leading `www.`, with an explicit port appended as
    /// `_<port>`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn directory_name(&self) -> String {
        let mut name = strip_www(&self.host).to_string();
        if let Some(port) = self.port {
            name.push_str(&format!("_{}", port));
        }

        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}
