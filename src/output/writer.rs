//! Per-page text file output
//!
//! Each crawl writes into one directory named for the seed's domain. Every
//! scraped page becomes one `.txt` file whose name is derived from the page's
//! URL path.

use crate::content::ExtractedPage;
use crate::output::format::render_page;
use crate::url::DomainScope;
use crate::ScraperError;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Longest filename stem written, in bytes
const MAX_STEM_LEN: usize = 200;

/// Stem used for the site root
const INDEX_STEM: &str = "index";

/// Derives the filename stem for a page URL
///
/// The root path maps to `index`. Other paths lose their outer slashes, inner
/// slashes become `-`, and characters outside `[A-Za-z0-9._-]` become `_`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use website_scraper::output::filename_stem;
///
/// assert_eq!(filename_stem(&Url::parse("https://example.com/").unwrap()), "index");
/// assert_eq!(
///     filename_stem(&Url::parse("https://example.com/blog/first post").unwrap()),
///     "blog-first_20post"
/// );
/// ```
pub fn filename_stem(url: &Url) -> String {
    let path = url.path().trim_matches('/');
    if path.is_empty() {
        return INDEX_STEM.to_string();
    }

    let mut stem: String = path
        .chars()
        .map(|c| match c {
            '/' => '-',
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => c,
            _ => '_',
        })
        .collect();

    // Only ASCII remains, so any byte index is a char boundary
    stem.truncate(MAX_STEM_LEN);

    // "." and ".." are not usable filenames on their own
    if stem.chars().all(|c| c == '.') {
        stem = stem.replace('.', "_");
    }

    stem
}

/// Writes extracted pages into a domain-named directory
#[derive(Debug)]
pub struct OutputWriter {
    /// The domain-named output directory
    dir: PathBuf,

    /// Lowercased filenames written during this crawl and the URL that claimed each
    claimed: HashMap<String, String>,
}

impl OutputWriter {
    /// Creates the output directory for a site if it doesn't exist yet
    ///
    /// # Arguments
    ///
    /// * `root` - Directory in which the domain-named directory is created
    /// * `scope` - The crawl's domain scope; names the directory
    ///
    /// # Returns
    ///
    /// * `Ok(OutputWriter)` - The directory exists and is ready
    /// * `Err(ScraperError::OutputDir)` - The directory could not be created
    pub fn create(root: &Path, scope: &DomainScope) -> Result<Self, ScraperError> {
        let dir = root.join(scope.directory_name());

        fs::create_dir_all(&dir).map_err(|source| ScraperError::OutputDir {
            path: dir.clone(),
            source,
        })?;
        tracing::info!("Using output directory: {}", dir.display());

        Ok(Self {
            dir,
            claimed: HashMap::new(),
        })
    }

    /// The domain-named output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes a page, overwriting any file a previous run left for it
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written file
    /// * `Err(ScraperError::Io)` - The file could not be written
    pub fn write_page(&mut self, page: &ExtractedPage) -> Result<PathBuf, ScraperError> {
        let filename = self.claim_filename(page.source_url());
        let path = self.dir.join(filename);

        let mut file = File::create(&path)?;
        file.write_all(render_page(page).as_bytes())?;

        Ok(path)
    }

    /// Picks the filename for a URL, disambiguating sanitization collisions
    ///
    /// When a different URL already claimed `<stem>.txt` in this crawl, the
    /// next free `<stem>-2.txt`, `<stem>-3.txt`, ... is used instead. Names
    /// are compared case-insensitively so `About.txt` and `about.txt` never
    /// share a file on case-insensitive filesystems.
    fn claim_filename(&mut self, url: &Url) -> String {
        let stem = filename_stem(url);
        let mut filename = format!("{}.txt", stem);
        let mut suffix = 2;

        while let Some(owner) = self.claimed.get(&filename.to_ascii_lowercase()) {
            if owner == url.as_str() {
                return filename;
            }
            filename = format!("{}-{}.txt", stem, suffix);
            suffix += 1;
        }

        if suffix > 2 {
            tracing::debug!("Filename collision for {}, using {}", url, filename);
        }
        self.claimed.insert(filename.to_ascii_lowercase(), url.to_string());
        filename
    }
}
