//! Configuration constants, source selection and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{MicrodataError, Result};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (10 MB).
///
/// Can be overridden via the CLI `--max-size` flag.
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Absolute http(s) URL without whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid regex"));

/// Markup flavour of the input document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// HTML5, parsed leniently.
    #[default]
    Html,

    /// Well-formed XHTML, parsed as XML.
    Xhtml,
}

/// Where the document comes from.
///
/// `url` takes precedence when both fields are set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// URL of the page to fetch.
    #[serde(default)]
    pub url: Option<String>,

    /// Inline markup.
    #[serde(default)]
    pub html: Option<String>,

    /// How to parse the markup.
    #[serde(default)]
    pub syntax: Syntax,

    /// Maximum accepted response size for URL sources.
    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

fn default_max_size() -> u64 {
    DEFAULT_MAX_RESPONSE_SIZE
}

/// A validated document source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    Inline(String),
}

impl SourceConfig {
    /// Config that fetches `url`.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Config that parses `html` directly.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// Set the markup syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Set the maximum response size for URL sources.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Resolve the configured source.
    ///
    /// # Returns
    /// * `Ok(DocumentSource)` for a valid URL or inline markup
    /// * `Err(MicrodataError::MissingSource)` if neither is set
    /// * `Err(MicrodataError::InvalidUrl)` if the URL is malformed
    pub fn source(&self) -> Result<DocumentSource> {
        if let Some(url) = &self.url {
            validate_url(url)?;
            return Ok(DocumentSource::Url(url.clone()));
        }
        match &self.html {
            Some(html) => Ok(DocumentSource::Inline(html.clone())),
            None => Err(MicrodataError::MissingSource),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            syntax: Syntax::Html,
            max_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }
}

/// A bare string is treated as a URL.
impl From<&str> for SourceConfig {
    fn from(url: &str) -> Self {
        Self::from_url(url)
    }
}

/// Validate that `url` is an absolute http(s) URL.
///
/// # Examples
/// ```
/// use microdata_extractor::config::validate_url;
///
/// assert!(validate_url("https://example.com/person.html").is_ok());
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(MicrodataError::InvalidUrl(url.to_string()))
    }
}
