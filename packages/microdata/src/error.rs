//! Error types for the microdata extractor.
//!
//! Only document acquisition and output encoding can fail. The extraction
//! core itself is infallible: cycles, unresolved `itemref` ids and unknown
//! tags are represented in the output data instead.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum MicrodataError {
    /// Neither a URL nor inline markup was configured.
    #[error("Either a URL or an HTML string must be supplied")]
    MissingSource,

    /// URL is not an absolute http(s) URL.
    #[error("Invalid URL: '{0}'. Expected an absolute http:// or https:// URL")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the document.
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts failed.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Response body exceeds the configured limit.
    #[error("Response from {url} is {size} bytes, exceeding the limit of {limit} bytes")]
    ResponseTooLarge { url: String, size: u64, limit: u64 },

    /// XHTML parsing failed.
    #[error("XHTML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, MicrodataError>;
