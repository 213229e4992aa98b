//! Extraction service that ties document loading, parsing and the item
//! graph builder together.

use crate::config::{DocumentSource, SourceConfig, Syntax};
use crate::dom::{HtmlDocument, XhtmlDocument};
use crate::error::Result;
use crate::extract::extract;
use crate::http::{bytes_to_string, create_client, download_bytes};
use crate::types::Microdata;

/// Load the markup named by `config`.
///
/// # Returns
/// The document text, downloaded or taken inline
///
/// # Errors
/// `MissingSource` when neither a URL nor HTML is configured, or any
/// download error
pub fn load_markup(config: &SourceConfig) -> Result<String> {
    match config.source()? {
        DocumentSource::Url(url) => {
            tracing::debug!(url = %url, "Downloading document");
            let client = create_client()?;
            let bytes = download_bytes(&client, &url, config.max_size)?;
            Ok(bytes_to_string(&bytes, &url))
        }
        DocumentSource::Inline(html) => Ok(html),
    }
}

/// Extract microdata from an HTML string.
pub fn extract_html(markup: &str) -> Microdata {
    let document = HtmlDocument::parse(markup);
    extract(&document.index())
}

/// Extract microdata from a well-formed XHTML string.
pub fn extract_xhtml(markup: &str) -> Result<Microdata> {
    let document = XhtmlDocument::parse(markup)?;
    Ok(extract(&document.index()))
}

/// Extract microdata from markup of the given syntax.
pub fn extract_markup(markup: &str, syntax: Syntax) -> Result<Microdata> {
    match syntax {
        Syntax::Html => Ok(extract_html(markup)),
        Syntax::Xhtml => extract_xhtml(markup),
    }
}

/// Load the configured document and extract its microdata.
///
/// # Examples
/// ```
/// use microdata_extractor::{extract_microdata, SourceConfig};
///
/// let config = SourceConfig::from_html(
///     r#"<div itemscope><span itemprop="name">Jane Doe</span></div>"#,
/// );
/// let data = extract_microdata(&config).unwrap();
/// assert_eq!(data.items[0].text("name"), Some("Jane Doe"));
/// ```
pub fn extract_microdata(config: &SourceConfig) -> Result<Microdata> {
    let markup = load_markup(config)?;
    extract_markup(&markup, config.syntax)
}
