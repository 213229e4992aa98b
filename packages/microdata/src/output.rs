//! Output encoding for extracted microdata.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::Microdata;

/// Encoding of the extraction result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Encode as JSON.
///
/// # Examples
/// ```
/// use microdata_extractor::extract_html;
/// use microdata_extractor::output::to_json;
///
/// let data = extract_html(r#"<div itemscope><b itemprop="n">x</b></div>"#);
/// assert_eq!(to_json(&data, false).unwrap(), r#"{"items":[{"properties":{"n":["x"]}}]}"#);
/// ```
pub fn to_json(data: &Microdata, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(json)
}

/// Encode as YAML.
pub fn to_yaml(data: &Microdata) -> Result<String> {
    Ok(serde_yaml_ng::to_string(data)?)
}

/// Encode in the requested format. `pretty` only affects JSON.
pub fn render(data: &Microdata, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(data, pretty),
        OutputFormat::Yaml => to_yaml(data),
    }
}

/// Write the encoded result to `path`, with a trailing newline.
pub fn save_output(
    data: &Microdata,
    format: OutputFormat,
    pretty: bool,
    path: &Path,
) -> Result<()> {
    let mut content = render(data, format, pretty)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
