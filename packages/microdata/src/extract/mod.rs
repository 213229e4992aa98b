//! Item graph construction.
//!
//! - [`finder`]: top-level item discovery
//! - [`collector`]: property elements of one item, following `itemref`
//! - [`value`]: tag-specific property values
//! - [`builder`]: recursive item assembly with cycle detection

pub mod builder;
pub mod collector;
pub mod finder;
pub mod value;

pub use builder::ItemGraphBuilder;
pub use collector::collect_properties;
pub use finder::top_level_items;
pub use value::{item_value, PropertyValue};

use crate::dom::DocumentAdapter;
use crate::types::Microdata;

/// Extract all top-level items of a document.
///
/// The document index is shared by every item build, so it is built once
/// per document by the caller.
///
/// # Examples
/// ```
/// use microdata_extractor::dom::HtmlDocument;
/// use microdata_extractor::extract::extract;
///
/// let doc = HtmlDocument::parse(
///     r#"<div itemscope><span itemprop="name">Jane Doe</span></div>"#,
/// );
/// let data = extract(&doc.index());
/// assert_eq!(data.items[0].text("name"), Some("Jane Doe"));
/// ```
pub fn extract<D: DocumentAdapter>(document: &D) -> Microdata {
    let builder = ItemGraphBuilder::new(document);
    let items: Vec<_> = top_level_items(document)
        .into_iter()
        .map(|element| builder.build(element))
        .collect();

    tracing::debug!(items = items.len(), "Extracted top-level items");
    Microdata { items }
}

/// Whitespace-separated tokens of an attribute value.
pub(crate) fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}
