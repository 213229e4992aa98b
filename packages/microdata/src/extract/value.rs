//! Property value rules.

use crate::dom::MicrodataElement;

/// What a property element contributes to its item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue<E> {
    /// The element carries `itemscope`; its value is the nested item.
    Item(E),

    /// Scalar value.
    Text(String),
}

/// Attribute holding the value for elements of the given tag.
///
/// `None` means the element has no dedicated attribute and uses the
/// default rule.
fn source_attribute(tag: &str) -> Option<&'static str> {
    match tag.to_ascii_lowercase().as_str() {
        "meta" => Some("content"),
        "audio" | "embed" | "iframe" | "img" | "source" | "track" | "video" => Some("src"),
        "a" | "area" | "link" => Some("href"),
        "object" => Some("data"),
        "data" => Some("value"),
        "time" => Some("datetime"),
        _ => None,
    }
}

/// Compute the value of a property element.
///
/// Elements with `itemscope` are nested items. Otherwise the tag decides
/// which attribute holds the value; when that attribute is absent (or, for
/// `<time>`, empty) the `content` attribute is used, then the element's
/// text content.
///
/// # Examples
/// ```
/// use microdata_extractor::dom::{DocumentAdapter, HtmlDocument};
/// use microdata_extractor::extract::{item_value, PropertyValue};
///
/// let doc = HtmlDocument::parse(r#"<img id="i" itemprop="image" src="photo.jpg">"#);
/// let index = doc.index();
/// let img = index.element_by_id("i").unwrap();
/// assert_eq!(item_value(img), PropertyValue::Text("photo.jpg".to_string()));
/// ```
pub fn item_value<E: MicrodataElement>(element: E) -> PropertyValue<E> {
    if element.has_attribute("itemscope") {
        return PropertyValue::Item(element);
    }

    let tag = element.tag_name();
    if let Some(value) = source_attribute(tag).and_then(|name| element.attribute(name)) {
        let is_time = tag.eq_ignore_ascii_case("time");
        if !is_time || !value.is_empty() {
            return PropertyValue::Text(value.to_string());
        }
    }

    match element.attribute("content") {
        Some(content) => PropertyValue::Text(content.to_string()),
        None => PropertyValue::Text(element.text_content()),
    }
}
