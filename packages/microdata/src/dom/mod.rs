//! Document adapters.
//!
//! The extraction core only needs a small capability set from a parsed
//! tree: attribute access, tag names, document-order element children,
//! text content and id lookup. [`MicrodataElement`] and [`DocumentAdapter`]
//! describe that set; [`html`] and [`xhtml`] implement it on top of
//! `scraper` and `roxmltree`.
//!
//! Element handles compare and hash by node identity, never by attribute
//! equality.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub mod html;
pub mod xhtml;

pub use html::{HtmlDocument, HtmlElement};
pub use xhtml::{XhtmlDocument, XhtmlElement};

/// A handle to one element of a parsed document.
pub trait MicrodataElement: Copy + Eq + Hash + Debug {
    /// Local tag name, as produced by the parser.
    fn tag_name(&self) -> &str;

    /// Attribute value, or `None` if the attribute is absent.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Whether the attribute is present, regardless of its value.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Direct element children in document order.
    fn element_children(&self) -> Vec<Self>;

    /// Descendant text, concatenated and whitespace-collapsed.
    fn text_content(&self) -> String;
}

/// Read-only view over a parsed document.
pub trait DocumentAdapter {
    type Element: MicrodataElement;

    /// All elements in document order.
    fn elements(&self) -> &[Self::Element];

    /// First element in document order whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Element list and id map of one document, built once and shared by all
/// item builds of an extraction.
#[derive(Debug, Clone)]
pub struct DocumentIndex<E> {
    elements: Vec<E>,
    ids: HashMap<String, E>,
}

impl<E: MicrodataElement> DocumentIndex<E> {
    /// Build the index from elements given in document order.
    pub fn new(elements: impl IntoIterator<Item = E>) -> Self {
        let elements: Vec<E> = elements.into_iter().collect();
        let mut ids = HashMap::new();
        for element in &elements {
            if let Some(id) = element.attribute("id").filter(|id| !id.is_empty()) {
                // First occurrence wins on duplicate ids
                ids.entry(id.to_string()).or_insert(*element);
            }
        }
        Self { elements, ids }
    }
}

impl<E: MicrodataElement> DocumentAdapter for DocumentIndex<E> {
    type Element = E;

    fn elements(&self) -> &[E] {
        &self.elements
    }

    fn element_by_id(&self, id: &str) -> Option<E> {
        self.ids.get(id).copied()
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends.
///
/// # Examples
/// ```
/// use microdata_extractor::dom::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Jane \n\t Doe "), "Jane Doe");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
