//! XHTML adapter backed by `roxmltree`.
//!
//! Use this for well-formed XHTML (or microdata embedded in other XML).
//! Tag names are taken without namespace prefix and are not case-folded.

use std::hash::{Hash, Hasher};

use roxmltree::{Document, Node, ParsingOptions};

use super::{collapse_whitespace, DocumentIndex, MicrodataElement};
use crate::error::Result;

/// A parsed XHTML document.
#[derive(Debug)]
pub struct XhtmlDocument<'input> {
    doc: Document<'input>,
}

impl<'input> XhtmlDocument<'input> {
    /// Parse a well-formed XHTML document.
    ///
    /// DOCTYPE declarations are accepted.
    ///
    /// # Examples
    /// ```
    /// use microdata_extractor::dom::{DocumentAdapter, MicrodataElement, XhtmlDocument};
    ///
    /// let doc = XhtmlDocument::parse(r#"<html><p id="x" itemprop="name">Jane</p></html>"#).unwrap();
    /// let index = doc.index();
    /// assert_eq!(index.element_by_id("x").unwrap().text_content(), "Jane");
    /// ```
    pub fn parse(markup: &'input str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(markup, options)?;
        Ok(Self { doc })
    }

    /// Build the element index for this document.
    pub fn index(&self) -> DocumentIndex<XhtmlElement<'_, 'input>> {
        DocumentIndex::new(
            self.doc
                .descendants()
                .filter(|node| node.is_element())
                .map(XhtmlElement),
        )
    }
}

/// Element handle into an [`XhtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct XhtmlElement<'a, 'input>(Node<'a, 'input>);

impl PartialEq for XhtmlElement<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for XhtmlElement<'_, '_> {}

impl Hash for XhtmlElement<'_, '_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id().hash(state);
    }
}

impl<'a, 'input> MicrodataElement for XhtmlElement<'a, 'input> {
    fn tag_name(&self) -> &str {
        self.0.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter(|child| child.is_element())
            .map(XhtmlElement)
            .collect()
    }

    fn text_content(&self) -> String {
        let text: String = self
            .0
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect();
        collapse_whitespace(&text)
    }
}
