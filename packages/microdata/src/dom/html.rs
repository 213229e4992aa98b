//! HTML5 adapter backed by `scraper`.

use std::hash::{Hash, Hasher};

use scraper::{ElementRef, Html};

use super::{collapse_whitespace, DocumentIndex, MicrodataElement};

/// A parsed HTML document.
///
/// Parsing never fails; the HTML5 tree builder recovers from any markup.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a complete HTML document.
    ///
    /// # Examples
    /// ```
    /// use microdata_extractor::dom::{DocumentAdapter, HtmlDocument, MicrodataElement};
    ///
    /// let doc = HtmlDocument::parse(r#"<p id="x" itemprop="name">Jane</p>"#);
    /// let index = doc.index();
    /// let p = index.element_by_id("x").unwrap();
    /// assert_eq!(p.tag_name(), "p");
    /// assert_eq!(p.attribute("itemprop"), Some("name"));
    /// ```
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Build the element index for this document.
    pub fn index(&self) -> DocumentIndex<HtmlElement<'_>> {
        DocumentIndex::new(
            self.html
                .tree
                .root()
                .descendants()
                .filter_map(ElementRef::wrap)
                .map(HtmlElement),
        )
    }
}

/// Element handle into an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl PartialEq for HtmlElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl Eq for HtmlElement<'_> {}

impl Hash for HtmlElement<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id().hash(state);
    }
}

impl MicrodataElement for HtmlElement<'_> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(HtmlElement)
            .collect()
    }

    fn text_content(&self) -> String {
        collapse_whitespace(&self.0.text().collect::<String>())
    }
}
