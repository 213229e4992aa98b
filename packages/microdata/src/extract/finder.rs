//! Top-level item discovery.

use crate::dom::{DocumentAdapter, MicrodataElement};

/// Elements that start a top-level item, in document order.
///
/// An element qualifies when it carries `itemscope` and does not carry
/// `itemprop`; an element that is itself some item's property is never
/// top-level, even when it also declares `itemscope`.
pub fn top_level_items<D: DocumentAdapter>(document: &D) -> Vec<D::Element> {
    document
        .elements()
        .iter()
        .filter(|e| e.has_attribute("itemscope") && !e.has_attribute("itemprop"))
        .copied()
        .collect()
}
