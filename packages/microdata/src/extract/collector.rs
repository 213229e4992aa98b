//! Property element collection for one item.

use std::collections::VecDeque;

use super::tokens;
use crate::dom::{DocumentAdapter, MicrodataElement};

/// Collect the property elements owned by `root`, in traversal order.
///
/// The walk starts at `root` and then at each element named by the root's
/// `itemref` tokens, in attribute order. Each walk is a pre-order,
/// document-order depth-first traversal that records every element with a
/// non-empty `itemprop` and does not descend into elements carrying
/// `itemscope` (other than `root` itself). Unknown `itemref` ids are
/// skipped.
///
/// Every `itemref` walk is independent of the others, so a target that
/// lies inside the root's subtree (or is listed twice) contributes its
/// properties again. A root listed in its own `itemref` is not re-walked.
pub fn collect_properties<D: DocumentAdapter>(document: &D, root: D::Element) -> Vec<D::Element> {
    let mut pending: VecDeque<D::Element> = VecDeque::from([root]);
    for id in tokens(root.attribute("itemref").unwrap_or_default()) {
        match document.element_by_id(id) {
            Some(target) if target == root => {}
            Some(target) => pending.push_back(target),
            None => tracing::trace!(id, "Skipping unresolved itemref"),
        }
    }

    let mut properties = Vec::new();

    while let Some(start) = pending.pop_front() {
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if node != root {
                if tokens(node.attribute("itemprop").unwrap_or_default())
                    .next()
                    .is_some()
                {
                    properties.push(node);
                }
                if node.has_attribute("itemscope") {
                    continue;
                }
            }

            // Reversed so the first child is popped first
            stack.extend(node.element_children().into_iter().rev());
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    fn collect(html: &str, root_id: &str) -> Vec<String> {
        let doc = HtmlDocument::parse(html);
        let index = doc.index();
        let root = index.element_by_id(root_id).unwrap();
        collect_properties(&index, root)
            .iter()
            .map(|e| e.attribute("itemprop").unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_pre_order_document_order() {
        let html = r#"
            <div id="root" itemscope>
                <p itemprop="a"><span itemprop="b"></span></p>
                <div><span itemprop="c"></span></div>
                <span itemprop="d"></span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_nested_item_is_a_boundary() {
        let html = r#"
            <div id="root" itemscope>
                <div itemprop="address" itemscope>
                    <span itemprop="street"></span>
                </div>
                <div itemscope>
                    <span itemprop="hidden"></span>
                </div>
                <span itemprop="after"></span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["address", "after"]);
    }

    #[test]
    fn test_itemref_targets_follow_own_subtree() {
        let html = r#"
            <div id="root" itemscope itemref="second first">
                <span itemprop="own"></span>
            </div>
            <p id="first" itemprop="first"><b itemprop="inner"></b></p>
            <div id="second"><span itemprop="second"></span></div>
        "#;
        assert_eq!(collect(html, "root"), ["own", "second", "first", "inner"]);
    }

    #[test]
    fn test_itemref_target_that_is_an_item_is_pruned() {
        let html = r#"
            <div id="root" itemscope itemref="other"></div>
            <div id="other" itemscope itemprop="friend">
                <span itemprop="name"></span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["friend"]);
    }

    #[test]
    fn test_unresolved_itemref_is_skipped() {
        let html = r#"
            <div id="root" itemscope itemref="missing  also-missing">
                <span itemprop="name"></span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["name"]);
    }

    #[test]
    fn test_itemref_inside_own_subtree_is_walked_again() {
        let html = r#"
            <div id="root" itemscope itemref="inner">
                <span id="inner" itemprop="name">A</span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["name", "name"]);
    }

    #[test]
    fn test_repeated_itemref_walks_each_token() {
        let html = r#"
            <div id="root" itemscope itemref="other other"></div>
            <p id="other"><span itemprop="name"></span></p>
        "#;
        assert_eq!(collect(html, "root"), ["name", "name"]);
    }

    #[test]
    fn test_root_in_own_itemref_is_not_walked_again() {
        let html = r#"
            <div id="root" itemscope itemref="root">
                <span itemprop="name"></span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["name"]);
    }

    #[test]
    fn test_empty_itemprop_is_ignored() {
        let html = r#"
            <div id="root" itemscope>
                <span itemprop=""><b itemprop="inside"></b></span>
                <span itemprop="   "></span>
            </div>
        "#;
        assert_eq!(collect(html, "root"), ["inside"]);
    }

    #[test]
    fn test_no_name_filtering() {
        let html = r#"
            <div id="root" itemscope>
                <span itemprop="name"></span>
                <span itemprop="name http://example.com/custom"></span>
            </div>
        "#;
        assert_eq!(
            collect(html, "root"),
            ["name", "name http://example.com/custom"]
        );
    }
}
