//! Recursive item assembly with cycle detection.

use std::collections::{BTreeMap, HashSet};

use super::collector::collect_properties;
use super::tokens;
use super::value::{item_value, PropertyValue};
use crate::dom::{DocumentAdapter, MicrodataElement};
use crate::types::{Item, Value};

/// Builds [`Item`]s from item elements of one document.
///
/// Items that are still being expanded are tracked in an explicit set of
/// element handles. A property that points back into that set becomes
/// [`Value::Cycle`] instead of being expanded again, which bounds the
/// recursion on cyclic `itemref` graphs.
pub struct ItemGraphBuilder<'d, D> {
    document: &'d D,
}

impl<'d, D: DocumentAdapter> ItemGraphBuilder<'d, D> {
    pub fn new(document: &'d D) -> Self {
        Self { document }
    }

    /// Build the item rooted at `element`, with nothing in progress.
    pub fn build(&self, element: D::Element) -> Item {
        let mut in_progress = HashSet::new();
        self.build_item(element, &mut in_progress)
    }

    fn build_item(&self, element: D::Element, in_progress: &mut HashSet<D::Element>) -> Item {
        let item_type = non_empty(element.attribute("itemtype"))
            .map(|itemtype| tokens(itemtype).map(String::from).collect());
        let id = non_empty(element.attribute("itemid")).map(String::from);

        let mut properties: BTreeMap<String, Vec<Value>> = BTreeMap::new();
        for property in collect_properties(self.document, element) {
            let value = match item_value(property) {
                PropertyValue::Item(nested) => self.nested_value(element, nested, in_progress),
                PropertyValue::Text(text) => Value::Text(text),
            };

            for name in tokens(property.attribute("itemprop").unwrap_or_default()) {
                properties
                    .entry(name.to_string())
                    .or_default()
                    .push(value.clone());
            }
        }

        Item {
            item_type,
            id,
            properties,
        }
    }

    /// Expand `nested`, a property of `owner`, unless it is already in
    /// progress.
    fn nested_value(
        &self,
        owner: D::Element,
        nested: D::Element,
        in_progress: &mut HashSet<D::Element>,
    ) -> Value {
        if in_progress.contains(&nested) {
            tracing::debug!(element = ?nested, "Cycle detected, substituting cycle marker");
            return Value::Cycle;
        }

        in_progress.insert(owner);
        let item = self.build_item(nested, in_progress);
        in_progress.remove(&owner);
        Value::Item(item)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
