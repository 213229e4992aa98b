//! Item graph produced by extraction.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A microdata item.
///
/// `item_type` and `id` are only set when the element carried a non-empty
/// `itemtype` / `itemid` attribute. Items are never mutated after they
/// have been built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Tokens of the `itemtype` attribute.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<Vec<String>>,

    /// Value of the `itemid` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Property name to values, each list in traversal order.
    pub properties: BTreeMap<String, Vec<Value>>,
}

impl Item {
    /// Values of a property, empty if the item has none.
    #[must_use]
    pub fn property(&self, name: &str) -> &[Value] {
        self.properties.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First text value of a property.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.property(name).iter().find_map(Value::as_text)
    }
}

/// Value of one property entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Scalar taken from an attribute or the element text.
    Text(String),

    /// Nested item.
    Item(Item),

    /// Expanding this property would re-enter an item that is still being
    /// built further up the chain.
    Cycle,
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Text and items encode as themselves; the cycle marker encodes as
/// `{"cycle": true}`, which never matches an item (items always carry
/// `properties`).
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Item(item) => item.serialize(serializer),
            Self::Cycle => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("cycle", &true)?;
                map.end()
            }
        }
    }
}

/// All top-level items of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Microdata {
    pub items: Vec<Item>,
}

impl Microdata {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> Item {
        let mut properties = BTreeMap::new();
        properties.insert("name".to_string(), vec![Value::from("Jane Doe")]);
        Item {
            item_type: Some(vec!["http://schema.org/Person".to_string()]),
            id: None,
            properties,
        }
    }

    #[test]
    fn test_item_serialization_omits_absent_fields() {
        let value = serde_json::to_value(Item::default()).unwrap();
        assert_eq!(value, json!({ "properties": {} }));
    }

    #[test]
    fn test_item_serialization() {
        let value = serde_json::to_value(person()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": ["http://schema.org/Person"],
                "properties": { "name": ["Jane Doe"] }
            })
        );
    }

    #[test]
    fn test_cycle_marker_is_distinct_from_text() {
        let mut item = Item::default();
        item.properties.insert(
            "knows".to_string(),
            vec![Value::Cycle, Value::from("ERROR")],
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({ "properties": { "knows": [{ "cycle": true }, "ERROR"] } })
        );
    }

    #[test]
    fn test_accessors() {
        let item = person();
        assert_eq!(item.text("name"), Some("Jane Doe"));
        assert!(item.property("missing").is_empty());
        assert!(item.text("missing").is_none());

        let nested = Value::Item(item.clone());
        assert_eq!(nested.as_item(), Some(&item));
        assert!(nested.as_text().is_none());
        assert!(Value::Cycle.is_cycle());
        assert!(!nested.is_cycle());
    }

    #[test]
    fn test_microdata_len() {
        let mut data = Microdata::default();
        assert!(data.is_empty());
        data.items.push(person());
        assert_eq!(data.len(), 1);
        assert_eq!(
            serde_json::to_value(&data).unwrap()["items"][0]["properties"]["name"][0],
            "Jane Doe"
        );
    }
}
