//! Microdata Extractor - Extract HTML microdata items into an item graph.
//!
//! Finds every top-level item (`itemscope` without `itemprop`) in a parsed
//! document, collects each item's properties (following `itemref`),
//! derives property values from tag-specific attributes and nests items
//! recursively. Reference cycles end in [`Value::Cycle`].
//!
//! # Example
//!
//! ```
//! use microdata_extractor::{extract_html, Value};
//!
//! let data = extract_html(
//!     r#"<div itemscope itemtype="http://schema.org/Person">
//!          <span itemprop="name">Jane Doe</span>
//!          <div itemprop="address" itemscope>
//!            <span itemprop="addressLocality">Seattle</span>
//!          </div>
//!        </div>"#,
//! );
//!
//! let person = &data.items[0];
//! assert_eq!(person.text("name"), Some("Jane Doe"));
//! let address = person.property("address")[0].as_item().unwrap();
//! assert_eq!(address.text("addressLocality"), Some("Seattle"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Document source configuration and validation
//! - [`types`]: Item graph types (Microdata, Item, Value)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for fetching documents
//! - [`dom`]: Document adapters over `scraper` and `roxmltree`
//! - [`extract`]: Item discovery, property collection, values, item building
//! - [`extractor`]: Loading and parsing combined with extraction
//! - [`output`]: JSON and YAML encoding
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod extractor;
pub mod http;
pub mod output;
pub mod types;

// Re-export main functions
pub use extractor::{extract_html, extract_markup, extract_microdata, extract_xhtml};

// Re-export commonly used items
pub use config::{SourceConfig, Syntax};
pub use error::{MicrodataError, Result};
pub use types::{Item, Microdata, Value};
