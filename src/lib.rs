//! # domwalk
//!
//! Read-only navigation over an arena-allocated document tree: children,
//! parent, siblings, attributes, tag names, and nearest element siblings.
//!
//! ## Quick Start
//!
//! ```
//! use domwalk::{traversal, Attribute, Document};
//!
//! let mut doc = Document::new();
//! let div = doc.create_element("div", vec![Attribute::new("id", "x")]);
//! doc.append_child(doc.root(), div).unwrap();
//!
//! let elem = doc.element(div).unwrap();
//! assert_eq!(traversal::attribute_value(elem, "id"), Some("x"));
//! assert_eq!(traversal::parent(&doc, div), Some(doc.root()));
//! ```

pub mod error;
pub mod traversal;
pub mod tree;

// Re-export primary types at the crate root for convenience.
pub use error::TreeError;
pub use tree::{Attribute, Document, ElementRef, NodeId, NodeKind};
