//! Read-only navigation over a [`Document`].
//!
//! Every function here is a pure read of the tree's links at call time. A
//! missing answer (no parent, no such attribute, no element sibling) is a
//! `None`, `false`, or empty `Vec`, never an error.
//!
//! # Panics
//!
//! Node ids must come from the `doc` they are passed with. Like
//! [`Document::node`], the functions taking a `NodeId` panic when the id
//! does not index into `doc`'s arena (an id from another, larger document,
//! or one forged with [`NodeId::from_raw`]).
//!
//! # Examples
//!
//! ```
//! use domwalk::traversal;
//! use domwalk::{Attribute, Document};
//!
//! let mut doc = Document::new();
//! let div = doc.create_element("div", vec![Attribute::new("id", "x")]);
//! let span = doc.create_element("span", vec![]);
//! let text = doc.create_text(" text ");
//! let b = doc.create_element("b", vec![]);
//! doc.append_child(doc.root(), div).unwrap();
//! for child in [span, text, b] {
//!     doc.append_child(div, child).unwrap();
//! }
//!
//! let next = traversal::next_element_sibling(&doc, span).unwrap();
//! assert_eq!(traversal::name(next), "b");
//! assert_eq!(traversal::siblings(&doc, span), vec![span, text, b]);
//! ```

use std::collections::VecDeque;

use crate::tree::{Document, ElementRef, NodeId};

/// Returns the children of `node` in document order.
///
/// Nodes that cannot own children yield an empty `Vec`.
#[must_use]
pub fn children(doc: &Document, node: NodeId) -> Vec<NodeId> {
    doc.children(node).collect()
}

/// Returns the container owning `node`, or `None` for the document node and
/// detached nodes.
#[must_use]
pub fn parent(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.parent(node)
}

/// Returns every sibling of `node`, `node` included, in document order.
///
/// When `node` has a parent this is exactly the parent's child list. A
/// parentless node may still sit in a detached `prev`/`next` chain; the
/// chain is then rebuilt by walking outward in both directions.
#[must_use]
pub fn siblings(doc: &Document, node: NodeId) -> Vec<NodeId> {
    if let Some(parent) = doc.parent(node) {
        return children(doc, parent);
    }

    let mut chain = VecDeque::from([node]);
    let mut prev = doc.prev_sibling(node);
    while let Some(id) = prev {
        chain.push_front(id);
        prev = doc.prev_sibling(id);
    }
    let mut next = doc.next_sibling(node);
    while let Some(id) = next {
        chain.push_back(id);
        next = doc.next_sibling(id);
    }

    tracing::trace!(%node, len = chain.len(), "rebuilt detached sibling chain");
    chain.into()
}

/// Returns the value of attribute `name` on `elem`.
///
/// The match is exact and case-sensitive. A key stored without a value
/// yields `None`, the same as a missing key.
#[must_use]
pub fn attribute_value<'a>(elem: ElementRef<'a>, name: &str) -> Option<&'a str> {
    elem.attributes()
        .iter()
        .find(|a| a.name == name)
        .and_then(|a| a.value.as_deref())
}

/// Returns `true` if `elem` carries attribute `name` with a value.
///
/// Agrees with [`attribute_value`]: a key stored without a value is not
/// reported as present.
#[must_use]
pub fn has_attrib(elem: ElementRef<'_>, name: &str) -> bool {
    attribute_value(elem, name).is_some()
}

/// Returns the tag name of `elem`, verbatim.
#[must_use]
pub fn name(elem: ElementRef<'_>) -> &str {
    elem.name()
}

/// Returns the nearest following sibling of `node` that is an element.
#[must_use]
pub fn next_element_sibling(doc: &Document, node: NodeId) -> Option<ElementRef<'_>> {
    let mut next = doc.next_sibling(node);
    while let Some(id) = next {
        if let Some(elem) = doc.element(id) {
            return Some(elem);
        }
        next = doc.next_sibling(id);
    }
    None
}

/// Returns the nearest preceding sibling of `node` that is an element.
#[must_use]
pub fn prev_element_sibling(doc: &Document, node: NodeId) -> Option<ElementRef<'_>> {
    let mut prev = doc.prev_sibling(node);
    while let Some(id) = prev {
        if let Some(elem) = doc.element(id) {
            return Some(elem);
        }
        prev = doc.prev_sibling(id);
    }
    None
}
