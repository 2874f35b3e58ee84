//! Arena-based document tree.
//!
//! All nodes live in a contiguous `Vec<NodeData>` owned by the `Document`
//! and are referenced by `NodeId`, a newtype over `NonZeroU32`. Dropping
//! the `Document` frees every node at once.
//!
//! # Architecture
//!
//! Navigation links (parent, first\_child, last\_child, next\_sibling,
//! prev\_sibling) are arena indices rather than pointers. They carry no
//! ownership, so a stale link can never keep a subtree alive or dangle into
//! freed memory; the worst it can do is name the wrong node.
//!
//! Nodes start out detached. They are wired together either under a
//! container with [`Document::append_child`], or into a parentless sibling
//! chain with [`Document::link_detached`] (the top-level list of a document
//! fragment, for instance).

mod node;

pub use node::{Attribute, ElementData, NodeKind};

use crate::error::TreeError;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU32;

/// A typed index into the document's node arena.
///
/// `Option<NodeId>` has the same size as `NodeId` (niche optimization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Creates a `NodeId` from a raw arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    #[allow(clippy::expect_used, clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self(NonZeroU32::new(index as u32).expect("NodeId index must be non-zero"))
    }

    fn as_index(self) -> usize {
        self.0.get() as usize
    }

    /// Converts this `NodeId` to a raw `u32`. The value is never zero.
    #[must_use]
    pub fn into_raw(self) -> u32 {
        self.0.get()
    }

    /// Creates a `NodeId` from a raw `u32`, or `None` if `raw` is 0.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage for a single node in the document arena.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// What kind of node this is and its payload.
    pub kind: NodeKind,
    /// Owning container. `None` for the document node and detached nodes.
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (for O(1) append).
    pub last_child: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }

    fn is_linked(&self) -> bool {
        self.parent.is_some() || self.prev_sibling.is_some() || self.next_sibling.is_some()
    }
}

/// A borrowed view of a node statically known to be an element.
///
/// Obtained from [`Document::element`] or the element-sibling accessors in
/// [`crate::traversal`].
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    id: NodeId,
    data: &'a ElementData,
}

impl<'a> ElementRef<'a> {
    /// The element's node id.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The element's tag name, verbatim.
    #[must_use]
    pub fn name(self) -> &'a str {
        self.data.name()
    }

    /// The element's attributes in source order.
    #[must_use]
    pub fn attributes(self) -> &'a [Attribute] {
        self.data.attributes()
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.data, other.data)
    }
}

impl Eq for ElementRef<'_> {}

/// A document tree.
///
/// The `Document` owns all nodes in an arena. Reads go through `&Document`,
/// construction through `&mut Document`.
///
/// # Examples
///
/// ```
/// use domwalk::{Attribute, Document};
///
/// let mut doc = Document::new();
/// let div = doc.create_element("div", vec![Attribute::new("id", "x")]);
/// doc.append_child(doc.root(), div).unwrap();
/// assert_eq!(doc.parent(div), Some(doc.root()));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// The node arena. Index 0 is unused (placeholder for `NonZeroU32`).
    nodes: Vec<NodeData>,
    /// The document node.
    root: NodeId,
}

impl Document {
    /// Creates a new document holding only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a new document with room for `capacity` nodes before the
    /// arena reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(2));
        // Index 0: placeholder (NodeId uses NonZeroU32)
        nodes.push(NodeData::new(NodeKind::Document));
        nodes.push(NodeData::new(NodeKind::Document));
        Self {
            nodes,
            root: NodeId::from_index(1),
        }
    }

    /// Returns the document node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the `NodeData` for the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.as_index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.as_index()]
    }

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    /// Returns `true` if the node can own children.
    #[must_use]
    pub fn is_container(&self, id: NodeId) -> bool {
        self.kind(id).is_container()
    }

    /// Returns `true` if the node is an element.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.kind(id).is_element()
    }

    /// Returns an element view of the node, or `None` for other kinds.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        match &self.node(id).kind {
            NodeKind::Element(data) => Some(ElementRef { id, data }),
            _ => None,
        }
    }

    /// Returns the text of a text, CDATA, or comment node.
    #[must_use]
    pub fn node_text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text { content }
            | NodeKind::Comment { content }
            | NodeKind::CData { content } => Some(content),
            NodeKind::ProcessingInstruction { data, .. } => data.as_deref(),
            _ => None,
        }
    }

    // --- Links ---

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Returns the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Returns an iterator over the children of a node.
    ///
    /// Leaf kinds never have children, so the iterator is empty for them.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            next: self.node(id).first_child,
        }
    }

    // --- Construction ---

    /// Allocates a new detached node in the arena and returns its `NodeId`.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        NodeId::from_index(index)
    }

    /// Allocates a detached element.
    pub fn create_element(&mut self, name: impl Into<String>, attributes: Vec<Attribute>) -> NodeId {
        self.create_node(NodeKind::Element(ElementData::new(name, attributes)))
    }

    /// Allocates a detached text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::Text {
            content: content.into(),
        })
    }

    /// Allocates a detached comment node.
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::Comment {
            content: content.into(),
        })
    }

    /// Appends `child` to the end of `parent`'s child list.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotAContainer`] if `parent` cannot own children.
    /// - [`TreeError::RootNode`] if `child` is the document node.
    /// - [`TreeError::AlreadyAttached`] if `child` has a parent or siblings.
    /// - [`TreeError::WouldCycle`] if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.is_container(parent) {
            return Err(TreeError::NotAContainer(parent));
        }
        if child == self.root {
            return Err(TreeError::RootNode(child));
        }
        if self.node(child).is_linked() {
            return Err(TreeError::AlreadyAttached(child));
        }
        let mut ancestor = Some(parent);
        while let Some(anc) = ancestor {
            if anc == child {
                return Err(TreeError::WouldCycle(child));
            }
            ancestor = self.parent(anc);
        }

        self.node_mut(child).parent = Some(parent);
        if let Some(last) = self.node(parent).last_child {
            self.node_mut(last).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(last);
        } else {
            self.node_mut(parent).first_child = Some(child);
        }
        self.node_mut(parent).last_child = Some(child);

        tracing::debug!(%parent, %child, "appended child");
        Ok(())
    }

    /// Links `chain` into a parentless sibling chain, in order.
    ///
    /// Each node's `prev`/`next` point at its neighbours in the slice; no
    /// parent is set. An empty or single-node slice is accepted and links
    /// nothing.
    ///
    /// # Errors
    ///
    /// - [`TreeError::RootNode`] if the document node is in `chain`.
    /// - [`TreeError::AlreadyAttached`] if any node has a parent or siblings.
    /// - [`TreeError::DuplicateNode`] if a node appears more than once.
    pub fn link_detached(&mut self, chain: &[NodeId]) -> Result<(), TreeError> {
        let mut seen = HashSet::with_capacity(chain.len());
        for &id in chain {
            if id == self.root {
                return Err(TreeError::RootNode(id));
            }
            if self.node(id).is_linked() {
                return Err(TreeError::AlreadyAttached(id));
            }
            if !seen.insert(id) {
                return Err(TreeError::DuplicateNode(id));
            }
        }

        for pair in chain.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            self.node_mut(prev).next_sibling = Some(next);
            self.node_mut(next).prev_sibling = Some(prev);
        }

        tracing::debug!(len = chain.len(), "linked detached sibling chain");
        Ok(())
    }

    /// Returns the total number of nodes in the arena, the document node
    /// included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1 // subtract placeholder at index 0
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).next_sibling;
        Some(current)
    }
}
