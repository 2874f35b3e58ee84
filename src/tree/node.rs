//! Node type definitions.
//!
//! The `NodeKind` enum is the closed set of node variants a tree can hold.
//! Each variant carries its own payload; navigation links live in
//! `NodeData`, not here.

/// The kind of a node and its associated data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document node. Always the root of a `Document`.
    Document,

    /// An element node, e.g., `<div class="x">`.
    Element(ElementData),

    /// A text node containing character data.
    Text {
        /// The decoded text content.
        content: String,
    },

    /// A CDATA section, e.g., `<![CDATA[...]]>`.
    CData {
        /// The CDATA content.
        content: String,
    },

    /// A comment node, e.g., `<!-- ... -->`.
    Comment {
        /// The comment text without delimiters.
        content: String,
    },

    /// A processing instruction, e.g., `<?target data?>`.
    ProcessingInstruction {
        /// The PI target.
        target: String,
        /// The PI data, if any.
        data: Option<String>,
    },

    /// A document type declaration, e.g., `<!DOCTYPE html>`.
    DocumentType {
        /// The declared root element name.
        name: String,
    },
}

impl NodeKind {
    /// Returns `true` if nodes of this kind can own children.
    ///
    /// Only the document node and elements are containers.
    #[must_use]
    pub fn is_container(&self) -> bool {
        match self {
            Self::Document | Self::Element(_) => true,
            Self::Text { .. }
            | Self::CData { .. }
            | Self::Comment { .. }
            | Self::ProcessingInstruction { .. }
            | Self::DocumentType { .. } => false,
        }
    }

    /// Returns `true` for the element variant.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

/// Payload of an element node: its tag name and attributes.
///
/// Attribute names are unique within an element. Fields are private so the
/// uniqueness established by [`ElementData::new`] cannot be broken later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    name: String,
    attributes: Vec<Attribute>,
}

impl ElementData {
    /// Creates element data with the given name and attributes.
    ///
    /// Repeated attribute names collapse into one entry: the key keeps the
    /// position of its first occurrence and takes the value of its last.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        let mut unique: Vec<Attribute> = Vec::with_capacity(attributes.len());
        for attr in attributes {
            if let Some(existing) = unique.iter_mut().find(|a| a.name == attr.name) {
                existing.value = attr.value;
            } else {
                unique.push(attr);
            }
        }
        Self {
            name: name.into(),
            attributes: unique,
        }
    }

    /// Tag name exactly as it appeared in the source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in source order, one entry per name.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// An attribute on an element.
///
/// The value is optional: a key may be present with no value stored for it,
/// which is not the same as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, matched case-sensitively.
    pub name: String,
    /// The attribute value, or `None` if the key carries no value.
    pub value: Option<String>,
}

impl Attribute {
    /// Creates an attribute with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates an attribute whose key is present but has no value.
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}
