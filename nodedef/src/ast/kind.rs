//! Node kind descriptors.
//!
//! The kind set is closed. Each kind carries a static field table listing
//! its fields in traversal order, which is what schema-level renderers
//! (class declarations) are derived from.

use std::fmt;

/// One of the five typed node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Identifier,
    TypeReference,
    Attribute,
    NodeDefinition,
    Schema,
}

/// Shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Text scalar
    Text,
    /// Boolean scalar
    Bool,
    /// Exactly one child of the given kind
    Node(NodeKind),
    /// Ordered sequence of children of the given kind
    Sequence(NodeKind),
}

/// A named field of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as passed to traversal hooks
    pub name: &'static str,
    /// Field shape
    pub shape: FieldShape,
}

const fn field(name: &'static str, shape: FieldShape) -> FieldSpec {
    FieldSpec { name, shape }
}

const IDENTIFIER_FIELDS: &[FieldSpec] = &[field("id", FieldShape::Text)];

const TYPE_REFERENCE_FIELDS: &[FieldSpec] = &[
    field("id", FieldShape::Node(NodeKind::Identifier)),
    field("collection", FieldShape::Bool),
];

const ATTRIBUTE_FIELDS: &[FieldSpec] = &[
    field("name", FieldShape::Node(NodeKind::Identifier)),
    field("type", FieldShape::Node(NodeKind::TypeReference)),
];

const NODE_DEFINITION_FIELDS: &[FieldSpec] = &[
    field("name", FieldShape::Node(NodeKind::Identifier)),
    field("attributes", FieldShape::Sequence(NodeKind::Attribute)),
];

const SCHEMA_FIELDS: &[FieldSpec] = &[field(
    "nodes",
    FieldShape::Sequence(NodeKind::NodeDefinition),
)];

impl NodeKind {
    /// All kinds, leaves first.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Identifier,
        NodeKind::TypeReference,
        NodeKind::Attribute,
        NodeKind::NodeDefinition,
        NodeKind::Schema,
    ];

    /// Get the kind name.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Identifier => "Identifier",
            NodeKind::TypeReference => "TypeReference",
            NodeKind::Attribute => "Attribute",
            NodeKind::NodeDefinition => "NodeDefinition",
            NodeKind::Schema => "Schema",
        }
    }

    /// Fields of this kind, in traversal order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            NodeKind::Identifier => IDENTIFIER_FIELDS,
            NodeKind::TypeReference => TYPE_REFERENCE_FIELDS,
            NodeKind::Attribute => ATTRIBUTE_FIELDS,
            NodeKind::NodeDefinition => NODE_DEFINITION_FIELDS,
            NodeKind::Schema => SCHEMA_FIELDS,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
