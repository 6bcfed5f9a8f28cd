//! Typed node definitions.
//!
//! Every composite node has two constructors: `new`, which validates and
//! consumes generic [`Value`]s, and `from_parts`, which composes already
//! typed children. Nodes are never mutated after construction.

use std::fmt;

use super::kind::NodeKind;
use crate::error::{ConstructError, Result};
use crate::value::Value;

/// A non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Create an identifier from text.
    ///
    /// Fails with [`ConstructError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            tracing::debug!("rejected empty identifier");
            return Err(ConstructError::EmptyName {
                node: NodeKind::Identifier,
                field: "id",
            });
        }
        tracing::trace!(name = %name, "constructed Identifier");
        Ok(Self { name })
    }

    /// The name text.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reference to a named type, optionally as a collection of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    id: Identifier,
    collection: bool,
}

impl TypeReference {
    /// Create a type reference from a generic identifier value.
    pub fn new(id: Value, collection: bool) -> Result<Self> {
        let id = id.downcast(NodeKind::TypeReference, "id")?;
        Ok(Self::from_parts(id, collection))
    }

    /// Create a type reference from a typed identifier.
    pub fn from_parts(id: Identifier, collection: bool) -> Self {
        tracing::trace!(id = %id.name, collection, "constructed TypeReference");
        Self { id, collection }
    }

    /// Name of the referenced type.
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Whether this references a collection of the type.
    pub fn is_collection(&self) -> bool {
        self.collection
    }
}

/// A named, typed attribute of a node definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: Identifier,
    ty: TypeReference,
}

impl Attribute {
    /// Create an attribute from generic name and type values.
    pub fn new(name: Value, ty: Value) -> Result<Self> {
        let name = name.downcast(NodeKind::Attribute, "name")?;
        let ty = ty.downcast(NodeKind::Attribute, "type")?;
        Ok(Self::from_parts(name, ty))
    }

    /// Create an attribute from typed children.
    pub fn from_parts(name: Identifier, ty: TypeReference) -> Self {
        tracing::trace!(name = %name.name, "constructed Attribute");
        Self { name, ty }
    }

    /// Attribute name.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Attribute type.
    pub fn ty(&self) -> &TypeReference {
        &self.ty
    }
}

/// A named node with an ordered attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDefinition {
    name: Identifier,
    attributes: Vec<Attribute>,
}

impl NodeDefinition {
    /// Create a node definition from a generic name and a generic
    /// collection of attributes.
    pub fn new(name: Value, attributes: Value) -> Result<Self> {
        let name = name.downcast(NodeKind::NodeDefinition, "name")?;
        let attributes = attributes.downcast_sequence(NodeKind::NodeDefinition, "attributes")?;
        Ok(Self::from_parts(name, attributes))
    }

    /// Create a node definition from typed children.
    pub fn from_parts(name: Identifier, attributes: Vec<Attribute>) -> Self {
        tracing::trace!(
            name = %name.name,
            attributes = attributes.len(),
            "constructed NodeDefinition"
        );
        Self { name, attributes }
    }

    /// Node name.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// Root of a node-definition tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    nodes: Vec<NodeDefinition>,
}

impl Schema {
    /// Create a schema from a generic collection of node definitions.
    pub fn new(nodes: Value) -> Result<Self> {
        let nodes = nodes.downcast_sequence(NodeKind::Schema, "nodes")?;
        Ok(Self::from_parts(nodes))
    }

    /// Create a schema from typed node definitions.
    pub fn from_parts(nodes: Vec<NodeDefinition>) -> Self {
        tracing::trace!(nodes = nodes.len(), "constructed Schema");
        Self { nodes }
    }

    /// Node definitions in declaration order.
    pub fn nodes(&self) -> &[NodeDefinition] {
        &self.nodes
    }

    /// Count every typed node in the tree, the schema included.
    pub fn node_count(&self) -> usize {
        // identifier + type reference + its identifier + attribute
        const PER_ATTRIBUTE: usize = 4;

        1 + self
            .nodes
            .iter()
            .map(|node| 2 + node.attributes.len() * PER_ATTRIBUTE)
            .sum::<usize>()
    }
}

// -----------------------------------------------------------------------------
// Compact display
// -----------------------------------------------------------------------------

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Id: {})", self.name)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Type: {} {})", self.id, self.collection)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Attribute: {} {})", self.name, self.ty)
    }
}

impl fmt::Display for NodeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Node: {} [", self.name)?;
        write_spaced(f, &self.attributes)?;
        write!(f, "])")
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Schema: [")?;
        write_spaced(f, &self.nodes)?;
        write!(f, "])")
    }
}

fn write_spaced<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
