//! Generic tree values.
//!
//! A [`Value`] is what the front end hands to the typed-node constructors.
//! It is a tagged variant over the five node kinds plus [`Collection`], so
//! narrowing to a concrete kind is an exhaustive match rather than a
//! runtime type check.

use std::fmt;

use crate::ast::{Attribute, Identifier, NodeDefinition, NodeKind, Schema, TypeReference};
use crate::error::{ConstructError, Result};

/// Untyped node produced by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Identifier(Identifier),
    TypeReference(TypeReference),
    Attribute(Attribute),
    NodeDefinition(NodeDefinition),
    Schema(Schema),
    Collection(Collection),
}

/// Kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Identifier,
    TypeReference,
    Attribute,
    NodeDefinition,
    Schema,
    Collection,
}

impl ValueKind {
    /// Get the kind name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Identifier => "Identifier",
            ValueKind::TypeReference => "TypeReference",
            ValueKind::Attribute => "Attribute",
            ValueKind::NodeDefinition => "NodeDefinition",
            ValueKind::Schema => "Schema",
            ValueKind::Collection => "Collection",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<NodeKind> for ValueKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Identifier => ValueKind::Identifier,
            NodeKind::TypeReference => ValueKind::TypeReference,
            NodeKind::Attribute => ValueKind::Attribute,
            NodeKind::NodeDefinition => ValueKind::NodeDefinition,
            NodeKind::Schema => ValueKind::Schema,
        }
    }
}

impl Value {
    /// Get the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Identifier(_) => ValueKind::Identifier,
            Value::TypeReference(_) => ValueKind::TypeReference,
            Value::Attribute(_) => ValueKind::Attribute,
            Value::NodeDefinition(_) => ValueKind::NodeDefinition,
            Value::Schema(_) => ValueKind::Schema,
            Value::Collection(_) => ValueKind::Collection,
        }
    }

    /// Narrow this value to `T`, consuming it.
    ///
    /// `node` and `field` name the slot being filled so the error can point
    /// at it.
    pub fn downcast<T: Downcast>(self, node: NodeKind, field: &'static str) -> Result<T> {
        let actual = self.kind();
        T::from_value(self).map_err(|_| {
            tracing::debug!(
                node = %node,
                field,
                expected = %T::KIND,
                actual = %actual,
                "rejected generic value"
            );
            ConstructError::mismatch(node, field, T::KIND, actual)
        })
    }

    /// Narrow this value to a collection of `T`, preserving element order.
    pub fn downcast_sequence<T: Downcast>(
        self,
        node: NodeKind,
        field: &'static str,
    ) -> Result<Vec<T>> {
        let items: Collection = self.downcast(node, field)?;
        items
            .into_iter()
            .enumerate()
            .map(|(position, item)| item.downcast(node, field).map_err(|e| e.at_index(position)))
            .collect()
    }
}

/// Conversion from a [`Value`] into one concrete alternative.
pub trait Downcast: Sized {
    /// Kind this conversion accepts.
    const KIND: ValueKind;

    /// Take the matching alternative out of `value`, or hand it back.
    fn from_value(value: Value) -> std::result::Result<Self, Value>;
}

macro_rules! value_variant {
    ($ty:ident) => {
        impl Downcast for $ty {
            const KIND: ValueKind = ValueKind::$ty;

            fn from_value(value: Value) -> std::result::Result<Self, Value> {
                match value {
                    Value::$ty(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }

        impl From<$ty> for Value {
            fn from(inner: $ty) -> Self {
                Value::$ty(inner)
            }
        }
    };
}

value_variant!(Identifier);
value_variant!(TypeReference);
value_variant!(Attribute);
value_variant!(NodeDefinition);
value_variant!(Schema);
value_variant!(Collection);

/// Ordered, append-only sequence of values.
///
/// Carries "list of X" from the front end. It performs no validation; the
/// constructor that consumes it checks every element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<Value>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value at the end.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Iterate over the values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
