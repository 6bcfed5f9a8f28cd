//! Error types for tree construction.
//!
//! Construction is the only place untyped input is rejected. Once a typed
//! tree exists, traversal and rendering cannot fail except through the
//! output sink.

use thiserror::Error;

use crate::ast::NodeKind;
use crate::value::ValueKind;

/// Result type alias for node construction.
pub type Result<T> = std::result::Result<T, ConstructError>;

/// Error raised while building a typed node from generic values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// A generic value had a different kind than the field requires.
    #[error("type mismatch for {}: expected {expected}, found {actual}", field_path(.node, .field, .index))]
    TypeMismatch {
        /// Node kind being constructed.
        node: NodeKind,
        /// Field of `node` that received the value.
        field: &'static str,
        /// Position inside a sequence field, if the value was an element.
        index: Option<usize>,
        /// Kind the field requires.
        expected: ValueKind,
        /// Kind that was supplied.
        actual: ValueKind,
    },

    /// An identifier was built from empty text.
    #[error("empty name for {}", field_path(.node, .field, &None))]
    EmptyName {
        /// Node kind being constructed.
        node: NodeKind,
        /// Field holding the name text.
        field: &'static str,
    },
}

impl ConstructError {
    /// Create a type mismatch error for a plain field.
    pub fn mismatch(
        node: NodeKind,
        field: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    ) -> Self {
        Self::TypeMismatch {
            node,
            field,
            index: None,
            expected,
            actual,
        }
    }

    /// Attach a sequence position to a type mismatch.
    pub fn at_index(self, position: usize) -> Self {
        match self {
            Self::TypeMismatch {
                node,
                field,
                expected,
                actual,
                ..
            } => Self::TypeMismatch {
                node,
                field,
                index: Some(position),
                expected,
                actual,
            },
            other => other,
        }
    }

    /// Report an empty name against the slot that holds the identifier.
    ///
    /// `Identifier::new` only knows it is an `Identifier.id`; a caller
    /// building a name for a parent node re-tags the error with the
    /// parent's field. Type mismatches already name their slot and are
    /// returned unchanged.
    pub fn in_slot(self, node: NodeKind, field: &'static str) -> Self {
        match self {
            Self::EmptyName { .. } => Self::EmptyName { node, field },
            other => other,
        }
    }

    /// Node kind whose construction failed.
    pub fn node(&self) -> NodeKind {
        match self {
            Self::TypeMismatch { node, .. } | Self::EmptyName { node, .. } => *node,
        }
    }

    /// Field whose value was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TypeMismatch { field, .. } | Self::EmptyName { field, .. } => field,
        }
    }
}

/// Format `Node.field[index]` for error messages.
fn field_path(node: &NodeKind, field: &str, index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("{}.{}[{}]", node, field, index),
        None => format!("{}.{}", node, field),
    }
}
