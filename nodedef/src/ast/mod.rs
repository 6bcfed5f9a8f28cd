//! Typed node kinds.
//!
//! - [`NodeKind`] - the closed kind set and its static field tables
//! - [`Identifier`], [`TypeReference`], [`Attribute`], [`NodeDefinition`],
//!   [`Schema`] - the typed nodes, built through validating constructors

pub mod kind;
pub mod node;

pub use kind::{FieldShape, FieldSpec, NodeKind};
pub use node::{Attribute, Identifier, NodeDefinition, Schema, TypeReference};
