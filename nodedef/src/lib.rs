//! # nodedef
//!
//! Typed node-definition trees and a traversal protocol for rendering them.
//!
//! A schema describes node types: each [`NodeDefinition`](ast::NodeDefinition)
//! has a name and an ordered list of typed attributes. Trees are built from
//! untyped [`Value`](value::Value)s handed over by a front end, validated once
//! at construction, and then walked by any number of renderers.
//!
//! ## Overview
//!
//! ```text
//! front end ──Value──▶ constructors ──Schema──▶ traverse ──hooks──▶ Visitor/Renderer ──▶ text
//! ```
//!
//! - [`value`] - generic tree values and the [`Collection`](value::Collection) carrier
//! - [`ast`] - the five typed node kinds and their field tables
//! - [`visit`] - the [`Visitor`](visit::Visitor) hooks and [`Traverse`](visit::Traverse)
//! - [`render`] - pretty-printer, TypeScript instance emitter, class declarations
//! - [`error`] - construction errors
//!
//! ## Quick Start
//!
//! ```rust
//! use nodedef::ast::{Attribute, Identifier, NodeDefinition, Schema, TypeReference};
//! use nodedef::render::{InstanceRenderer, Renderer};
//! use nodedef::value::{Collection, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ty = TypeReference::new(Identifier::new("int")?.into(), false)?;
//! let attribute = Attribute::new(Identifier::new("x")?.into(), ty.into())?;
//!
//! let mut attributes = Collection::new();
//! attributes.push(attribute);
//! let node = NodeDefinition::new(Identifier::new("Point")?.into(), attributes.into())?;
//!
//! let schema = Schema::new(Value::from(Collection::from_iter([Value::from(node)])))?;
//! let text = InstanceRenderer::new().render_to_string(&schema)?;
//! assert!(text.starts_with("new Schema([new NodeDefinition(new Identifier(\"Point\")"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Construction fails with [`ConstructError`](error::ConstructError) when a
//! value has the wrong kind for its field or an identifier is empty. Nothing
//! is returned on failure. Rendering only fails if the output sink does.

pub mod ast;
pub mod error;
pub mod render;
pub mod value;
pub mod visit;

// Re-export main types for convenience
pub use ast::{Attribute, Identifier, NodeDefinition, NodeKind, Schema, TypeReference};
pub use error::{ConstructError, Result};
pub use render::{Renderer, RendererRegistry};
pub use value::{Collection, Value, ValueKind};
pub use visit::{Traverse, Visitor};
