//! TypeScript instance emitter.
//!
//! Renders a tree as one constructor-call expression whose arguments follow
//! traversal order:
//!
//! ```text
//! new Schema([new NodeDefinition(new Identifier("Point"), [new Attribute(new Identifier("x"), new TypeReference(new Identifier("int"), false))])])
//! ```
//!
//! The output is a single line, so the only formatting state is whether
//! the next token needs a leading comma.

use std::io::{self, Write};

use super::{Renderer, ROOT_FIELD};
use crate::ast::{NodeKind, Schema};
use crate::visit::{Traverse, Visitor};

/// Constructor-call emitting visitor writing into `W`.
#[derive(Debug)]
pub struct InstanceEmitter<W> {
    out: W,
    needs_comma: bool,
}

impl<W: Write> InstanceEmitter<W> {
    /// Create an emitter writing into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            needs_comma: false,
        }
    }

    /// Consume the emitter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn separate(&mut self) -> io::Result<()> {
        if self.needs_comma {
            self.out.write_all(b", ")?;
        }
        Ok(())
    }

    fn open(&mut self, kind: NodeKind) -> io::Result<()> {
        self.separate()?;
        write!(self.out, "new {}(", kind)?;
        self.needs_comma = false;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.out.write_all(b")")?;
        self.needs_comma = true;
        Ok(())
    }

    fn argument(&mut self, literal: impl std::fmt::Display) -> io::Result<()> {
        self.separate()?;
        write!(self.out, "{}", literal)?;
        self.needs_comma = true;
        Ok(())
    }
}

impl<W: Write> Visitor for InstanceEmitter<W> {
    type Error = io::Error;

    fn enter_identifier(&mut self, _field: &str) -> io::Result<()> {
        self.open(NodeKind::Identifier)
    }

    fn leave_identifier(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_type_reference(&mut self, _field: &str) -> io::Result<()> {
        self.open(NodeKind::TypeReference)
    }

    fn leave_type_reference(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_attribute(&mut self, _field: &str) -> io::Result<()> {
        self.open(NodeKind::Attribute)
    }

    fn leave_attribute(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_node_definition(&mut self, _field: &str) -> io::Result<()> {
        self.open(NodeKind::NodeDefinition)
    }

    fn leave_node_definition(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_schema(&mut self, _field: &str) -> io::Result<()> {
        self.open(NodeKind::Schema)
    }

    fn leave_schema(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_collection(&mut self, _field: &str, _len: usize) -> io::Result<()> {
        self.separate()?;
        self.out.write_all(b"[")?;
        self.needs_comma = false;
        Ok(())
    }

    fn leave_collection(&mut self, _field: &str) -> io::Result<()> {
        self.out.write_all(b"]")?;
        self.needs_comma = true;
        Ok(())
    }

    fn scalar_text(&mut self, _field: &str, value: &str) -> io::Result<()> {
        // JSON string literals are valid TypeScript string literals.
        let literal = serde_json::to_string(value).map_err(io::Error::from)?;
        self.argument(literal)
    }

    fn scalar_int(&mut self, _field: &str, value: i64) -> io::Result<()> {
        self.argument(value)
    }

    fn scalar_bool(&mut self, _field: &str, value: bool) -> io::Result<()> {
        self.argument(value)
    }
}

/// [`Renderer`] wrapper around [`InstanceEmitter`].
///
/// Without a binding the bare expression is written; with one it becomes
/// `const <binding> = <expression>;`.
#[derive(Debug, Clone, Default)]
pub struct InstanceRenderer {
    binding: Option<String>,
    export: bool,
}

impl InstanceRenderer {
    /// Create a renderer emitting the bare expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the expression to a named constant.
    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }

    /// Prefix the binding with `export`.
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }
}

impl Renderer for InstanceRenderer {
    fn id(&self) -> &'static str {
        "instance"
    }

    fn name(&self) -> &'static str {
        "TypeScript Instance Emitter"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    #[tracing::instrument(skip_all, fields(renderer = "instance", nodes = schema.nodes().len()))]
    fn render(&self, schema: &Schema, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(binding = ?self.binding, "rendering schema");
        if let Some(binding) = &self.binding {
            if self.export {
                out.write_all(b"export ")?;
            }
            write!(out, "const {} = ", binding)?;
        }

        let mut emitter = InstanceEmitter::new(&mut *out);
        schema.traverse(ROOT_FIELD, &mut emitter)?;

        if self.binding.is_some() {
            out.write_all(b";")?;
        }
        out.write_all(b"\n")
    }
}
