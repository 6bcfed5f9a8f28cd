//! Diagnostic pretty-printer.
//!
//! Nodes open with `(Kind field=` and close with `)`. A node's own body
//! stays on one line; sequence contents are indented one level, one element
//! per line, between `[` and `]`.
//!
//! ```text
//! (Schema schema=[
//!   (NodeDefinition nodes=(Identifier name=(id="Point"))[
//!     (Attribute attributes=(Identifier name=(id="x"))(TypeReference type=(Identifier id=(id="int"))(collection="false")))
//!   ])
//! ])
//! ```

use std::io::{self, Write};

use super::{IndentStyle, Renderer, ROOT_FIELD};
use crate::ast::{NodeKind, Schema};
use crate::visit::{Traverse, Visitor};

/// Pretty-printing visitor writing into `W`.
#[derive(Debug)]
pub struct PrettyPrinter<W> {
    out: W,
    indent: IndentStyle,
    depth: usize,
    /// One entry per open scope: whether its contents go on indented lines.
    scopes: Vec<bool>,
}

impl<W: Write> PrettyPrinter<W> {
    /// Create a printer with two-space indentation.
    pub fn new(out: W) -> Self {
        Self::with_indent(out, IndentStyle::default())
    }

    /// Create a printer with the given indentation unit.
    pub fn with_indent(out: W, indent: IndentStyle) -> Self {
        Self {
            out,
            indent,
            depth: 0,
            scopes: vec![true],
        }
    }

    /// Consume the printer and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn indents(&self) -> bool {
        self.scopes.last().copied().unwrap_or(true)
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(self.indent.as_str().as_bytes())?;
        }
        Ok(())
    }

    fn open(&mut self, kind: NodeKind, field: &str) -> io::Result<()> {
        if self.indents() {
            self.write_indent()?;
        }
        write!(self.out, "({} {}=", kind, field)?;
        self.scopes.push(false);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.scopes.pop();
        self.out.write_all(b")")?;
        if self.indents() {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<W: Write> Visitor for PrettyPrinter<W> {
    type Error = io::Error;

    fn enter_identifier(&mut self, field: &str) -> io::Result<()> {
        self.open(NodeKind::Identifier, field)
    }

    fn leave_identifier(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_type_reference(&mut self, field: &str) -> io::Result<()> {
        self.open(NodeKind::TypeReference, field)
    }

    fn leave_type_reference(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_attribute(&mut self, field: &str) -> io::Result<()> {
        self.open(NodeKind::Attribute, field)
    }

    fn leave_attribute(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_node_definition(&mut self, field: &str) -> io::Result<()> {
        self.open(NodeKind::NodeDefinition, field)
    }

    fn leave_node_definition(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_schema(&mut self, field: &str) -> io::Result<()> {
        self.open(NodeKind::Schema, field)
    }

    fn leave_schema(&mut self, _field: &str) -> io::Result<()> {
        self.close()
    }

    fn enter_collection(&mut self, _field: &str, _len: usize) -> io::Result<()> {
        self.out.write_all(b"[\n")?;
        self.scopes.push(true);
        self.depth += 1;
        Ok(())
    }

    fn leave_collection(&mut self, _field: &str) -> io::Result<()> {
        self.scopes.pop();
        self.depth = self.depth.saturating_sub(1);
        self.write_indent()?;
        self.out.write_all(b"]")
    }

    fn scalar_text(&mut self, field: &str, value: &str) -> io::Result<()> {
        write!(self.out, "({}={:?})", field, value)
    }

    fn scalar_int(&mut self, field: &str, value: i64) -> io::Result<()> {
        write!(self.out, "({}=\"{}\")", field, value)
    }

    fn scalar_bool(&mut self, field: &str, value: bool) -> io::Result<()> {
        write!(self.out, "({}=\"{}\")", field, value)
    }
}

/// [`Renderer`] wrapper around [`PrettyPrinter`].
#[derive(Debug, Clone, Default)]
pub struct PrettyRenderer {
    indent: IndentStyle,
}

impl PrettyRenderer {
    /// Create a renderer with two-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }
}

impl Renderer for PrettyRenderer {
    fn id(&self) -> &'static str {
        "pretty"
    }

    fn name(&self) -> &'static str {
        "Diagnostic Pretty-Printer"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    #[tracing::instrument(skip_all, fields(renderer = "pretty", nodes = schema.nodes().len()))]
    fn render(&self, schema: &Schema, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!("rendering schema");
        let mut printer = PrettyPrinter::with_indent(out, self.indent);
        schema.traverse(ROOT_FIELD, &mut printer)
    }
}
