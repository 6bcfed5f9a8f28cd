//! TypeScript class declarations for the node kinds.
//!
//! Output is derived from [`NodeKind::fields`], not from any particular
//! tree, so it is identical for every schema instance.

use std::io::{self, Write};

use super::{IndentStyle, Renderer};
use crate::ast::{FieldShape, FieldSpec, NodeKind, Schema};

/// Emits one TypeScript class per node kind.
#[derive(Debug, Clone)]
pub struct DeclarationEmitter {
    indent: IndentStyle,
    export: bool,
    readonly: bool,
}

impl Default for DeclarationEmitter {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            export: true,
            readonly: true,
        }
    }
}

impl DeclarationEmitter {
    /// Create an emitter with exported, readonly declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether classes are exported.
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    /// Set whether constructor parameters are readonly.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Write declarations for every kind, leaves first, separated by a
    /// blank line.
    pub fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            if i > 0 {
                out.write_all(b"\n")?;
            }
            self.emit_kind(*kind, out)?;
        }
        Ok(())
    }

    /// Write the declaration for a single kind.
    pub fn emit_kind(&self, kind: NodeKind, out: &mut dyn Write) -> io::Result<()> {
        let parameters = kind
            .fields()
            .iter()
            .map(|field| self.parameter(field))
            .collect::<Vec<_>>()
            .join(", ");

        if self.export {
            out.write_all(b"export ")?;
        }
        writeln!(out, "class {} {{", kind)?;
        writeln!(out, "{}constructor({}) {{}}", self.indent.as_str(), parameters)?;
        writeln!(out, "}}")
    }

    fn parameter(&self, field: &FieldSpec) -> String {
        let modifier = if self.readonly {
            "public readonly"
        } else {
            "public"
        };
        format!("{} {}: {}", modifier, field.name, type_name(field.shape))
    }
}

/// TypeScript type for a field shape.
fn type_name(shape: FieldShape) -> String {
    match shape {
        FieldShape::Text => "string".to_string(),
        FieldShape::Bool => "boolean".to_string(),
        FieldShape::Node(kind) => kind.name().to_string(),
        FieldShape::Sequence(kind) => format!("{}[]", kind),
    }
}

/// [`Renderer`] wrapper around [`DeclarationEmitter`].
///
/// The schema handed to [`Renderer::render`] is ignored.
#[derive(Debug, Clone, Default)]
pub struct DeclarationRenderer {
    emitter: DeclarationEmitter,
}

impl DeclarationRenderer {
    /// Create a renderer with default declaration options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer around a configured emitter.
    pub fn with_emitter(emitter: DeclarationEmitter) -> Self {
        Self { emitter }
    }
}

impl Renderer for DeclarationRenderer {
    fn id(&self) -> &'static str {
        "declarations"
    }

    fn name(&self) -> &'static str {
        "TypeScript Class Declarations"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    #[tracing::instrument(skip_all, fields(renderer = "declarations"))]
    fn render(&self, _schema: &Schema, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(kinds = NodeKind::ALL.len(), "rendering declarations");
        self.emitter.emit(out)
    }
}
