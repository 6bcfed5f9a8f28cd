//! Renderers.
//!
//! A renderer turns a [`Schema`] into text. Each call to
//! [`Renderer::render`] builds fresh formatting state, so one renderer
//! value can be used for many trees but a single walk never shares state
//! with another.
//!
//! # Components
//!
//! - [`PrettyPrinter`] / [`PrettyRenderer`] - indented diagnostic dump
//! - [`InstanceEmitter`] / [`InstanceRenderer`] - TypeScript constructor-call expression
//! - [`DeclarationEmitter`] / [`DeclarationRenderer`] - TypeScript class per node kind
//! - [`RendererRegistry`] - lookup by id

use std::io::{self, Write};

use crate::ast::Schema;

pub mod declaration;
pub mod instance;
pub mod pretty;
pub mod registry;

pub use declaration::{DeclarationEmitter, DeclarationRenderer};
pub use instance::{InstanceEmitter, InstanceRenderer};
pub use pretty::{PrettyPrinter, PrettyRenderer};
pub use registry::RendererRegistry;

/// Field name under which the root schema is walked.
pub const ROOT_FIELD: &str = "schema";

/// Turns a schema tree into text.
pub trait Renderer: Send + Sync {
    /// Returns the unique identifier for this renderer.
    ///
    /// Short and lowercase (e.g., "pretty", "instance").
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this renderer.
    fn name(&self) -> &'static str;

    /// Returns the file extension for rendered output.
    fn file_extension(&self) -> &'static str;

    /// Render `schema` into `out`.
    ///
    /// Write failures from `out` are returned unchanged.
    fn render(&self, schema: &Schema, out: &mut dyn Write) -> io::Result<()>;

    /// Render `schema` into a string.
    fn render_to_string(&self, schema: &Schema) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render(schema, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Indentation style for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// Use spaces for indentation (default: 2 spaces)
    #[default]
    Spaces2,

    /// Use 4 spaces for indentation
    Spaces4,

    /// Use tabs for indentation
    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

/// Options shared by the built-in renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Indentation unit
    pub indent: IndentStyle,

    /// Prefix declarations with `export`
    pub export: bool,

    /// Declare constructor parameters `readonly`
    pub readonly: bool,

    /// Bind the instance expression to a named constant
    pub binding: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            export: true,
            readonly: true,
            binding: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_depth() {
        assert_eq!(IndentStyle::Spaces2.indent(0), "");
        assert_eq!(IndentStyle::Spaces2.indent(2), "    ");
        assert_eq!(IndentStyle::Spaces4.indent(1), "    ");
        assert_eq!(IndentStyle::Tabs.indent(3), "\t\t\t");
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.indent, IndentStyle::Spaces2);
        assert!(options.export);
        assert!(options.readonly);
        assert!(options.binding.is_none());
    }
}
