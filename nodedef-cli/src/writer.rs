//! Output routing for rendered text.
//!
//! Rendered text goes to a file when an output directory is configured and
//! to the console sink otherwise. A dry run shows the text on the console
//! and reports the file it would have replaced.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CliResult, WriteError};
use crate::pipeline::Rendered;

/// Where rendered text ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Written to the console sink.
    Printed { bytes: usize },
    /// Written to `path`.
    Written { path: PathBuf, bytes: usize },
    /// Dry run: shown on the console instead of written to `path`.
    Previewed { path: PathBuf, bytes: usize },
}

impl Outcome {
    /// Size of the rendered text.
    pub fn bytes(&self) -> usize {
        match self {
            Outcome::Printed { bytes }
            | Outcome::Written { bytes, .. }
            | Outcome::Previewed { bytes, .. } => *bytes,
        }
    }
}

/// Sends rendered text to a file or to a console sink.
#[derive(Debug)]
pub struct OutputWriter<W> {
    console: W,
    dry_run: bool,
}

impl<W: Write> OutputWriter<W> {
    /// Create a writer whose console output goes to `console`.
    pub fn new(console: W, dry_run: bool) -> Self {
        Self { console, dry_run }
    }

    /// Consume the writer and return the console sink.
    pub fn into_inner(self) -> W {
        self.console
    }

    /// Emit `rendered` to `target`, or to the console when there is none.
    pub fn emit(&mut self, rendered: &Rendered, target: Option<&Path>) -> CliResult<Outcome> {
        let bytes = rendered.content.len();

        let Some(path) = target else {
            self.print(&rendered.content)?;
            return Ok(Outcome::Printed { bytes });
        };

        if self.dry_run {
            self.print(&rendered.content)?;
            return Ok(Outcome::Previewed {
                path: path.to_path_buf(),
                bytes,
            });
        }

        ensure_parent(path)?;
        std::fs::write(path, &rendered.content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::info!(renderer = rendered.renderer, path = %path.display(), bytes, "wrote output");
        Ok(Outcome::Written {
            path: path.to_path_buf(),
            bytes,
        })
    }

    fn print(&mut self, content: &str) -> CliResult<()> {
        self.console.write_all(content.as_bytes())?;
        self.console.flush()?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<(), WriteError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
