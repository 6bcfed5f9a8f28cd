//! # nodedef-cli
//!
//! CLI library for rendering node-definition schemas.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`input`] - JSON input documents and lowering into typed trees
//! - [`pipeline`] - Renderer selection and rendering
//! - [`writer`] - Console or file output with dry-run support
//! - [`logging`] - Diagnostic logging setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use input::{load_schema, SchemaDocument};
pub use pipeline::{render, Rendered};
pub use writer::{Outcome, OutputWriter};
