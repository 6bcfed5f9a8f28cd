//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `nodedef.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use nodedef::render::{IndentStyle, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "nodedef.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Renderer selection and formatting.
    pub render: RenderConfig,

    /// Class declaration options.
    pub declarations: DeclarationsConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory. Output goes to stdout when unset.
    pub dir: Option<PathBuf>,

    /// Output file stem; the renderer supplies the extension.
    pub file: String,
}

/// Renderer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Renderer id (`pretty`, `instance`, `declarations`).
    pub renderer: String,

    /// Indentation unit.
    pub indent: IndentConfig,

    /// Constant name the instance expression is bound to.
    pub binding: Option<String>,
}

/// Indentation unit as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentConfig {
    #[default]
    Spaces2,
    Spaces4,
    Tabs,
}

/// Class declaration configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeclarationsConfig {
    /// Prefix declarations with `export`.
    pub export: bool,

    /// Declare constructor parameters `readonly`.
    pub readonly: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file: "nodes".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            renderer: "pretty".to_string(),
            indent: IndentConfig::default(),
            binding: None,
        }
    }
}

impl Default for DeclarationsConfig {
    fn default() -> Self {
        Self {
            export: true,
            readonly: true,
        }
    }
}

impl From<IndentConfig> for IndentStyle {
    fn from(indent: IndentConfig) -> Self {
        match indent {
            IndentConfig::Spaces2 => IndentStyle::Spaces2,
            IndentConfig::Spaces4 => IndentStyle::Spaces4,
            IndentConfig::Tabs => IndentStyle::Tabs,
        }
    }
}

impl std::str::FromStr for IndentConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spaces2" => Ok(IndentConfig::Spaces2),
            "spaces4" => Ok(IndentConfig::Spaces4),
            "tabs" => Ok(IndentConfig::Tabs),
            other => Err(ConfigError::invalid_value(
                "render.indent",
                format!("expected spaces2, spaces4 or tabs, got '{}'", other),
            )),
        }
    }
}

impl Config {
    /// Renderer options derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.render.indent.into(),
            export: self.declarations.export,
            readonly: self.declarations.readonly,
            binding: self.render.binding.clone(),
        }
    }

    /// Output path for a renderer with the given file extension, if an
    /// output directory is configured.
    pub fn output_path(&self, extension: &str) -> Option<PathBuf> {
        self.output
            .dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.{}", self.output.file, extension)))
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref out_dir) = args.out_dir {
            config.output.dir = Some(out_dir.clone());
        }

        if let Some(ref file) = args.file {
            config.output.file = file.clone();
        }

        if let Some(ref renderer) = args.renderer {
            config.render.renderer = renderer.clone();
        }

        if let Some(indent) = args.indent {
            config.render.indent = indent;
        }

        if let Some(ref binding) = args.binding {
            config.render.binding = Some(binding.clone());
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# nodedef configuration file

[output]
# Output directory; omit to print to stdout
# dir = "./generated"

# Output file name without extension (the renderer picks the extension)
file = "nodes"

[render]
# Renderer: pretty, instance, declarations
renderer = "pretty"

# Indentation: spaces2, spaces4, tabs
indent = "spaces2"

# Bind the instance expression to a constant (instance renderer only)
# binding = "schema"

[declarations]
# Prefix generated classes and bindings with `export`
export = true

# Declare constructor parameters as `public readonly`
readonly = true
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub out_dir: Option<PathBuf>,

    /// Output file stem override.
    pub file: Option<String>,

    /// Renderer override.
    pub renderer: Option<String>,

    /// Indentation override.
    pub indent: Option<IndentConfig>,

    /// Binding override.
    pub binding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.dir, None);
        assert_eq!(config.output.file, "nodes");
        assert_eq!(config.render.renderer, "pretty");
        assert_eq!(config.render.indent, IndentConfig::Spaces2);
        assert!(config.declarations.export);
        assert!(config.declarations.readonly);
        assert_eq!(config.output_path("ts"), None);
    }

    #[test]
    fn test_default_config_content_parses_to_defaults() {
        let config: Config = toml::from_str(ConfigManager::default_config_content()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.output.file, defaults.output.file);
        assert_eq!(config.output.dir, defaults.output.dir);
        assert_eq!(config.render.renderer, defaults.render.renderer);
        assert_eq!(config.render.indent, defaults.render.indent);
        assert_eq!(config.render.binding, defaults.render.binding);
    }

    #[test]
    fn test_merge_cli_args_output() {
        let config = Config::default();
        let args = CliArgs {
            out_dir: Some(PathBuf::from("./custom")),
            renderer: Some("instance".to_string()),
            ..Default::default()
        };

        let merged = ConfigManager::merge_cli_args(config, &args);
        assert_eq!(merged.output.dir, Some(PathBuf::from("./custom")));
        assert_eq!(merged.render.renderer, "instance");
        assert_eq!(
            merged.output_path("ts"),
            Some(PathBuf::from("./custom").join("nodes.ts"))
        );
    }

    #[test]
    fn test_merge_cli_args_preserves_unset() {
        let config = Config::default();
        let args = CliArgs::default();

        let merged = ConfigManager::merge_cli_args(config.clone(), &args);
        assert_eq!(merged.output.dir, config.output.dir);
        assert_eq!(merged.output.file, config.output.file);
        assert_eq!(merged.render.renderer, config.render.renderer);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[output]
dir = "./out"
file = "tree"

[render]
renderer = "instance"
indent = "tabs"
binding = "schema"

[declarations]
export = false
readonly = false
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.dir, Some(PathBuf::from("./out")));
        assert_eq!(config.output.file, "tree");
        assert_eq!(config.render.renderer, "instance");
        assert_eq!(config.render.indent, IndentConfig::Tabs);
        assert_eq!(config.render.binding.as_deref(), Some("schema"));

        let options = config.render_options();
        assert_eq!(options.indent, IndentStyle::Tabs);
        assert!(!options.export);
        assert!(!options.readonly);
    }

    #[test]
    fn test_indent_from_str() {
        assert_eq!("spaces4".parse::<IndentConfig>().unwrap(), IndentConfig::Spaces4);
        assert!("two".parse::<IndentConfig>().is_err());
    }
}
