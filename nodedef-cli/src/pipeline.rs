//! Rendering pipeline: schema plus configuration in, text out.

use nodedef::{RendererRegistry, Schema};

use crate::config::Config;
use crate::error::{CliResult, ConfigError};

/// Text produced by one renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Id of the renderer that produced the text.
    pub renderer: &'static str,
    /// File extension the renderer suggests.
    pub extension: &'static str,
    /// The rendered text.
    pub content: String,
}

/// Render `schema` with the renderer named in `config`.
pub fn render(schema: &Schema, config: &Config) -> CliResult<Rendered> {
    let registry = RendererRegistry::builtin(&config.render_options());
    let id = config.render.renderer.as_str();

    let renderer = registry.get(id).ok_or_else(|| {
        ConfigError::invalid_value(
            "render.renderer",
            format!(
                "unknown renderer '{}', expected one of: {}",
                id,
                registry.ids().join(", ")
            ),
        )
    })?;

    tracing::info!(renderer = id, nodes = schema.nodes().len(), "rendering");
    let content = renderer.render_to_string(schema)?;

    Ok(Rendered {
        renderer: renderer.id(),
        extension: renderer.file_extension(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_render_empty_schema_with_default_config() {
        let rendered = render(&Schema::default(), &Config::default()).unwrap();
        assert_eq!(rendered.renderer, "pretty");
        assert_eq!(rendered.content, "(Schema schema=[\n])\n");
    }

    #[test]
    fn test_render_instance() {
        let mut config = Config::default();
        config.render.renderer = "instance".to_string();

        let rendered = render(&Schema::default(), &config).unwrap();
        assert_eq!(rendered.extension, "ts");
        assert_eq!(rendered.content, "new Schema([])\n");
    }

    #[test]
    fn test_unknown_renderer() {
        let mut config = Config::default();
        config.render.renderer = "yaml".to_string();

        let err = render(&Schema::default(), &config).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "render.renderer"
        ));
        assert!(err.to_string().contains("pretty, instance, declarations"));
    }
}
