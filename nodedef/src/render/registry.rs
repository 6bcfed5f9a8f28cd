//! Renderer lookup by id.

use super::{
    DeclarationEmitter, DeclarationRenderer, InstanceRenderer, PrettyRenderer, RenderOptions,
    Renderer,
};

/// Holds renderers in registration order and finds them by id.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: Vec<Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in renderers configured from
    /// `options`.
    pub fn builtin(options: &RenderOptions) -> Self {
        let mut instance = InstanceRenderer::new().with_export(options.export);
        if let Some(binding) = &options.binding {
            instance = instance.with_binding(binding.clone());
        }

        let declarations = DeclarationEmitter::new()
            .with_indent(options.indent)
            .with_export(options.export)
            .with_readonly(options.readonly);

        let mut registry = Self::new();
        registry.register(PrettyRenderer::new().with_indent(options.indent));
        registry.register(instance);
        registry.register(DeclarationRenderer::with_emitter(declarations));
        registry
    }

    /// Add a renderer. A later renderer with the same id replaces the
    /// earlier one.
    pub fn register(&mut self, renderer: impl Renderer + 'static) {
        let id = renderer.id();
        self.renderers.retain(|r| r.id() != id);
        self.renderers.push(Box::new(renderer));
    }

    /// Find a renderer by id.
    pub fn get(&self, id: &str) -> Option<&dyn Renderer> {
        self.renderers
            .iter()
            .find(|r| r.id() == id)
            .map(|r| &**r)
    }

    /// Iterate over the registered renderers.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Renderer> + '_ {
        self.renderers.iter().map(|r| &**r)
    }

    /// Ids of the registered renderers, in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.renderers.iter().map(|r| r.id()).collect()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("renderers", &self.ids())
            .finish()
    }
}
