use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
    template::assets::BUNDLED_TEMPLATES,
};
use minijinja::{AutoEscape, Environment};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with no templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Generated sources are JavaScript and JSON; nothing may be escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Creates a renderer preloaded with every template shipped with appgen.
    pub fn with_bundled_templates() -> Result<Self> {
        let mut renderer = Self::new();
        for (name, source) in BUNDLED_TEMPLATES {
            renderer.add_template(name, source)?;
        }
        Ok(renderer)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        // Normalize the template name for cross-platform compatibility
        let normalized_name = name.replace('\\', "/");
        Ok(self.env.add_template_owned(normalized_name, template.to_string())?)
    }

    fn render_template(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let template = self.env.get_template(name).map_err(|err| match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => Error::TemplateNotFound(name.to_string()),
            _ => Error::MinijinjaError(err),
        })?;
        Ok(template.render(context)?)
    }
}
