use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Adds a template to the renderer's template collection.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    fn add_template(&mut self, name: &str, template: &str) -> Result<()>;

    /// Renders a registered template with the given props.
    ///
    /// # Arguments
    /// * `name` - Template identifier, e.g. `form/config.js`
    /// * `context` - Flat key-value props
    fn render_template(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
