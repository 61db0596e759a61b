//! Template rendering
//!
//! - `interface`: the renderer abstraction used by file writers
//! - `minijinja`: MiniJinja implementation loaded with the bundled templates

pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
