//! File-write primitives behind one interface.
//!
//! A run selects its writer once: [`DiskWriter`] performs the I/O,
//! [`DryRunWriter`] performs none. Recording the destination in the
//! tracked-files set happens in the generation context for both.

use crate::{
    error::{Error, Result},
    ioutils::{to_pretty_json, write_file},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    template::assets::raw_file,
};
use serde_json::Value;
use std::path::Path;

pub trait FileWriter {
    /// Renders `template` with `props` into `destination`.
    fn copy_template(&self, template: &str, destination: &Path, props: &Value) -> Result<()>;

    /// Copies a bundled file verbatim.
    fn copy(&self, template: &str, destination: &Path) -> Result<()>;

    fn write_json(&self, destination: &Path, value: &Value) -> Result<()>;

    fn write(&self, destination: &Path, contents: &str) -> Result<()>;

    fn is_dry_run(&self) -> bool;
}

pub struct DiskWriter {
    renderer: Box<dyn TemplateRenderer>,
}

impl DiskWriter {
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Writer backed by the bundled templates.
    pub fn with_bundled_templates() -> Result<Self> {
        Ok(Self::new(Box::new(MiniJinjaRenderer::with_bundled_templates()?)))
    }
}

impl FileWriter for DiskWriter {
    fn copy_template(&self, template: &str, destination: &Path, props: &Value) -> Result<()> {
        let content = self.renderer.render_template(template, props)?;
        write_file(&content, destination)
    }

    fn copy(&self, template: &str, destination: &Path) -> Result<()> {
        let content =
            raw_file(template).ok_or_else(|| Error::TemplateNotFound(template.to_string()))?;
        write_file(content, destination)
    }

    fn write_json(&self, destination: &Path, value: &Value) -> Result<()> {
        write_file(&to_pretty_json(value)?, destination)
    }

    fn write(&self, destination: &Path, contents: &str) -> Result<()> {
        write_file(contents, destination)
    }

    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Accepts every write and touches nothing.
#[derive(Debug, Default)]
pub struct DryRunWriter;

impl FileWriter for DryRunWriter {
    fn copy_template(&self, _template: &str, _destination: &Path, _props: &Value) -> Result<()> {
        Ok(())
    }

    fn copy(&self, _template: &str, _destination: &Path) -> Result<()> {
        Ok(())
    }

    fn write_json(&self, _destination: &Path, _value: &Value) -> Result<()> {
        Ok(())
    }

    fn write(&self, _destination: &Path, _contents: &str) -> Result<()> {
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// Picks the writer for a run.
pub fn writer_for(dry_run: bool) -> Result<Box<dyn FileWriter>> {
    if dry_run {
        Ok(Box::new(DryRunWriter))
    } else {
        Ok(Box::new(DiskWriter::with_bundled_templates()?))
    }
}
