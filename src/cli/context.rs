use crate::{
    dry_run::DryRunMode,
    error::Result,
    ioutils::read_optional,
    store::ValueStore,
    template::operation::TemplateOperation,
    writer::FileWriter,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Shared state describing a single generation run.
///
/// Every file primitive goes through here so the touched path is tracked
/// and logged identically in real and simulated runs.
pub struct GenerationContext {
    destination_root: PathBuf,
    content_build_root: PathBuf,
    store: ValueStore,
    writer: Box<dyn FileWriter>,
    mode: DryRunMode,
}

impl GenerationContext {
    pub fn new(
        destination_root: PathBuf,
        content_build_root: PathBuf,
        store: ValueStore,
        writer: Box<dyn FileWriter>,
        mode: DryRunMode,
    ) -> Self {
        Self { destination_root, content_build_root, store, writer, mode }
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn content_build_root(&self) -> &Path {
        &self.content_build_root
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ValueStore {
        &mut self.store
    }

    pub fn into_store(self) -> ValueStore {
        self.store
    }

    pub fn mode(&self) -> DryRunMode {
        self.mode
    }

    pub fn dry_run(&self) -> bool {
        self.writer.is_dry_run()
    }

    /// Path relative to the destination root.
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.destination_root.join(relative)
    }

    /// How a path is shown in logs and reports.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.destination_root).unwrap_or(path).display().to_string()
    }

    pub fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        read_optional(path)
    }

    fn record(&mut self, operation: &TemplateOperation) {
        log::info!("{}", operation.get_message(self.dry_run()));
        let shown = self.display_path(operation.target_path());
        self.store.track_file(&shown);
    }

    /// Renders a bundled template with every resolved value.
    pub fn copy_template(&mut self, template: &str, target: PathBuf) -> Result<()> {
        let props = self.store.all_values();
        let operation = TemplateOperation::Render { template: template.to_string(), target };
        self.record(&operation);
        self.writer.copy_template(template, operation.target_path(), &props)
    }

    pub fn copy(&mut self, source: &str, target: PathBuf) -> Result<()> {
        let operation = TemplateOperation::Copy { source: source.to_string(), target };
        self.record(&operation);
        self.writer.copy(source, operation.target_path())
    }

    pub fn write_json(&mut self, target: PathBuf, value: &Value) -> Result<()> {
        let operation = TemplateOperation::WriteJson { target };
        self.record(&operation);
        self.writer.write_json(operation.target_path(), value)
    }

    pub fn write(&mut self, target: PathBuf, contents: &str) -> Result<()> {
        let operation = TemplateOperation::Write { target };
        self.record(&operation);
        self.writer.write(operation.target_path(), contents)
    }

    /// Records a patch of `section` without reading or writing the target.
    pub fn track_patch(&mut self, target: PathBuf, section: &str) {
        self.record(&TemplateOperation::Patch { target, section: section.to_string() });
    }

    /// Writes patched contents, recording the patched section.
    pub fn write_patch(&mut self, target: PathBuf, section: &str, contents: &str) -> Result<()> {
        let operation = TemplateOperation::Patch { target, section: section.to_string() };
        self.record(&operation);
        self.writer.write(operation.target_path(), contents)
    }
}
