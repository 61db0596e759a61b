use std::path::PathBuf;

/// A single change a generation run makes, or would make, to disk.
#[derive(Debug)]
pub enum TemplateOperation {
    Render { template: String, target: PathBuf },
    Copy { source: String, target: PathBuf },
    WriteJson { target: PathBuf },
    Write { target: PathBuf },
    Patch { target: PathBuf, section: String },
}

impl TemplateOperation {
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::Render { target, .. }
            | TemplateOperation::Copy { target, .. }
            | TemplateOperation::WriteJson { target }
            | TemplateOperation::Write { target }
            | TemplateOperation::Patch { target, .. } => target,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Render { template, target } => {
                format!("{prefix}Rendering '{template}' to '{}'", target.display())
            }
            TemplateOperation::Copy { source, target } => {
                format!("{prefix}Copying '{source}' to '{}'", target.display())
            }
            TemplateOperation::WriteJson { target } => {
                format!("{prefix}Writing JSON to '{}'", target.display())
            }
            TemplateOperation::Write { target } => {
                format!("{prefix}Writing to '{}'", target.display())
            }
            TemplateOperation::Patch { target, section } => {
                format!("{prefix}Patching {section} in '{}'", target.display())
            }
        }
    }
}
