use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Invalid pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    /// Aggregated format and required-field failures.
    #[error("Validation failed with {} error(s):\n{}", errors.len(), errors.join("\n"))]
    ValidationFailed { errors: Vec<String> },

    /// Required fields that are still unresolved after defaults were computed.
    #[error("Missing required fields: {}.", fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },

    /// The new application collides with an existing registry entry.
    #[error(
        "Cannot create application due to duplicate entries in content-build registry:\n{}",
        reasons.join("\n")
    )]
    DuplicateRegistryEntry { reasons: Vec<String> },

    #[error("Cannot proceed: '{destination}' is not a vets-website checkout ({reason}). Run appgen from the repository root or pass --destination.")]
    UnsupportedWorkspace { destination: String, reason: String },

    #[error("Template '{0}' is not bundled with appgen.")]
    TemplateNotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Every error maps to exit code 1, including validation failures whose
/// itemised report has already been printed.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
