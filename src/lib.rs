/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Field registry: definitions, defaults and filters.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Layered option and prop store shared by every phase.
pub mod store;

/// Answer validators
pub mod validation;

/// User input and interaction handling.
pub mod prompt;

/// Template rendering functionality.
pub mod renderer;

/// Bundled templates and file operation descriptions.
pub mod template;

/// Real and simulated file writers.
pub mod writer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Dry-run gate, default computation and report.
pub mod dry_run;

/// Plain application and form generation strategies.
pub mod strategy;

/// Content-build registry and allow-list updates.
pub mod registry;

/// Regex splicing of shared constants files.
pub mod patcher;
