//! Answer validation
//!
//! - `fields`: per-field format validators returning a descriptive message
//! - `cli`: non-interactive detection, required-field checks and the aggregator
//! - `duplicates`: registry collision detection

pub mod cli;
pub mod duplicates;
pub mod fields;

pub use cli::{
    is_non_interactive_mode, required_fields, validate_all_cli_arguments,
    validate_required_cli_arguments,
};
pub use duplicates::check_for_duplicates;
