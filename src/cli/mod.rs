pub mod answers;
pub mod args;
pub mod context;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, parse_bool_flag, Args};
pub use runner::{run, run_with};
