//! Interactive prompting
//!
//! The module is structured in layers:
//! - `interface`: abstract prompt interfaces independent of any UI library
//! - `dialoguer`: terminal implementation using the dialoguer library
//! - `automatic_impl`: scripted implementation for automation and tests
//! - `handler`: asks a single field through a provider
//! - `compiler`: turns field definitions into prompt descriptors and runs them

pub mod automatic_impl;
pub mod compiler;
pub mod dialoguer;
pub mod handler;
pub mod interface;

pub use automatic_impl::AutomaticPrompter;
pub use compiler::{ask_prompts, compile_prompts, PromptDescriptor};
pub use dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
