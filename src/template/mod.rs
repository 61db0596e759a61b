//! Generated file plumbing
//!
//! - `assets`: templates bundled into the binary
//! - `operation`: descriptions of file operations used for logging

pub mod assets;
pub mod operation;
