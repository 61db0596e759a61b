//! Field registry
//!
//! This module contains the declarative description of every configurable value:
//! - `types`: field kinds, choices and default kinds
//! - `field`: the field definition and the scope default functions read from
//! - `definitions`: the app and form field tables
//! - `filters`: answer normalisation and derived-name helpers

pub mod definitions;
pub mod field;
pub mod filters;
pub mod types;

pub use definitions::{all_fields, fields_for, find_field, APP_FIELDS, FORM_FIELDS};
pub use field::{DefaultScope, Field};
pub use types::{Choice, FieldDefault, FieldKind};
