//! Compiles field definitions into prompt descriptors and runs them.

use super::{handler::PromptHandler, interface::PromptProvider};
use crate::{
    config::{DefaultScope, Field},
    error::Result,
    store::ValueStore,
};
use console::style;
use serde_json::{Map, Value};
use std::{io::Write, path::Path};

/// A field ready to be asked, with its skip and default logic.
#[derive(Debug, Clone, Copy)]
pub struct PromptDescriptor {
    pub field: &'static Field,
}

impl PromptDescriptor {
    /// False when the field already has a value or is hidden.
    pub fn when(&self, scope: &DefaultScope<'_>) -> bool {
        !scope.has_value(self.field.name) && self.field.is_visible(scope)
    }

    pub fn default_value(&self, scope: &DefaultScope<'_>) -> Option<Value> {
        self.field.default.resolve(scope)
    }

    pub fn name(&self) -> &'static str {
        self.field.name
    }
}

pub fn compile_prompts(fields: &[&'static Field]) -> Vec<PromptDescriptor> {
    fields.iter().map(|&field| PromptDescriptor { field }).collect()
}

/// Asks every descriptor in order and returns only the new answers.
///
/// Defaults see both the answers collected so far and the store. Invalid
/// answers are reported on `out` and asked again. Merging into the store
/// is left to the caller.
pub fn ask_prompts(
    provider: &dyn PromptProvider,
    descriptors: &[PromptDescriptor],
    store: &ValueStore,
    destination_root: &Path,
    out: &mut dyn Write,
) -> Result<Map<String, Value>> {
    let handler = PromptHandler::new(provider);
    let mut answers = Map::new();

    for descriptor in descriptors {
        loop {
            let scope = DefaultScope::new(&answers, store, destination_root);
            if !descriptor.when(&scope) {
                log::debug!("Skipping prompt for {}: already resolved", descriptor.name());
                break;
            }
            let default = descriptor.default_value(&scope);

            let answer = match handler.create_prompt(descriptor.field, default.as_ref())? {
                Value::String(text) => Value::String(descriptor.field.apply_filter(text)),
                other => other,
            };

            if let Value::String(text) = &answer {
                if let Err(message) = descriptor.field.check(text) {
                    writeln!(out, "{}", style(message).red())?;
                    continue;
                }
            }

            answers.insert(descriptor.name().to_string(), answer);
            break;
        }
    }

    Ok(answers)
}
