//! Field definition and the lookup scope handed to default functions

use crate::{
    config::{
        filters::field_name_to_cli_arg,
        types::{Choice, FieldDefault, FieldKind, Filter, Validator, Visibility},
    },
    store::{is_present, ValueStore},
};
use serde_json::{Map, Value};
use std::path::Path;

/// Declarative description of one configurable value.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Prompt text and CLI help
    pub message: &'static str,
    pub default: FieldDefault,
    /// Prompt-time validator
    pub validate: Option<Validator>,
    /// Applied to prompt answers before they are stored
    pub filter: Option<Filter>,
    pub required: bool,
    pub visible_when: Option<Visibility>,
    pub choices: &'static [Choice],
}

impl Field {
    pub const fn text(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            message,
            default: FieldDefault::None,
            validate: None,
            filter: None,
            required: false,
            visible_when: None,
            choices: &[],
        }
    }

    pub const fn boolean(name: &'static str, message: &'static str, default: bool) -> Self {
        Self {
            kind: FieldKind::Boolean,
            default: FieldDefault::Flag(default),
            ..Self::text(name, message)
        }
    }

    pub const fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_validator(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub const fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub const fn shown_when(mut self, visibility: Visibility) -> Self {
        self.visible_when = Some(visibility);
        self
    }

    pub const fn with_choices(mut self, choices: &'static [Choice]) -> Self {
        self.kind = FieldKind::SingleChoice;
        self.choices = choices;
        self
    }

    /// Kebab-case flag name, e.g. `app-name`.
    pub fn cli_arg(&self) -> String {
        field_name_to_cli_arg(self.name)
    }

    pub fn is_visible(&self, scope: &DefaultScope<'_>) -> bool {
        self.visible_when.is_none_or(|visible| visible(scope))
    }

    /// Runs the prompt validator, treating required empty answers as errors.
    pub fn check(&self, answer: &str) -> std::result::Result<(), String> {
        if self.required && answer.trim().is_empty() {
            return Err("This field is required".to_string());
        }
        match self.validate {
            Some(validate) => validate(answer),
            None => Ok(()),
        }
    }

    pub fn apply_filter(&self, answer: String) -> String {
        match self.filter {
            Some(filter) => filter(&answer),
            None => answer,
        }
    }
}

/// Answers gathered in the current prompt round, backed by the store.
///
/// Fields supplied on the command line never appear in the local answers,
/// so every lookup falls back to the store.
pub struct DefaultScope<'a> {
    answers: &'a Map<String, Value>,
    store: &'a ValueStore,
    destination_root: &'a Path,
}

impl<'a> DefaultScope<'a> {
    pub fn new(
        answers: &'a Map<String, Value>,
        store: &'a ValueStore,
        destination_root: &'a Path,
    ) -> Self {
        Self { answers, store, destination_root }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.answers
            .get(key)
            .filter(|value| is_present(value))
            .or_else(|| self.store.get_value(key).filter(|value| is_present(value)))
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn destination_root(&self) -> &'a Path {
        self.destination_root
    }
}
