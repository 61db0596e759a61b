//! Basic types and enums for field definitions

use super::field::DefaultScope;
use serde_json::Value;

/// How a field is asked for and how its flag value is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Yes/no confirmation; CLI values go through the boolean truth table
    Boolean,
    /// One value out of a fixed list of choices
    SingleChoice,
}

/// A selectable value of a [`FieldKind::SingleChoice`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

/// Computes a default from the answers gathered so far.
pub type DefaultFn = fn(&DefaultScope<'_>) -> Option<Value>;

/// Returns `Err(message)` when an answer is not acceptable.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// Normalises an answer after it has been captured.
pub type Filter = fn(&str) -> String;

/// Decides whether a prompt is shown at all.
pub type Visibility = fn(&DefaultScope<'_>) -> bool;

#[derive(Debug, Clone, Copy)]
pub enum FieldDefault {
    None,
    Text(&'static str),
    Flag(bool),
    Computed(DefaultFn),
}

impl FieldDefault {
    pub fn resolve(&self, scope: &DefaultScope<'_>) -> Option<Value> {
        match self {
            FieldDefault::None => None,
            FieldDefault::Text(text) => Some(Value::String(text.to_string())),
            FieldDefault::Flag(flag) => Some(Value::Bool(*flag)),
            FieldDefault::Computed(compute) => compute(scope),
        }
    }

    /// Function-typed defaults are reported as `computed default`.
    pub fn is_computed(&self) -> bool {
        matches!(self, FieldDefault::Computed(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FieldDefault::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ValueStore;
    use serde_json::{json, Map};
    use std::path::Path;

    fn always_x(_: &DefaultScope<'_>) -> Option<Value> {
        Some(json!("x"))
    }

    #[test]
    fn resolves_each_default_kind() {
        let store = ValueStore::new();
        let answers = Map::new();
        let scope = DefaultScope::new(&answers, &store, Path::new("/repo"));

        assert_eq!(FieldDefault::None.resolve(&scope), None);
        assert_eq!(FieldDefault::Text("none").resolve(&scope), Some(json!("none")));
        assert_eq!(FieldDefault::Flag(true).resolve(&scope), Some(json!(true)));
        assert_eq!(FieldDefault::Computed(always_x).resolve(&scope), Some(json!("x")));
    }

    #[test]
    fn only_functions_count_as_computed() {
        assert!(FieldDefault::Computed(always_x).is_computed());
        assert!(!FieldDefault::Text("a").is_computed());
        assert!(!FieldDefault::Flag(false).is_computed());
        assert!(FieldDefault::None.is_none());
    }
}
