//! Layered value store shared by every phase of a generation run.
//!
//! Raw options hold values exactly as supplied on the command line (after
//! boolean coercion). Props hold values resolved by prompts or computed
//! defaults. Lookups prefer props.

use indexmap::{IndexMap, IndexSet};
use serde_json::{json, Map, Value};

pub type Values = IndexMap<String, Value>;

/// Returns true when a value counts as supplied: not null and not an empty string.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Renders a value the way it is shown to users and passed to validators.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Interprets a stored value as a boolean flag.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Null => false,
        _ => true,
    }
}

#[derive(Debug, Default, Clone)]
pub struct ValueStore {
    options: Values,
    props: Values,
    tracked_files: IndexSet<String>,
    dry_run: bool,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, key: &str, value: Value) {
        self.options.insert(key.to_string(), value);
    }

    pub fn get_option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Merges `options` over the current raw options.
    pub fn set_options(&mut self, options: Values) {
        self.options.extend(options);
    }

    pub fn all_options(&self) -> &Values {
        &self.options
    }

    pub fn set_prop(&mut self, key: &str, value: Value) {
        self.props.insert(key.to_string(), value);
    }

    pub fn get_prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Merges `props` over the current resolved props.
    pub fn set_props(&mut self, props: Map<String, Value>) {
        self.props.extend(props);
    }

    pub fn all_props(&self) -> &Values {
        &self.props
    }

    /// Resolved prop if one exists, otherwise the raw option.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.props
            .get(key)
            .filter(|v| !v.is_null())
            .or_else(|| self.options.get(key).filter(|v| !v.is_null()))
    }

    /// The value as a non-empty string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_value(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.get_value(key).is_some_and(is_present)
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.get_value(key).is_some_and(is_truthy)
    }

    /// Options overlaid with props, as a flat object for template rendering.
    pub fn all_values(&self) -> Value {
        let mut merged = Map::new();
        for (key, value) in self.options.iter().chain(self.props.iter()) {
            if !value.is_null() {
                merged.insert(key.clone(), value.clone());
            }
        }
        Value::Object(merged)
    }

    /// Records a touched path once, keeping first-seen order.
    pub fn track_file(&mut self, path: &str) {
        if self.tracked_files.insert(path.to_string()) {
            log::trace!("Tracking file: {path}");
        }
    }

    pub fn tracked_files(&self) -> Vec<String> {
        self.tracked_files.iter().cloned().collect()
    }

    pub fn clear_tracked_files(&mut self) {
        self.tracked_files.clear();
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the store to its empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the whole store, used in debug logging.
    pub fn state(&self) -> Value {
        json!({
            "options": self.options,
            "props": self.props,
            "meta": {
                "isDryRun": self.dry_run,
                "trackedFiles": self.tracked_files,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_take_precedence_over_options() {
        let mut store = ValueStore::new();
        store.set_option("appName", json!("From CLI"));
        assert_eq!(store.get_value("appName"), Some(&json!("From CLI")));

        store.set_prop("appName", json!("Resolved"));
        assert_eq!(store.get_value("appName"), Some(&json!("Resolved")));
        assert_eq!(store.get_option("appName"), Some(&json!("From CLI")));
    }

    #[test]
    fn null_props_fall_back_to_options() {
        let mut store = ValueStore::new();
        store.set_option("folderName", json!("my-app"));
        store.set_prop("folderName", Value::Null);
        assert_eq!(store.get_str("folderName"), Some("my-app"));
    }

    #[test]
    fn bulk_setters_merge() {
        let mut store = ValueStore::new();
        store.set_option("a", json!(1));
        let mut more = Values::new();
        more.insert("b".into(), json!(2));
        store.set_options(more);
        assert_eq!(store.all_options().len(), 2);

        let mut props = Map::new();
        props.insert("c".into(), json!(true));
        store.set_props(props);
        assert!(store.is_truthy("c"));
        assert_eq!(store.all_values(), json!({"a": 1, "b": 2, "c": true}));
    }

    #[test]
    fn empty_strings_are_not_present() {
        let mut store = ValueStore::new();
        store.set_option("slackGroup", json!(""));
        assert!(!store.has_value("slackGroup"));
        assert_eq!(store.get_str("slackGroup"), None);
        assert!(!is_present(&Value::Null));
        assert!(is_present(&json!(false)));
    }

    #[test]
    fn tracked_files_are_deduplicated_in_order() {
        let mut store = ValueStore::new();
        store.track_file("b.js");
        store.track_file("a.js");
        store.track_file("b.js");
        assert_eq!(store.tracked_files(), vec!["b.js", "a.js"]);

        store.clear_tracked_files();
        assert!(store.tracked_files().is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = ValueStore::new();
        store.set_option("appName", json!("x"));
        store.set_prop("entryName", json!("x"));
        store.track_file("x.js");
        store.set_dry_run(true);

        store.reset();

        assert!(store.all_options().is_empty());
        assert!(store.all_props().is_empty());
        assert!(store.tracked_files().is_empty());
        assert!(!store.is_dry_run());
    }

    #[test]
    fn state_snapshot_reports_meta() {
        let mut store = ValueStore::new();
        store.set_dry_run(true);
        store.track_file("manifest.json");
        let state = store.state();
        assert_eq!(state["meta"]["isDryRun"], json!(true));
        assert_eq!(state["meta"]["trackedFiles"], json!(["manifest.json"]));
    }

    #[test]
    fn truthiness_of_stored_flags() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("TRUE")));
        assert!(!is_truthy(&json!("false")));
        assert!(!is_truthy(&json!(false)));
        assert_eq!(display_value(&json!(false)), "false");
        assert_eq!(display_value(&json!("x")), "x");
    }
}
