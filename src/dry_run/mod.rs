//! Dry-run simulation: the validation gate, default pre-computation and
//! the final report.
//!
//! File writes are simulated by [`crate::writer::DryRunWriter`]; this module
//! decides what must be supplied and what gets printed.

pub mod mode;
pub mod provenance;
pub mod report;

pub use mode::DryRunMode;
pub use provenance::{option_source, Provenance};
pub use report::{
    configuration_rows, print_configuration, print_file_analysis, print_missing_summary,
    print_validation_failure, ReportRow, Requirements, RowStatus,
};

use crate::{
    config::{DefaultScope, Field},
    store::{is_present, is_truthy, ValueStore, Values},
    validation::{required_fields, validate_all_cli_arguments},
};
use serde_json::Map;
use std::path::Path;

/// Forms are assumed unless `isForm` was explicitly supplied.
pub fn is_form_option(options: &Values) -> bool {
    options.get("isForm").filter(|value| !value.is_null()).is_none_or(is_truthy)
}

fn supplied(options: &Values, key: &str) -> bool {
    options.get(key).is_some_and(is_present)
}

/// Fields that must be supplied for a dry run in `mode`.
pub fn gate_required_fields(mode: DryRunMode, is_form: bool) -> Vec<&'static str> {
    match mode {
        DryRunMode::Off => Vec::new(),
        DryRunMode::Interactive if is_form => vec!["appName", "formNumber"],
        DryRunMode::Interactive => vec!["appName"],
        DryRunMode::NonInteractive => required_fields(is_form),
    }
}

/// Every reason the supplied options cannot start a dry run.
///
/// Interactive runs only need `appName`, plus `formNumber` for forms; the
/// non-interactive gate is the strict required-field check. Both also run
/// every format validator.
pub fn gate_errors(mode: DryRunMode, options: &Values) -> Vec<String> {
    let mut errors = Vec::new();
    if mode == DryRunMode::Interactive {
        if !supplied(options, "appName") {
            errors.push("--app-name: Required (other fields can be computed from this)".to_string());
        }
        if is_form_option(options) && !supplied(options, "formNumber") {
            errors.push("--form-number: Required when creating a form application".to_string());
        }
    }
    if mode.is_active() {
        errors.extend(validate_all_cli_arguments(options));
    }
    errors
}

/// Stores the default of every field that is still unset, in field order.
///
/// Later defaults see earlier computed values through the store.
pub fn compute_defaults(store: &mut ValueStore, fields: &[&'static Field], destination_root: &Path) {
    let answers = Map::new();
    for field in fields {
        if store.has_value(field.name) {
            continue;
        }
        let computed = {
            let scope = DefaultScope::new(&answers, store, destination_root);
            field.default.resolve(&scope)
        };
        if let Some(value) = computed {
            log::debug!("Computed default for {}: {value}", field.name);
            store.set_prop(field.name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{fields_for, APP_FIELDS};
    use serde_json::{json, Value};

    fn options(pairs: &[(&str, Value)]) -> Values {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn interactive_gate_needs_app_name_and_form_number() {
        let opts = options(&[("dryRunInteractive", json!(true))]);
        assert_eq!(
            gate_errors(DryRunMode::Interactive, &opts),
            vec![
                "--app-name: Required (other fields can be computed from this)",
                "--form-number: Required when creating a form application",
            ]
        );

        let plain = options(&[
            ("dryRunInteractive", json!(true)),
            ("appName", json!("Test App")),
            ("isForm", json!(false)),
        ]);
        assert!(gate_errors(DryRunMode::Interactive, &plain).is_empty());
    }

    #[test]
    fn interactive_gate_still_checks_formats() {
        let opts = options(&[
            ("dryRunInteractive", json!(true)),
            ("appName", json!("Test App")),
            ("formNumber", json!("nope")),
        ]);
        let errors = gate_errors(DryRunMode::Interactive, &opts);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("formNumber: "));
    }

    #[test]
    fn non_interactive_gate_is_strict() {
        let opts = options(&[("dryRunNonInteractive", json!(true)), ("appName", json!("Test App"))]);
        let errors = gate_errors(DryRunMode::NonInteractive, &opts);
        assert!(errors.contains(&"--folder-name: Required when using non-interactive mode".to_string()));
        assert!(errors.contains(&"--is-form: Required when using non-interactive mode".to_string()));
    }

    #[test]
    fn real_runs_have_no_gate() {
        assert!(gate_errors(DryRunMode::Off, &Values::new()).is_empty());
        assert!(gate_required_fields(DryRunMode::Off, true).is_empty());
    }

    #[test]
    fn form_is_the_default_variant() {
        assert!(is_form_option(&Values::new()));
        assert!(is_form_option(&options(&[("isForm", Value::Null)])));
        assert!(!is_form_option(&options(&[("isForm", json!(false))])));
        assert_eq!(gate_required_fields(DryRunMode::Interactive, false), vec!["appName"]);
    }

    #[test]
    fn computes_every_unset_default() {
        let mut store = ValueStore::new();
        store.set_option("appName", json!("Burial Allowance"));
        store.set_option("folderName", json!("burials/allowance"));

        compute_defaults(&mut store, &fields_for(true), Path::new("/work/vets-website"));

        assert_eq!(store.get_prop("appName"), None);
        assert_eq!(store.get_str("entryName"), Some("burials-allowance"));
        assert_eq!(store.get_str("rootUrl"), Some("/burials/allowance"));
        assert_eq!(store.get_str("trackingPrefix"), Some("burials-allowance-"));
        assert_eq!(store.get_value("isForm"), Some(&json!(true)));
        assert_eq!(store.get_value("formNumber"), None);
        assert!(store.has_value("productId"));
        assert!(store.has_value("expirationDate"));
    }

    #[test]
    fn supplied_values_are_not_recomputed() {
        let mut store = ValueStore::new();
        store.set_option("slackGroup", json!("@team"));
        compute_defaults(&mut store, &APP_FIELDS.iter().collect::<Vec<_>>(), Path::new("/x/y"));
        assert_eq!(store.get_prop("slackGroup"), None);
        assert_eq!(store.get_str("appName"), Some("A New Form"));
    }
}
