//! Whole-run validation of command line options.

use crate::{
    config::filters::field_name_to_cli_arg,
    constants::{flags, NON_INTERACTIVE_FIELDS},
    store::{display_value, is_present, is_truthy, Values},
    validation::fields::{
        validate_app_name, validate_entry_name, validate_expiration_date,
        validate_form_number, validate_omb_number, validate_respondent_burden,
        validate_root_url, validate_slack_group, validate_template_type, FieldResult,
    },
};

const ALWAYS_REQUIRED: &[&str] = &["appName", "folderName", "entryName", "rootUrl", "isForm"];

const FORM_REQUIRED: &[&str] = &["formNumber", "benefitDescription", "ombNumber", "expirationDate"];

/// Format checks run by [`validate_all_cli_arguments`], in reporting order.
const FORMAT_VALIDATORS: &[(&str, fn(&str) -> FieldResult)] = &[
    ("rootUrl", validate_root_url),
    ("appName", validate_app_name),
    ("entryName", validate_entry_name),
    ("formNumber", validate_form_number),
    ("ombNumber", validate_omb_number),
    ("expirationDate", validate_expiration_date),
    ("respondentBurden", validate_respondent_burden),
    ("templateType", validate_template_type),
    ("slackGroup", validate_slack_group),
];

fn flag_is_set(options: &Values, key: &str) -> bool {
    options.get(key).is_some_and(is_truthy)
}

/// Whether the supplied options describe a non-interactive run.
///
/// `dryRunInteractive` always wins, `dryRunNonInteractive` always forces it
/// on, otherwise any known field flag makes the run non-interactive.
pub fn is_non_interactive_mode(options: &Values) -> bool {
    if flag_is_set(options, flags::DRY_RUN_INTERACTIVE) {
        return false;
    }
    if flag_is_set(options, flags::DRY_RUN_NON_INTERACTIVE) {
        return true;
    }
    NON_INTERACTIVE_FIELDS
        .iter()
        .any(|field| options.get(*field).is_some_and(|value| !value.is_null()))
}

/// Fields that must be supplied when nothing will be prompted.
pub fn required_fields(is_form: bool) -> Vec<&'static str> {
    let mut fields = ALWAYS_REQUIRED.to_vec();
    if is_form {
        fields.extend_from_slice(FORM_REQUIRED);
    }
    fields
}

/// Presence check for non-interactive runs; empty for interactive ones.
pub fn validate_required_cli_arguments(options: &Values) -> Vec<String> {
    if !is_non_interactive_mode(options) {
        return Vec::new();
    }
    required_fields(flag_is_set(options, "isForm"))
        .into_iter()
        .filter(|field| !options.get(*field).is_some_and(is_present))
        .map(|field| {
            format!("--{}: Required when using non-interactive mode", field_name_to_cli_arg(field))
        })
        .collect()
}

/// Runs every check over every supplied value and collects all failures.
///
/// Required-field errors come first, then format errors as `field: message`.
pub fn validate_all_cli_arguments(options: &Values) -> Vec<String> {
    let mut errors = validate_required_cli_arguments(options);
    for (field, validate) in FORMAT_VALIDATORS {
        let Some(value) = options.get(*field).filter(|v| is_present(v)) else {
            continue;
        };
        if let Err(message) = validate(&display_value(value)) {
            errors.push(format!("{field}: {message}"));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn options(pairs: &[(&str, Value)]) -> Values {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn valid_form_options() -> Values {
        options(&[
            ("appName", json!("Test App")),
            ("folderName", json!("test-app")),
            ("entryName", json!("test-app")),
            ("rootUrl", json!("/test-app")),
            ("isForm", json!(true)),
            ("formNumber", json!("22-0993")),
            ("benefitDescription", json!("education benefits")),
            ("ombNumber", json!("2900-0001")),
            ("expirationDate", json!("12/31/2099")),
            ("respondentBurden", json!("30")),
            ("templateType", json!("WITH_1_PAGE")),
            ("slackGroup", json!("@my-team")),
        ])
    }

    #[test]
    fn detects_non_interactive_mode() {
        assert!(!is_non_interactive_mode(&Values::new()));
        assert!(is_non_interactive_mode(&options(&[("ombNumber", json!("2900-0001"))])));
        assert!(!is_non_interactive_mode(&options(&[
            ("dryRunInteractive", json!(true)),
            ("appName", json!("x")),
        ])));
        assert!(is_non_interactive_mode(&options(&[("dryRunNonInteractive", json!(true))])));
    }

    #[test]
    fn unknown_keys_do_not_switch_modes() {
        assert!(!is_non_interactive_mode(&options(&[("verbose", json!(true))])));
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate_all_cli_arguments(&valid_form_options()).is_empty());
    }

    #[test]
    fn each_format_violation_is_reported_once() {
        let cases = [
            ("rootUrl", json!("no-slash")),
            ("appName", json!("Bad|Name")),
            ("entryName", json!("bad entry")),
            ("formNumber", json!("ABC")),
            ("ombNumber", json!("123-4567")),
            ("expirationDate", json!("1/1/2000")),
            ("respondentBurden", json!("zero")),
            ("templateType", json!("WITH_2_PAGES")),
            ("slackGroup", json!("my-team")),
        ];
        for (field, bad) in cases {
            let mut opts = valid_form_options();
            opts.insert(field.to_string(), bad);
            let errors = validate_all_cli_arguments(&opts);
            assert_eq!(errors.len(), 1, "{field}: {errors:?}");
            assert!(errors[0].starts_with(&format!("{field}: ")), "{errors:?}");
        }
    }

    #[test]
    fn missing_required_fields_are_listed_first_in_flag_style() {
        let mut opts = valid_form_options();
        opts.shift_remove("folderName");
        opts.insert("ombNumber".into(), json!(""));
        opts.insert("rootUrl".into(), json!("bad"));

        let errors = validate_all_cli_arguments(&opts);
        assert_eq!(
            errors,
            vec![
                "--folder-name: Required when using non-interactive mode".to_string(),
                "--omb-number: Required when using non-interactive mode".to_string(),
                r#"rootUrl: Root URL must start with a forward slash (/). Example: "/burial-allowance""#
                    .to_string(),
            ]
        );
    }

    #[test]
    fn form_fields_are_only_required_for_forms() {
        let opts = options(&[
            ("appName", json!("Test App")),
            ("folderName", json!("test-app")),
            ("entryName", json!("test-app")),
            ("rootUrl", json!("/test-app")),
            ("isForm", json!(false)),
        ]);
        assert!(validate_required_cli_arguments(&opts).is_empty());
    }

    #[test]
    fn interactive_runs_skip_the_required_check() {
        let opts = options(&[("dryRunInteractive", json!(true)), ("appName", json!("x"))]);
        assert!(validate_required_cli_arguments(&opts).is_empty());
    }

    #[test]
    fn missing_is_form_is_reported() {
        let opts = options(&[("appName", json!("Test App"))]);
        let errors = validate_required_cli_arguments(&opts);
        assert!(errors.contains(&"--is-form: Required when using non-interactive mode".to_string()));
        assert_eq!(errors.len(), 4);
    }
}
