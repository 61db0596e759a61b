use super::DryRunMode;
use crate::{config::find_field, constants::COMPUTED_FIELDS, store::{is_present, ValueStore}};
use std::fmt;

/// How a resolved value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    CliArg,
    PromptAnswer,
    Prompt,
    Default,
    ComputedDefault,
    Computed,
    Missing,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Provenance::CliArg => "CLI arg",
            Provenance::PromptAnswer => "prompt answer",
            Provenance::Prompt => "prompt",
            Provenance::Default => "default",
            Provenance::ComputedDefault => "computed default",
            Provenance::Computed => "computed",
            Provenance::Missing => "missing",
        };
        write!(f, "{tag}")
    }
}

fn resolved_default(name: &str) -> Provenance {
    match find_field(name) {
        Some(field) if field.default.is_computed() => Provenance::ComputedDefault,
        _ => Provenance::Default,
    }
}

/// Tags the value of `name` with its source.
///
/// Internally generated fields are always `computed`. Otherwise a raw
/// option is a `prompt answer` in interactive dry runs and a `CLI arg`
/// elsewhere; a value only present in props is a (computed) default in
/// dry runs and a `prompt` answer in real runs.
pub fn option_source(name: &str, mode: DryRunMode, store: &ValueStore) -> Provenance {
    if !store.has_value(name) {
        return Provenance::Missing;
    }
    if COMPUTED_FIELDS.contains(&name) {
        return Provenance::Computed;
    }
    let from_options = store.get_option(name).is_some_and(is_present);
    match (mode, from_options) {
        (DryRunMode::Interactive, true) => Provenance::PromptAnswer,
        (_, true) => Provenance::CliArg,
        (DryRunMode::Off, false) => Provenance::Prompt,
        (_, false) => resolved_default(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> ValueStore {
        let mut store = ValueStore::new();
        store.set_option("appName", json!("Test App"));
        store.set_prop("folderName", json!("test-app"));
        store.set_prop("slackGroup", json!("none"));
        store.set_prop("productId", json!("abc"));
        store.set_option("contentRepoLocation", json!("/work/vagov-content"));
        store
    }

    #[test]
    fn interactive_dry_run_tags() {
        let store = store();
        let mode = DryRunMode::Interactive;
        assert_eq!(option_source("appName", mode, &store), Provenance::PromptAnswer);
        assert_eq!(option_source("folderName", mode, &store), Provenance::ComputedDefault);
        assert_eq!(option_source("slackGroup", mode, &store), Provenance::Default);
        assert_eq!(option_source("formNumber", mode, &store), Provenance::Missing);
    }

    #[test]
    fn non_interactive_dry_run_tags() {
        let store = store();
        let mode = DryRunMode::NonInteractive;
        assert_eq!(option_source("appName", mode, &store), Provenance::CliArg);
        assert_eq!(option_source("folderName", mode, &store), Provenance::ComputedDefault);
        assert_eq!(option_source("slackGroup", mode, &store), Provenance::Default);
    }

    #[test]
    fn real_run_tags() {
        let store = store();
        assert_eq!(option_source("appName", DryRunMode::Off, &store), Provenance::CliArg);
        assert_eq!(option_source("folderName", DryRunMode::Off, &store), Provenance::Prompt);
    }

    #[test]
    fn generated_fields_are_always_computed() {
        let store = store();
        for mode in [DryRunMode::Off, DryRunMode::Interactive, DryRunMode::NonInteractive] {
            assert_eq!(option_source("productId", mode, &store), Provenance::Computed);
            assert_eq!(option_source("contentRepoLocation", mode, &store), Provenance::Computed);
        }
        assert_eq!(Provenance::ComputedDefault.to_string(), "computed default");
        assert_eq!(Provenance::CliArg.to_string(), "CLI arg");
    }
}
