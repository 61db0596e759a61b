use crate::{
    constants::{flags, verbosity},
    store::Values,
};
use clap::Parser;
use log::LevelFilter;
use serde_json::Value;
use std::path::PathBuf;

/// CLI arguments for appgen.
///
/// Every field flag is accepted in kebab-case and camelCase.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Application name, also the default page title.
    #[arg(long = "app-name", visible_alias = "appName", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Folder below src/applications; may be nested.
    #[arg(long = "folder-name", visible_alias = "folderName", value_name = "FOLDER")]
    pub folder_name: Option<String>,

    /// Name of the entry bundle.
    #[arg(long = "entry-name", visible_alias = "entryName", value_name = "ENTRY")]
    pub entry_name: Option<String>,

    /// Root URL of the application, e.g. /burial-allowance.
    #[arg(long = "root-url", visible_alias = "rootUrl", value_name = "URL")]
    pub root_url: Option<String>,

    /// Generate a form application (true/false/y/n).
    #[arg(long = "is-form", visible_alias = "isForm", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub is_form: Option<String>,

    /// Location of the vagov-content checkout (legacy name).
    #[arg(long = "content-loc", visible_alias = "contentLoc", value_name = "DIR")]
    pub content_loc: Option<String>,

    /// Location of the vagov-content checkout; wins over --content-loc.
    #[arg(long = "content-repo-location", visible_alias = "contentRepoLocation", value_name = "DIR")]
    pub content_repo_location: Option<String>,

    /// Slack group notified on CI failures, or `none`.
    #[arg(long = "slack-group", visible_alias = "slackGroup", value_name = "GROUP")]
    pub slack_group: Option<String>,

    /// VA form number, e.g. 21-526EZ.
    #[arg(long = "form-number", visible_alias = "formNumber", value_name = "NUMBER")]
    pub form_number: Option<String>,

    /// Google Analytics event prefix.
    #[arg(long = "tracking-prefix", visible_alias = "trackingPrefix", value_name = "PREFIX")]
    pub tracking_prefix: Option<String>,

    /// Respondent burden in minutes.
    #[arg(long = "respondent-burden", visible_alias = "respondentBurden", value_name = "MINUTES")]
    pub respondent_burden: Option<String>,

    /// OMB control number, e.g. 2900-0797.
    #[arg(long = "omb-number", visible_alias = "ombNumber", value_name = "NUMBER")]
    pub omb_number: Option<String>,

    /// OMB expiration date in M/D/YYYY format.
    #[arg(long = "expiration-date", visible_alias = "expirationDate", value_name = "DATE")]
    pub expiration_date: Option<String>,

    /// Benefit description shown in the form subtitle.
    #[arg(long = "benefit-description", visible_alias = "benefitDescription", value_name = "TEXT")]
    pub benefit_description: Option<String>,

    /// Schemas come from vets-json-schema (true/false).
    #[arg(long = "uses-vets-json-schema", visible_alias = "usesVetsJsonSchema", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub uses_vets_json_schema: Option<String>,

    /// Use the minimal header pattern (true/false).
    #[arg(long = "uses-minimal-header", visible_alias = "usesMinimalHeader", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub uses_minimal_header: Option<String>,

    /// Add the form to the My VA saved-in-progress list (true/false).
    #[arg(long = "add-to-my-va-sip", visible_alias = "addToMyVaSip", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub add_to_my_va_sip: Option<String>,

    /// Form template: WITH_1_PAGE, WITH_4_PAGES or FORM_ENGINE.
    #[arg(long = "template-type", visible_alias = "templateType", value_name = "TYPE")]
    pub template_type: Option<String>,

    /// Simulate a non-interactive run without touching the filesystem.
    #[arg(long = "dry-run", visible_alias = "dryRun")]
    pub dry_run: bool,

    /// Simulate an interactive run; only --app-name (and --form-number for forms) is needed.
    #[arg(long = "dry-run-interactive", visible_alias = "dryRunInteractive")]
    pub dry_run_interactive: bool,

    /// Simulate a non-interactive run; every required field must be supplied.
    #[arg(long = "dry-run-non-interactive", visible_alias = "dryRunNonInteractive")]
    pub dry_run_non_interactive: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Root of the vets-website checkout (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Root of the content-build checkout (defaults to <destination>/../content-build).
    #[arg(long = "content-build", value_name = "DIR")]
    pub content_build: Option<PathBuf>,

    /// Field answers as a JSON object, or `-` to read them from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,
}

/// Interprets a boolean flag value.
///
/// `false`, `n`, `no` and `0` in any case are false, an empty value is
/// unset, anything else is true.
pub fn parse_bool_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let lowered = raw.to_ascii_lowercase();
    Some(!matches!(lowered.as_str(), "false" | "n" | "no" | "0"))
}

impl Args {
    fn text_fields(&self) -> [(&'static str, &Option<String>); 12] {
        [
            ("appName", &self.app_name),
            ("folderName", &self.folder_name),
            ("entryName", &self.entry_name),
            ("rootUrl", &self.root_url),
            ("slackGroup", &self.slack_group),
            ("formNumber", &self.form_number),
            ("trackingPrefix", &self.tracking_prefix),
            ("respondentBurden", &self.respondent_burden),
            ("ombNumber", &self.omb_number),
            ("expirationDate", &self.expiration_date),
            ("benefitDescription", &self.benefit_description),
            ("templateType", &self.template_type),
        ]
    }

    fn boolean_fields(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("isForm", &self.is_form),
            ("usesVetsJsonSchema", &self.uses_vets_json_schema),
            ("usesMinimalHeader", &self.uses_minimal_header),
            ("addToMyVaSip", &self.add_to_my_va_sip),
        ]
    }

    /// Field values given as flags, keyed by field name.
    ///
    /// Boolean flags pass through [`parse_bool_flag`] and `contentLoc`
    /// only fills `contentRepoLocation` when the latter is absent.
    pub fn field_options(&self) -> Values {
        let mut options = Values::new();
        for (name, value) in self.text_fields() {
            if let Some(value) = value {
                options.insert(name.to_string(), Value::String(value.clone()));
            }
        }
        for (name, value) in self.boolean_fields() {
            if let Some(flag) = value.as_deref().and_then(parse_bool_flag) {
                options.insert(name.to_string(), Value::Bool(flag));
            }
        }
        if let Some(location) = self.content_repo_location.as_ref().or(self.content_loc.as_ref()) {
            options.insert("contentRepoLocation".to_string(), Value::String(location.clone()));
        }
        options
    }

    /// The dry-run flags that were set.
    pub fn dry_run_options(&self) -> Values {
        [
            (flags::DRY_RUN, self.dry_run),
            (flags::DRY_RUN_INTERACTIVE, self.dry_run_interactive),
            (flags::DRY_RUN_NON_INTERACTIVE, self.dry_run_non_interactive),
        ]
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, set)| (name.to_string(), Value::Bool(set)))
        .collect()
    }
}

/// Parses the process arguments, exiting with clap's usage message on error.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
