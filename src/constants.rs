//! Constants used throughout appgen

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Where generated applications live inside the monorepo.
pub const APPLICATIONS_DIR: &str = "src/applications";

/// Form-engine applications are nested one level deeper.
pub const FORM_ENGINE_APPLICATIONS_DIR: &str = "src/applications/simple-forms-form-engine";

/// Registry location relative to the content-build checkout.
pub const REGISTRY_FILE: &str = "src/applications/registry.json";

/// Default content-build checkout, relative to the destination root.
pub const DEFAULT_CONTENT_BUILD_DIR: &str = "../content-build";

/// Allow-list of applications built on change.
pub const ALLOWLIST_FILE: &str = "config/changed-apps-build.json";

/// Platform form constants patched for every new form.
pub const PLATFORM_CONSTANTS_FILE: &str = "src/platform/forms/constants.js";

/// Form config validator spec patched when a form has no vets-json-schema entry.
pub const FORMS_CONFIG_VALIDATOR_FILE: &str =
    "src/platform/forms/tests/forms-config-validator.unit.spec.jsx";

/// Sibling repository holding static content pages.
pub const CONTENT_REPO_DIR_NAME: &str = "vagov-content";

/// Files whose presence identifies a monorepo checkout.
pub const WORKSPACE_MARKERS: &[&str] = &["package.json", APPLICATIONS_DIR];

/// Template types offered by the form strategy
pub mod template_types {
    pub const WITH_1_PAGE: &str = "WITH_1_PAGE";
    pub const WITH_4_PAGES: &str = "WITH_4_PAGES";
    pub const FORM_ENGINE: &str = "FORM_ENGINE";

    pub const ALL: &[&str] = &[WITH_1_PAGE, WITH_4_PAGES, FORM_ENGINE];
}

/// Option keys that are not fields
pub mod flags {
    pub const DRY_RUN: &str = "dryRun";
    pub const DRY_RUN_INTERACTIVE: &str = "dryRunInteractive";
    pub const DRY_RUN_NON_INTERACTIVE: &str = "dryRunNonInteractive";
    pub const CONTENT_LOC: &str = "contentLoc";
}

/// Option keys whose presence switches a run to non-interactive mode.
pub const NON_INTERACTIVE_FIELDS: &[&str] = &[
    "appName",
    "folderName",
    "entryName",
    "rootUrl",
    "isForm",
    "contentLoc",
    "contentRepoLocation",
    "slackGroup",
    "formNumber",
    "trackingPrefix",
    "respondentBurden",
    "ombNumber",
    "expirationDate",
    "benefitDescription",
    "usesVetsJsonSchema",
    "usesMinimalHeader",
    "addToMyVaSip",
    "templateType",
];

/// Fields that are resolved internally and always tagged `computed`.
pub const COMPUTED_FIELDS: &[&str] = &["productId", "subFolder", "contentRepoLocation"];

/// Fields never shown in the dry-run configuration report.
pub const HIDDEN_REPORT_FIELDS: &[&str] =
    &["productId", flags::DRY_RUN_INTERACTIVE, flags::DRY_RUN_NON_INTERACTIVE];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
