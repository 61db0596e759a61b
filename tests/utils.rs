#![allow(dead_code)]

use appgen::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const CONSTANTS_JS: &str = "export const VA_FORM_IDS = Object.freeze({
  FORM_10_10EZ: '10-10EZ',
});

export const FORM_BENEFITS = {
  [VA_FORM_IDS.FORM_10_10EZ]: 'health care benefits',
};

export const TRACKING_PREFIXES = {
  [VA_FORM_IDS.FORM_10_10EZ]: 'hca-',
};

export const SIP_ENABLED_FORMS = new Set([
  VA_FORM_IDS.FORM_10_10EZ,
]);

export const getAllFormLinks = getAppUrlImpl => {
  const tryGetAppUrl = id => getAppUrlImpl(id);
  return {
    [VA_FORM_IDS.FORM_10_10EZ]: `${tryGetAppUrl('hca')}/`,
  };
};

export const MY_VA_SIP_FORMS = [
];
";

pub const VALIDATOR_SPEC: &str = "const missingFromVetsJsonSchema = [
  VA_FORM_IDS.FORM_10_10EZ,
];
";

pub const REGISTRY_JSON: &str = r#"[
  {
    "appName": "Health care application",
    "entryName": "hca",
    "rootUrl": "/health-care/apply",
    "productId": "00000000-0000-0000-0000-000000000001",
    "template": { "vagovprod": true, "layout": "page-react.html" }
  }
]
"#;

pub const ALLOWLIST_JSON: &str = r#"{ "apps": [{ "rootFolder": "hca", "slackGroup": "@hca-team" }] }"#;

/// A vets-website checkout next to a content-build checkout.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let workspace = Self { root };
        let site = workspace.destination();

        write(&site.join("package.json"), r#"{ "name": "vets-website" }"#);
        fs::create_dir_all(site.join("src/applications")).unwrap();
        write(&site.join("src/platform/forms/constants.js"), CONSTANTS_JS);
        write(
            &site.join("src/platform/forms/tests/forms-config-validator.unit.spec.jsx"),
            VALIDATOR_SPEC,
        );
        write(&site.join("config/changed-apps-build.json"), ALLOWLIST_JSON);
        write(&workspace.registry_path(), REGISTRY_JSON);
        workspace
    }

    pub fn destination(&self) -> PathBuf {
        self.root.path().join("vets-website")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.path().join("content-build/src/applications/registry.json")
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.destination().join(relative)).unwrap()
    }

    pub fn registry(&self) -> Vec<serde_json::Value> {
        serde_json::from_str(&fs::read_to_string(self.registry_path()).unwrap()).unwrap()
    }

    /// Files below `relative`, relative to the destination root and sorted.
    pub fn files_under(&self, relative: &str) -> Vec<String> {
        let destination = self.destination();
        let mut files: Vec<String> = WalkDir::new(destination.join(relative))
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(&destination).unwrap().display().to_string())
            .collect();
        files.sort();
        files
    }

    /// Args pointing at this workspace.
    pub fn args(&self) -> Args {
        Args { destination: Some(self.destination()), verbose: 2, ..Args::default() }
    }
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Args for a plain application with every required field supplied.
pub fn app_args(workspace: &Workspace) -> Args {
    Args {
        app_name: Some("Test App".into()),
        folder_name: Some("test-app".into()),
        entry_name: Some("test-app".into()),
        root_url: Some("/test-app".into()),
        is_form: Some("false".into()),
        ..workspace.args()
    }
}

/// Args for a form with every required field supplied.
pub fn form_args(workspace: &Workspace, template_type: &str) -> Args {
    Args {
        app_name: Some("Education benefits".into()),
        folder_name: Some("edu/0993".into()),
        entry_name: Some("edu-0993".into()),
        root_url: Some("/education/opt-out-0993".into()),
        is_form: Some("true".into()),
        form_number: Some("22-0993".into()),
        benefit_description: Some("X".into()),
        omb_number: Some("2900-0001".into()),
        expiration_date: Some("12/31/2099".into()),
        template_type: Some(template_type.into()),
        ..workspace.args()
    }
}

/// Output written to the report sink, without colour codes.
pub fn plain(out: Vec<u8>) -> String {
    console::strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string()
}
