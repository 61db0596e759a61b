//! The content-build application registry and the change-build allow-list.

use crate::{
    cli::context::GenerationContext,
    constants::{template_types, ALLOWLIST_FILE, REGISTRY_FILE},
    error::{Error, Result},
    ioutils::read_optional,
    store::ValueStore,
    validation::check_for_duplicates,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

const PAGE_LAYOUT: &str = "page-react.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub app_name: String,
    pub entry_name: String,
    pub root_url: String,
    pub product_id: String,
    pub template: RegistryTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryTemplate {
    pub vagovprod: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_breadcrumbs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal_exclude_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal_footer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal_header: Option<MinimalHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalHeader {
    pub title: String,
    pub subtitle: String,
}

impl RegistryTemplate {
    fn page() -> Self {
        Self {
            vagovprod: false,
            title: None,
            layout: PAGE_LAYOUT.to_string(),
            include_breadcrumbs: None,
            minimal_exclude_paths: None,
            minimal_footer: None,
            minimal_header: None,
        }
    }
}

fn value_of(store: &ValueStore, key: &str) -> String {
    store.get_str(key).unwrap_or_default().to_string()
}

/// Builds the entry for the application described by `store`.
pub fn build_registry_entry(store: &ValueStore) -> RegistryEntry {
    let app_name = value_of(store, "appName");
    let mut template = RegistryTemplate::page();

    if store.get_str("templateType") == Some(template_types::FORM_ENGINE) {
        template.title = Some(app_name.clone());
    } else if store.is_truthy("usesMinimalHeader") {
        template.include_breadcrumbs = Some(false);
        template.minimal_exclude_paths =
            Some(vec!["/introduction".to_string(), "/confirmation".to_string()]);
        template.minimal_footer = Some(true);
        template.minimal_header = Some(MinimalHeader {
            title: app_name.clone(),
            subtitle: format!(
                "{} (VA Form {})",
                value_of(store, "benefitDescription"),
                value_of(store, "formNumber")
            ),
        });
    }

    RegistryEntry {
        app_name,
        entry_name: value_of(store, "entryName"),
        root_url: value_of(store, "rootUrl"),
        product_id: value_of(store, "productId"),
        template,
    }
}

pub fn registry_path(ctx: &GenerationContext) -> PathBuf {
    ctx.content_build_root().join(REGISTRY_FILE)
}

/// Reads the registry array; anything unreadable degrades to an empty registry.
pub fn load_registry(path: &Path) -> Vec<Value> {
    let content = match read_optional(path) {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::warn!("Could not read {}. Creating new registry.", path.display());
            return Vec::new();
        }
        Err(err) => {
            log::warn!("Could not read {}: {err}. Creating new registry.", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            log::warn!("Registry file exists but is not an array. Initializing as empty array.");
            Vec::new()
        }
        Err(err) => {
            log::warn!("Could not parse {}: {err}. Creating new registry.", path.display());
            Vec::new()
        }
    }
}

/// Fails when the new application collides with an existing entry.
///
/// Runs before any file is written so a conflict leaves the checkout untouched.
pub fn ensure_unique(ctx: &GenerationContext) -> Result<()> {
    let registry = load_registry(&registry_path(ctx));
    let candidate = serde_json::to_value(build_registry_entry(ctx.store()))?;
    let reasons = check_for_duplicates(&registry, &candidate);
    if reasons.is_empty() {
        return Ok(());
    }
    let err = Error::DuplicateRegistryEntry { reasons };
    log::error!("{err}");
    Err(err)
}

/// Appends the new application to the registry.
///
/// Dry runs record the registry as modified without reading it.
pub fn update_registry(ctx: &mut GenerationContext) -> Result<()> {
    let path = registry_path(ctx);
    let mut registry = if ctx.dry_run() {
        Vec::new()
    } else {
        log::info!("Updating registry file at: {}", path.display());
        load_registry(&path)
    };
    registry.push(serde_json::to_value(build_registry_entry(ctx.store()))?);
    ctx.write_json(path, &Value::Array(registry))
}

fn try_update_allowlist(ctx: &mut GenerationContext, is_new_app: bool) -> Result<()> {
    let slack_group = ctx.store().get_str("slackGroup").unwrap_or("none").to_string();
    if slack_group == "none" || !is_new_app {
        return Ok(());
    }
    let folder_name = ctx.store().get_str("folderName").unwrap_or_default().to_string();
    let root_folder = folder_name.split('/').next().unwrap_or_default().to_string();

    let path = ctx.resolve(ALLOWLIST_FILE);
    let Some(content) = ctx.read_to_string(&path)? else {
        log::warn!("Could not update allow-list: {} does not exist", path.display());
        return Ok(());
    };
    let mut config: Value = serde_json::from_str(&content)?;
    let apps = config
        .get_mut("apps")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| anyhow::anyhow!("{} has no \"apps\" array", path.display()))?;

    if apps.iter().any(|app| app.get("rootFolder").and_then(Value::as_str) == Some(root_folder.as_str())) {
        log::debug!("{root_folder} is already in the allow-list");
        return Ok(());
    }
    apps.push(json!({ "rootFolder": root_folder, "slackGroup": slack_group }));
    ctx.write_json(path, &config)
}

/// Adds the application's root folder to the change-build allow-list.
///
/// Only new application folders with a notification group are added.
pub fn update_allowlist(ctx: &mut GenerationContext, is_new_app: bool) {
    if let Err(err) = try_update_allowlist(ctx, is_new_app) {
        log::warn!("Could not write to {ALLOWLIST_FILE}. {err}");
    }
}
