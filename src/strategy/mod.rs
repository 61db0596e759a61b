//! Variant-specific generation: plain applications and forms.
//!
//! - `app`: plain React applications
//! - `form`: form applications, including the form-engine variant

pub mod app;
pub mod form;

pub use app::AppStrategy;
pub use form::FormStrategy;

use crate::{
    cli::context::GenerationContext,
    config::Field,
    constants::{template_types, APPLICATIONS_DIR, FORM_ENGINE_APPLICATIONS_DIR},
    error::Result,
    store::ValueStore,
};
use std::path::PathBuf;

pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Fields asked after the application fields.
    fn additional_fields(&self) -> Vec<&'static Field> {
        Vec::new()
    }

    /// Derives props once every field has a value.
    fn process_prompt_results(&self, _store: &mut ValueStore) {}

    /// Monorepo-relative folder of the generated application.
    fn app_path(&self, store: &ValueStore) -> String {
        app_path(store)
    }

    fn generate_files(&self, ctx: &mut GenerationContext) -> Result<()>;

    /// Best-effort updates of files shared with other applications.
    fn update_external_files(&self, _ctx: &mut GenerationContext) {}

    fn completion_message(&self, store: &ValueStore) -> String;
}

pub fn select_strategy(is_form: bool) -> Box<dyn Strategy> {
    if is_form {
        Box::new(FormStrategy)
    } else {
        Box::new(AppStrategy)
    }
}

fn is_form_engine(store: &ValueStore) -> bool {
    store.get_str("templateType") == Some(template_types::FORM_ENGINE)
}

/// Form-engine applications live in their own subtree.
pub fn app_path(store: &ValueStore) -> String {
    let folder = store.get_str("folderName").unwrap_or_default();
    if is_form_engine(store) {
        format!("{FORM_ENGINE_APPLICATIONS_DIR}/{folder}")
    } else {
        format!("{APPLICATIONS_DIR}/{folder}")
    }
}

/// Manifest, entry point and README common to every variant.
///
/// Form-engine applications get their entry point from the form strategy.
pub fn generate_shared_files(ctx: &mut GenerationContext) -> Result<()> {
    let app = ctx.resolve(app_path(ctx.store()));
    let form_engine = is_form_engine(ctx.store());

    ctx.copy_template("shared/manifest.json", app.join("manifest.json"))?;
    if !form_engine {
        ctx.copy_template("shared/app-entry.jsx", app.join("app-entry.jsx"))?;
    }
    let readme = if form_engine { "shared/README-form-engine.md" } else { "shared/README.md" };
    ctx.copy_template(readme, app.join("README.md"))
}

fn content_page_path(ctx: &GenerationContext) -> Option<PathBuf> {
    let content_repo = PathBuf::from(ctx.store().get_str("contentRepoLocation")?);
    if !content_repo.is_dir() {
        log::debug!("No content repository at {}, skipping page", content_repo.display());
        return None;
    }
    let root_url = ctx.store().get_str("rootUrl")?;
    Some(content_repo.join(format!("pages{root_url}.md")))
}

/// Writes the markdown page stub when the content repository is checked out.
pub fn write_content_page(ctx: &mut GenerationContext) {
    let Some(page) = content_page_path(ctx) else {
        return;
    };
    if let Err(err) = ctx.copy_template("content/page.md", page) {
        log::warn!("Could not write content page: {err}");
    }
}
