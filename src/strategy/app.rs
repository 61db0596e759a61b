use super::Strategy;
use crate::{cli::context::GenerationContext, error::Result, store::ValueStore};

/// Plain React application without form scaffolding.
pub struct AppStrategy;

impl Strategy for AppStrategy {
    fn name(&self) -> &'static str {
        "app"
    }

    fn generate_files(&self, ctx: &mut GenerationContext) -> Result<()> {
        let app = ctx.resolve(self.app_path(ctx.store()));
        let entry_name = ctx.store().get_str("entryName").unwrap_or_default().to_string();

        ctx.copy_template("app/entry.scss", app.join(format!("sass/{entry_name}.scss")))?;
        ctx.copy_template("app/reducer.js", app.join("reducers/index.js"))?;
        ctx.copy_template("app/App.jsx", app.join("containers/App.jsx"))?;
        ctx.copy_template("app/routes.jsx", app.join("routes.jsx"))?;
        ctx.copy_template(
            "app/cypress.spec.js",
            app.join(format!("tests/{entry_name}.cypress.spec.js")),
        )
    }

    fn completion_message(&self, store: &ValueStore) -> String {
        if store.has_value("contentRepoLocation") {
            "Don't forget to make a pull request for vagov-content!".to_string()
        } else {
            format!(
                "Don't forget to make a markdown file in the vagov-content repo at pages{}.md!",
                store.get_str("rootUrl").unwrap_or_default()
            )
        }
    }
}
