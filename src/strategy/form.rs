use super::Strategy;
use crate::{
    cli::context::GenerationContext,
    config::{
        filters::{generate_form_id_const, generate_tracking_prefix},
        Field, FORM_FIELDS,
    },
    constants::template_types,
    error::Result,
    patcher::update_form_constants,
    store::ValueStore,
};
use console::style;
use serde_json::Value;
use std::path::Path;

/// Rendered into every standard form, as (template, target below the app folder).
const STANDARD_TEMPLATES: &[(&str, &str)] = &[
    ("form/reducer.js", "reducers/index.js"),
    ("form/App.jsx", "containers/App.jsx"),
    ("form/routes.jsx", "routes.jsx"),
    ("form/IntroductionPage.jsx", "containers/IntroductionPage.jsx"),
    ("form/ConfirmationPage.jsx", "containers/ConfirmationPage.jsx"),
    ("form/constants.js", "constants.js"),
    ("form/form.js", "config/form.js"),
    ("form/pages/nameAndDateOfBirth.js", "pages/nameAndDateOfBirth.js"),
];

/// Unit specs and fixtures copied verbatim.
const STATIC_FILES: &[(&str, &str)] = &[
    (
        "form/tests/containers/ConfirmationPage.unit.spec.jsx",
        "tests/containers/ConfirmationPage.unit.spec.jsx",
    ),
    (
        "form/tests/containers/IntroductionPage.unit.spec.jsx",
        "tests/containers/IntroductionPage.unit.spec.jsx",
    ),
    ("form/tests/fixtures/data/minimal-test.json", "tests/fixtures/data/minimal-test.json"),
    (
        "form/tests/fixtures/mocks/local-mock-responses.js",
        "tests/fixtures/mocks/local-mock-responses.js",
    ),
    ("form/tests/fixtures/mocks/user.json", "tests/fixtures/mocks/user.json"),
];

const ADDITIONAL_PAGES: &[&str] = &["identificationInformation", "mailingAddress", "phoneAndEmailAddress"];

/// Form application built on the platform forms library.
pub struct FormStrategy;

impl FormStrategy {
    fn generate_standard_files(&self, ctx: &mut GenerationContext, app: &Path) -> Result<()> {
        let entry_name = ctx.store().get_str("entryName").unwrap_or_default().to_string();

        ctx.copy_template("form/entry.scss", app.join(format!("sass/{entry_name}.scss")))?;
        for (template, target) in STANDARD_TEMPLATES {
            ctx.copy_template(template, app.join(target))?;
        }
        for (source, target) in STATIC_FILES {
            ctx.copy(source, app.join(target))?;
        }
        ctx.copy_template(
            "form/cypress.spec.js",
            app.join(format!("tests/{entry_name}.cypress.spec.js")),
        )
    }

    fn generate_additional_pages(&self, ctx: &mut GenerationContext, app: &Path) -> Result<()> {
        for page in ADDITIONAL_PAGES {
            ctx.copy_template(&format!("form/pages/{page}.js"), app.join(format!("pages/{page}.js")))?;
        }
        Ok(())
    }
}

impl Strategy for FormStrategy {
    fn name(&self) -> &'static str {
        "form"
    }

    fn additional_fields(&self) -> Vec<&'static Field> {
        FORM_FIELDS.iter().collect()
    }

    fn process_prompt_results(&self, store: &mut ValueStore) {
        if let Some(expiration) = store.get_value("expirationDate").cloned() {
            if !store.has_value("formExpiration") {
                store.set_prop("formExpiration", expiration);
            }
        }

        if let Some(form_number) = store.get_str("formNumber").map(str::to_string) {
            store.set_prop("formIdConst", Value::String(generate_form_id_const(&form_number)));
            if !store.has_value("trackingPrefix") {
                store.set_prop(
                    "trackingPrefix",
                    Value::String(generate_tracking_prefix(&form_number)),
                );
            }
        }

        if !store.has_value("templateType") {
            store.set_prop("templateType", Value::String(template_types::WITH_1_PAGE.to_string()));
        }
    }

    fn generate_files(&self, ctx: &mut GenerationContext) -> Result<()> {
        let app = ctx.resolve(self.app_path(ctx.store()));
        let template_type = ctx.store().get_str("templateType").unwrap_or_default().to_string();

        match template_type.as_str() {
            template_types::WITH_1_PAGE => self.generate_standard_files(ctx, &app),
            template_types::WITH_4_PAGES => {
                self.generate_standard_files(ctx, &app)?;
                self.generate_additional_pages(ctx, &app)
            }
            template_types::FORM_ENGINE => {
                ctx.copy_template("form/formEngine.jsx", app.join("app-entry.jsx"))
            }
            other => {
                log::warn!("Unknown template type '{other}', no form files generated");
                Ok(())
            }
        }
    }

    fn update_external_files(&self, ctx: &mut GenerationContext) {
        update_form_constants(ctx);
    }

    fn completion_message(&self, store: &ValueStore) -> String {
        let value = |key: &str| store.get_str(key).unwrap_or_default().to_string();
        let folder_name = value("folderName");
        let rule = "------------------------------------";
        [
            rule.to_string(),
            style("Commands:").bold().to_string(),
            format!(
                "{}{}",
                style("Site:      ").bold(),
                style(format!("http://localhost:3001{}", value("rootUrl"))).cyan()
            ),
            format!(
                "{}{}",
                style("Watch:     ").bold(),
                style(format!("yarn watch --env entry={}", value("entryName"))).cyan()
            ),
            format!(
                "{}{}",
                style("Mock API:  ").bold(),
                style(format!(
                    "yarn mock-api --responses src/applications/{folder_name}/tests/fixtures/mocks/local-mock-responses.js"
                ))
                .cyan()
            ),
            format!(
                "{}{}",
                style("Unit test: ").bold(),
                style(format!("yarn test:unit --app-folder {folder_name} --log-level all")).cyan()
            ),
            rule.to_string(),
        ]
        .join("\n")
    }
}
