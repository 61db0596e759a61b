//! Templates compiled into the binary, keyed by template id.
//!
//! Ids without an extension suffix are rendered; the fixtures and unit
//! specs under `form/tests/` are copied verbatim.

macro_rules! bundled {
    ($($id:literal => $file:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!("../../templates/", $file)))),*]
    };
}

pub static BUNDLED_TEMPLATES: &[(&str, &str)] = bundled! {
    "shared/manifest.json" => "shared/manifest.json.j2",
    "shared/app-entry.jsx" => "shared/app-entry.jsx.j2",
    "shared/README.md" => "shared/README.md.j2",
    "shared/README-form-engine.md" => "shared/README-form-engine.md.j2",
    "app/entry.scss" => "app/entry.scss.j2",
    "app/reducer.js" => "app/reducer.js.j2",
    "app/App.jsx" => "app/App.jsx.j2",
    "app/routes.jsx" => "app/routes.jsx.j2",
    "app/cypress.spec.js" => "app/cypress.spec.js.j2",
    "form/entry.scss" => "form/entry.scss.j2",
    "form/reducer.js" => "form/reducer.js.j2",
    "form/App.jsx" => "form/App.jsx.j2",
    "form/routes.jsx" => "form/routes.jsx.j2",
    "form/IntroductionPage.jsx" => "form/IntroductionPage.jsx.j2",
    "form/ConfirmationPage.jsx" => "form/ConfirmationPage.jsx.j2",
    "form/constants.js" => "form/constants.js.j2",
    "form/form.js" => "form/form.js.j2",
    "form/pages/nameAndDateOfBirth.js" => "form/pages/nameAndDateOfBirth.js.j2",
    "form/pages/identificationInformation.js" => "form/pages/identificationInformation.js.j2",
    "form/pages/mailingAddress.js" => "form/pages/mailingAddress.js.j2",
    "form/pages/phoneAndEmailAddress.js" => "form/pages/phoneAndEmailAddress.js.j2",
    "form/cypress.spec.js" => "form/cypress.spec.js.j2",
    "form/formEngine.jsx" => "form/formEngine.jsx.j2",
    "content/page.md" => "content/page.md.j2",
};

pub static RAW_FILES: &[(&str, &str)] = bundled! {
    "form/tests/containers/ConfirmationPage.unit.spec.jsx" => "form/tests/containers/ConfirmationPage.unit.spec.jsx",
    "form/tests/containers/IntroductionPage.unit.spec.jsx" => "form/tests/containers/IntroductionPage.unit.spec.jsx",
    "form/tests/fixtures/data/minimal-test.json" => "form/tests/fixtures/data/minimal-test.json",
    "form/tests/fixtures/mocks/local-mock-responses.js" => "form/tests/fixtures/mocks/local-mock-responses.js",
    "form/tests/fixtures/mocks/user.json" => "form/tests/fixtures/mocks/user.json",
};

/// Contents of a file that is copied without rendering.
pub fn raw_file(id: &str) -> Option<&'static str> {
    RAW_FILES.iter().find(|(name, _)| *name == id).map(|(_, contents)| *contents)
}
