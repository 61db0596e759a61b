//! The field tables for plain applications and forms.

use crate::{
    config::{
        field::{DefaultScope, Field},
        filters::{folder_name_filter, kebab, root_url_filter},
        types::{Choice, FieldDefault},
    },
    constants::{template_types, CONTENT_REPO_DIR_NAME},
    validation::fields::{
        validate_app_name, validate_expiration_date, validate_folder_name,
        validate_entry_name_spaces, validate_form_number, validate_omb_number,
        validate_respondent_burden, validate_root_url, validate_slack_group_strict,
    },
};
use chrono::{Local, Months, NaiveDate};
use serde_json::Value;

pub const TEMPLATE_CHOICES: &[Choice] = &[
    Choice {
        label: "Form with 1 page (name and date of birth)",
        value: template_types::WITH_1_PAGE,
    },
    Choice {
        label: "Form with 4 pages (name, identification, mailing address, phone and email)",
        value: template_types::WITH_4_PAGES,
    },
    Choice { label: "Form engine application", value: template_types::FORM_ENGINE },
];

fn kebab_app_name(scope: &DefaultScope<'_>) -> Option<String> {
    scope.get_str("appName").map(kebab).filter(|name| !name.is_empty())
}

fn default_folder_name(scope: &DefaultScope<'_>) -> Option<Value> {
    kebab_app_name(scope).map(Value::String)
}

fn default_entry_name(scope: &DefaultScope<'_>) -> Option<Value> {
    scope
        .get_str("folderName")
        .map(kebab)
        .filter(|name| !name.is_empty())
        .or_else(|| kebab_app_name(scope))
        .map(Value::String)
}

fn default_root_url(scope: &DefaultScope<'_>) -> Option<Value> {
    let path = match scope.get_str("folderName") {
        Some(folder) => folder
            .split('/')
            .map(kebab)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/"),
        None => kebab_app_name(scope)?,
    };
    Some(Value::String(format!("/{path}")))
}

fn default_content_repo_location(scope: &DefaultScope<'_>) -> Option<Value> {
    let root = scope.destination_root();
    let parent = root.parent().unwrap_or(root);
    Some(Value::String(parent.join(CONTENT_REPO_DIR_NAME).display().to_string()))
}

fn default_product_id(_: &DefaultScope<'_>) -> Option<Value> {
    Some(Value::String(uuid::Uuid::new_v4().to_string()))
}

fn default_tracking_prefix(scope: &DefaultScope<'_>) -> Option<Value> {
    let prefix = match scope.get_str("entryName") {
        Some(entry) => format!("{entry}-"),
        None => match kebab_app_name(scope) {
            Some(name) => format!("{name}-"),
            None => "form-".to_string(),
        },
    };
    Some(Value::String(prefix))
}

/// One year after `today`, clamped to the end of the month.
pub fn expiration_date_after(today: NaiveDate) -> String {
    let expires = today.checked_add_months(Months::new(12)).unwrap_or(today);
    expires.format("%-m/%-d/%Y").to_string()
}

fn default_expiration_date(_: &DefaultScope<'_>) -> Option<Value> {
    Some(Value::String(expiration_date_after(Local::now().date_naive())))
}

fn never(_: &DefaultScope<'_>) -> bool {
    false
}

pub static APP_FIELDS: &[Field] = &[
    Field::text(
        "appName",
        "What's the name of your application? This will be the default page title. Examples: '21P-530 Burial benefits form' or 'GI Bill School Feedback Tool'",
    )
    .with_default(FieldDefault::Text("A New Form"))
    .with_validator(validate_app_name)
    .required(),
    Field::text(
        "folderName",
        "What folder in `src/applications/` should your app live in? This can be a subfolder. Examples: 'burials' or 'edu-benefits/0993'",
    )
    .with_default(FieldDefault::Computed(default_folder_name))
    .with_validator(validate_folder_name)
    .with_filter(folder_name_filter)
    .required(),
    Field::text(
        "entryName",
        "What should be the name of your app's entry bundle? Examples: '0993-edu-benefits' or 'feedback-tool'",
    )
    .with_default(FieldDefault::Computed(default_entry_name))
    .with_validator(validate_entry_name_spaces)
    .required(),
    Field::text(
        "rootUrl",
        "What's the root url for this app? Examples: '/gi-bill-comparison-tool' or '/education/opt-out-information-sharing/opt-out-form-0993'",
    )
    .with_default(FieldDefault::Computed(default_root_url))
    .with_validator(validate_root_url)
    .with_filter(root_url_filter)
    .required(),
    Field::boolean("isForm", "Is this a form app?", true).required(),
    Field::text("contentRepoLocation", "Where can I find the vagov-content repo?")
        .with_default(FieldDefault::Computed(default_content_repo_location)),
    Field::text(
        "slackGroup",
        "What Slack user group should be notified for CI failures on the `main` branch? Example: '@my-group' or 'none'",
    )
    .with_default(FieldDefault::Text("none"))
    .with_validator(validate_slack_group_strict),
    Field::text("productId", "Product ID (generated automatically)")
        .with_default(FieldDefault::Computed(default_product_id))
        .shown_when(never),
];

pub static FORM_FIELDS: &[Field] = &[
    Field::text("formNumber", "What's the form number for this form? Examples: '22-0993' or '21P-530'")
        .with_validator(validate_form_number)
        .required(),
    Field::text(
        "benefitDescription",
        "What's the benefit description for this form? Examples: 'education benefits' or 'disability claims increase'",
    )
    .with_default(FieldDefault::Text("benefits")),
    Field::text("trackingPrefix", "What's the Google Analytics event prefix you want to use? Examples: 'burials-530-' or 'edu-0993-'")
        .with_default(FieldDefault::Computed(default_tracking_prefix)),
    Field::text("respondentBurden", "What's the respondent burden of this form in minutes?")
        .with_default(FieldDefault::Text("30"))
        .with_validator(validate_respondent_burden),
    Field::text("ombNumber", "What's the OMB control number for this form? Example: '2900-0797'")
        .with_default(FieldDefault::Text("1234-5678"))
        .with_validator(validate_omb_number),
    Field::text(
        "expirationDate",
        "What's the OMB expiration date (in M/D/YYYY format) for this form? Example: '1/31/2019'",
    )
    .with_default(FieldDefault::Computed(default_expiration_date))
    .with_validator(validate_expiration_date),
    Field::boolean("usesVetsJsonSchema", "Does this form use vets-json-schema? (JSON schemas defined in separate repository)", false),
    Field::boolean("usesMinimalHeader", "Use minimal header (minimal form flow) pattern?", true),
    Field::boolean("addToMyVaSip", "Add this form to the My VA saved-in-progress forms list?", true),
    Field::text("templateType", "Which form template would you like to start with?")
        .with_default(FieldDefault::Text(template_types::WITH_1_PAGE))
        .with_choices(TEMPLATE_CHOICES),
];

/// App fields followed by form fields, in prompt order.
pub fn all_fields() -> impl Iterator<Item = &'static Field> {
    APP_FIELDS.iter().chain(FORM_FIELDS.iter())
}

/// The fields relevant to an application of the given variant.
pub fn fields_for(is_form: bool) -> Vec<&'static Field> {
    if is_form {
        all_fields().collect()
    } else {
        APP_FIELDS.iter().collect()
    }
}

pub fn find_field(name: &str) -> Option<&'static Field> {
    all_fields().find(|field| field.name == name)
}
