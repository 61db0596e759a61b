//! Executes a single field prompt through a [`PromptProvider`]

use super::interface::{
    ConfirmationConfig, PromptProvider, SingleChoiceConfig, TextPromptConfig,
};
use crate::{
    config::{Field, FieldKind},
    error::{Error, Result},
    store::{display_value, is_truthy},
};
use serde_json::Value;

/// Turns a field plus its computed default into a provider call.
pub struct PromptHandler<'a> {
    provider: &'a dyn PromptProvider,
}

impl<'a> PromptHandler<'a> {
    pub fn new(provider: &'a dyn PromptProvider) -> Self {
        Self { provider }
    }

    /// Asks for `field` and returns the raw, unfiltered answer.
    pub fn create_prompt(&self, field: &Field, default: Option<&Value>) -> Result<Value> {
        match field.kind {
            FieldKind::Text => self.prompt_text(field, default),
            FieldKind::Boolean => self.prompt_confirmation(field, default),
            FieldKind::SingleChoice => self.prompt_single_choice(field, default),
        }
    }

    fn prompt_text(&self, field: &Field, default: Option<&Value>) -> Result<Value> {
        let config = TextPromptConfig {
            name: field.name.to_string(),
            prompt: field.message.to_string(),
            default: default.map(display_value),
        };
        Ok(Value::String(self.provider.prompt_text(&config)?))
    }

    fn prompt_confirmation(&self, field: &Field, default: Option<&Value>) -> Result<Value> {
        let config = ConfirmationConfig {
            name: field.name.to_string(),
            prompt: field.message.to_string(),
            default: default.is_some_and(is_truthy),
        };
        Ok(Value::Bool(self.provider.prompt_confirmation(&config)?))
    }

    fn prompt_single_choice(&self, field: &Field, default: Option<&Value>) -> Result<Value> {
        let default_index = default
            .and_then(Value::as_str)
            .and_then(|value| field.choices.iter().position(|choice| choice.value == value));
        let config = SingleChoiceConfig {
            name: field.name.to_string(),
            prompt: field.message.to_string(),
            choices: field.choices.iter().map(|choice| choice.label.to_string()).collect(),
            default_index,
        };
        let index = self.provider.prompt_single_choice(&config)?;
        let choice = field.choices.get(index).ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Choice {index} is out of range for {}", field.name))
        })?;
        Ok(Value::String(choice.value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::find_field, prompt::AutomaticPrompter};
    use serde_json::json;

    #[test]
    fn choice_answers_are_stored_as_values() {
        let prompter = AutomaticPrompter::new().with_choice_response(
            "templateType",
            "Form with 4 pages (name, identification, mailing address, phone and email)",
        );
        let handler = PromptHandler::new(&prompter);
        let field = find_field("templateType").unwrap();
        let answer = handler.create_prompt(field, Some(&json!("WITH_1_PAGE"))).unwrap();
        assert_eq!(answer, json!("WITH_4_PAGES"));
    }

    #[test]
    fn default_choice_is_preselected() {
        let prompter = AutomaticPrompter::new();
        let handler = PromptHandler::new(&prompter);
        let field = find_field("templateType").unwrap();
        let answer = handler.create_prompt(field, Some(&json!("FORM_ENGINE"))).unwrap();
        assert_eq!(answer, json!("FORM_ENGINE"));
    }

    #[test]
    fn booleans_and_text_use_defaults() {
        let prompter = AutomaticPrompter::new();
        let handler = PromptHandler::new(&prompter);
        let is_form = find_field("isForm").unwrap();
        assert_eq!(handler.create_prompt(is_form, Some(&json!(true))).unwrap(), json!(true));
        let slack = find_field("slackGroup").unwrap();
        assert_eq!(handler.create_prompt(slack, Some(&json!("none"))).unwrap(), json!("none"));
    }
}
