//! Prompt provider that answers from a script instead of a terminal.
//!
//! Used for automation and for exercising the interactive flow in tests.
//! Responses are keyed by field name; each scripted text answer is used
//! once, after which the prompt's default is accepted.

use super::interface::*;
use crate::error::{Error, Result};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    choice_responses: HashMap<String, String>,
    confirmation_responses: HashMap<String, bool>,
    asked: RefCell<Vec<String>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer for a field; repeated calls queue retries.
    pub fn with_text_response(self, name: &str, response: &str) -> Self {
        self.text_responses
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .push_back(response.to_string());
        self
    }

    /// Select the choice whose label equals `choice`.
    pub fn with_choice_response(mut self, name: &str, choice: &str) -> Self {
        self.choice_responses.insert(name.to_string(), choice.to_string());
        self
    }

    pub fn with_confirmation_response(mut self, name: &str, response: bool) -> Self {
        self.confirmation_responses.insert(name.to_string(), response);
        self
    }

    /// Field names in the order they were prompted.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn record(&self, name: &str) {
        self.asked.borrow_mut().push(name.to_string());
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.record(&config.name);
        let scripted =
            self.text_responses.borrow_mut().get_mut(&config.name).and_then(VecDeque::pop_front);
        let response = scripted.or_else(|| config.default.clone()).unwrap_or_default();

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.name, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        self.record(&config.name);
        let response = match self.choice_responses.get(&config.name) {
            Some(wanted) => config.choices.iter().position(|c| c == wanted).ok_or_else(|| {
                Error::Other(anyhow::anyhow!(
                    "'{wanted}' is not one of the choices for {}",
                    config.name
                ))
            })?,
            None => config.default_index.unwrap_or(0),
        };

        log::debug!("Auto-answering choice prompt '{}' with option {response}", config.name);
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.record(&config.name);
        let response =
            self.confirmation_responses.get(&config.name).copied().unwrap_or(config.default);

        log::debug!("Auto-answering confirmation '{}' with: {response}", config.name);
        Ok(response)
    }
}
