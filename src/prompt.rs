use inquire::validator::Validation;
use inquire::{Confirm, MultiSelect, Select, Text};

use crate::error::GrogError;

/// Validator signature shared by the questionnaire and the prompt
/// backends: `Err` carries the message shown before re-prompting.
pub type Validator = fn(&str) -> Result<(), String>;

/// Terminal interaction behind a narrow seam so the questionnaire can
/// be driven by a scripted backend in tests.
pub trait Prompter {
    fn select(
        &mut self,
        message: &str,
        help: Option<&str>,
        options: &[String],
    ) -> Result<String, GrogError>;

    fn multi_select(
        &mut self,
        message: &str,
        help: Option<&str>,
        options: &[String],
    ) -> Result<Vec<String>, GrogError>;

    fn text(
        &mut self,
        message: &str,
        help: Option<&str>,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> Result<String, GrogError>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, GrogError>;
}

// ── inquire-backed prompter ──────────────────────────────

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        message: &str,
        help: Option<&str>,
        options: &[String],
    ) -> Result<String, GrogError> {
        let mut prompt = Select::new(message, options.to_vec());
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        prompt.prompt().map_err(map_inquire_err)
    }

    fn multi_select(
        &mut self,
        message: &str,
        help: Option<&str>,
        options: &[String],
    ) -> Result<Vec<String>, GrogError> {
        let mut prompt = MultiSelect::new(message, options.to_vec());
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        prompt.prompt().map_err(map_inquire_err)
    }

    fn text(
        &mut self,
        message: &str,
        help: Option<&str>,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> Result<String, GrogError> {
        let mut prompt = Text::new(message);
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        if let Some(validate) = validate {
            prompt = prompt.with_validator(move |input: &str| match validate(input) {
                Ok(()) => Ok(Validation::Valid),
                Err(message) => Ok(Validation::Invalid(message.into())),
            });
        }
        prompt.prompt().map_err(map_inquire_err)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, GrogError> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(map_inquire_err)
    }
}

fn map_inquire_err(e: inquire::InquireError) -> GrogError {
    match e {
        inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted => {
            GrogError::Cancelled
        }
        other => GrogError::Prompt {
            message: other.to_string(),
        },
    }
}
