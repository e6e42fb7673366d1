//! Interactive prompter backed by `dialoguer`.
//!
//! Input questions are re-asked until their validator passes; the validator
//! message is shown under the prompt.

use serde_json::Value;

use blueprint_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{Answers, Question},
    error::BlueprintResult,
};

use crate::error::{CliError, CliResult};

/// Pick the prompter for this run: answers file if given, else the terminal.
pub fn select_prompter(answers: Option<&std::path::Path>) -> CliResult<Box<dyn Prompter>> {
    if let Some(path) = answers {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::AnswersFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let preset = blueprint_adapters::PresetPrompter::from_json(&raw).map_err(|e| {
            CliError::AnswersFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        return Ok(Box::new(preset));
    }

    terminal()
}

#[cfg(feature = "interactive")]
fn terminal() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(TerminalPrompter::default()))
}

#[cfg(not(feature = "interactive"))]
fn terminal() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Run a blocking terminal read without starving the async runtime.
///
/// On the multi-threaded runtime the worker hands its queued tasks to another
/// thread first; elsewhere the closure simply runs in place.
#[cfg(feature = "interactive")]
fn off_runtime<T>(read: impl FnOnce() -> T) -> T {
    use tokio::runtime::{Handle, RuntimeFlavor};

    match Handle::try_current().map(|handle| handle.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(read),
        _ => read(),
    }
}

/// Asks on the controlling terminal.
#[cfg(feature = "interactive")]
#[derive(Default)]
pub struct TerminalPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn ask(&self, key: &str, question: &Question, answers: &Answers) -> BlueprintResult<Value> {
        use dialoguer::{Input, Select};

        let failed = |e: dialoguer::Error| ApplicationError::PromptFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };

        match question {
            Question::Input {
                message, default, ..
            } => {
                let mut input = Input::<String>::with_theme(&self.theme)
                    .with_prompt(message.as_str())
                    .allow_empty(true);
                if let Some(default) = default {
                    input = input.default(default.clone());
                }
                let input = input.validate_with(|candidate: &String| -> Result<(), String> {
                    question
                        .validate(candidate, answers)
                        .map_err(|e| e.to_string())
                });
                let text = off_runtime(|| input.interact_text()).map_err(failed)?;
                Ok(Value::String(text))
            }
            Question::Select { message, choices } => {
                if choices.is_empty() {
                    return Err(ApplicationError::PromptFailed {
                        key: key.to_string(),
                        reason: "there is nothing to choose from".into(),
                    }
                    .into());
                }
                let select = Select::with_theme(&self.theme)
                    .with_prompt(message.as_str())
                    .items(choices.as_slice())
                    .default(0);
                let index = off_runtime(|| select.interact()).map_err(failed)?;
                Ok(Value::String(choices[index].clone()))
            }
            Question::Resolved { value } => Ok(value.clone()),
        }
    }
}
