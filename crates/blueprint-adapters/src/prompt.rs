//! Non-interactive prompter.
//!
//! Answers come from a map supplied up front (`--answers FILE`). There is
//! nobody to re-ask, so a value that fails its validator aborts the run.

use serde_json::{Map, Value};
use tracing::debug;

use blueprint_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{Answers, Question},
    error::BlueprintResult,
};

/// Answers questions from a pre-supplied map.
///
/// `Input` questions fall back to their default when the key is absent.
/// `Select` answers must be one of the choices.
#[derive(Debug, Clone, Default)]
pub struct PresetPrompter {
    values: Map<String, Value>,
}

impl PresetPrompter {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Parse a JSON object of answers.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::new)
    }
}

impl Prompter for PresetPrompter {
    fn ask(&self, key: &str, question: &Question, answers: &Answers) -> BlueprintResult<Value> {
        let value = match (self.values.get(key), question) {
            (Some(value), _) => value.clone(),
            (None, Question::Input { default: Some(default), .. }) => {
                debug!(key, "using default answer");
                Value::String(default.clone())
            }
            (None, _) => {
                return Err(ApplicationError::MissingAnswer {
                    key: key.to_string(),
                }
                .into());
            }
        };

        let text = match &value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if let Question::Select { choices, .. } = question {
            if !choices.contains(&text) {
                return Err(ApplicationError::PromptFailed {
                    key: key.to_string(),
                    reason: format!("'{text}' is not one of: {}", choices.join(", ")),
                }
                .into());
            }
        }

        question
            .validate(&text, answers)
            .map_err(|reason| ApplicationError::AnswerRejected {
                key: key.to_string(),
                reason,
            })?;

        Ok(value)
    }
}
