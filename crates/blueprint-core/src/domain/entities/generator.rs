//! Generator definitions: questions to ask, then actions to run.

use std::{fmt, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{
    entities::{action::Action, workspace::Workspace},
    validators::ValidationError,
};

/// Answers collected so far, keyed by question key.
///
/// Serializes as a plain JSON object so it can be handed straight to the
/// template engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(Map<String, Value>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of an answer; `None` for missing or non-string answers.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Answers {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Predicate over a candidate answer and the answers given before it.
pub type Validator = Arc<dyn Fn(&str, &Answers) -> Result<(), ValidationError> + Send + Sync>;

/// A single prompt, as produced by a question factory.
#[derive(Clone)]
pub enum Question {
    /// Free-text input, re-asked until the validator passes.
    Input {
        message: String,
        default: Option<String>,
        validator: Option<Validator>,
    },
    /// Pick one of a fixed list.
    Select {
        message: String,
        choices: Vec<String>,
    },
    /// Nothing to ask; the answer is already known.
    Resolved { value: Value },
}

impl Question {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            default: None,
            validator: None,
        }
    }

    pub fn select(message: impl Into<String>, choices: Vec<String>) -> Self {
        Self::Select {
            message: message.into(),
            choices,
        }
    }

    pub fn resolved(value: impl Into<Value>) -> Self {
        Self::Resolved {
            value: value.into(),
        }
    }

    /// Attach a default to an `Input`; ignored for other kinds.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        if let Self::Input { default, .. } = &mut self {
            *default = Some(value.into());
        }
        self
    }

    /// Attach a validator to an `Input`; ignored for other kinds.
    pub fn with_validator(mut self, check: Validator) -> Self {
        if let Self::Input { validator, .. } = &mut self {
            *validator = Some(check);
        }
        self
    }

    /// Run the validator (if any) against a candidate.
    pub fn validate(&self, input: &str, answers: &Answers) -> Result<(), ValidationError> {
        match self {
            Self::Input {
                validator: Some(check),
                ..
            } => check(input, answers),
            _ => Ok(()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Input { message, .. } | Self::Select { message, .. } => message.as_str(),
            Self::Resolved { .. } => "",
        }
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input {
                message,
                default,
                validator,
            } => f
                .debug_struct("Input")
                .field("message", message)
                .field("default", default)
                .field("validated", &validator.is_some())
                .finish(),
            Self::Select { message, choices } => f
                .debug_struct("Select")
                .field("message", message)
                .field("choices", choices)
                .finish(),
            Self::Resolved { value } => f.debug_struct("Resolved").field("value", value).finish(),
        }
    }
}

/// What question factories can see besides earlier answers.
#[derive(Debug, Clone, Default)]
pub struct GeneratorContext {
    /// Parsed model, when a JSON export sits next to `workspace.dsl`.
    pub workspace: Option<Arc<Workspace>>,
    /// Folder containing `workspace.dsl`, when one exists.
    pub workspace_folder: Option<PathBuf>,
    /// Root every action path is relative to.
    pub destination: PathBuf,
}

pub type QuestionFactory = Box<dyn Fn(&GeneratorContext, &Answers) -> Question + Send + Sync>;

/// Named unit of questions and actions. Authored once, never mutated.
pub struct GeneratorDefinition {
    name: String,
    description: String,
    questions: Vec<(String, QuestionFactory)>,
    actions: Vec<Action>,
}

impl GeneratorDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            questions: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Append a question. Factories run in declaration order and see every
    /// answer given before them.
    pub fn question<F>(mut self, key: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&GeneratorContext, &Answers) -> Question + Send + Sync + 'static,
    {
        self.questions.push((key.into(), Box::new(factory)));
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> impl Iterator<Item = (&str, &QuestionFactory)> {
        self.questions.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl fmt::Debug for GeneratorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorDefinition")
            .field("name", &self.name)
            .field(
                "questions",
                &self.questions.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .field("actions", &self.actions.len())
            .finish()
    }
}
