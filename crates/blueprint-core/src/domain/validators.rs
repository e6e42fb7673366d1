//! Prompt validators.
//!
//! Pure functions of the candidate, the answers given so far, and whatever
//! context was captured when the validator was built. A failure is shown
//! inline by the prompt and the user is asked again; it never aborts a run.

use std::{collections::HashSet, sync::Arc};

use thiserror::Error;

use crate::domain::{
    entities::{
        generator::{Answers, Validator},
        workspace::{ModelElement, Workspace},
    },
    naming::normalize_name,
    workspace_query::{ElementFilter, all_system_elements},
};

/// Answer key holding the owning system's name.
pub const SYSTEM_NAME_KEY: &str = "systemName";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A value is required")]
    Empty,

    #[error("System name \"{name}\" already exists")]
    DuplicatedSystemName { name: String },

    #[error("Element with name \"{name}\" already exists.")]
    DuplicatedElement { name: String },

    #[error("View with name \"{name}\" already exists.")]
    DuplicatedView { name: String },

    #[error("System \"{name}\" does not exist in the workspace.")]
    SystemNotFound { name: String },
}

/// Wrap a closure as a shareable [`Validator`].
pub fn validator<F>(check: F) -> Validator
where
    F: Fn(&str, &Answers) -> Result<(), ValidationError> + Send + Sync + 'static,
{
    Arc::new(check)
}

/// Passes iff the input is non-empty.
pub fn string_empty(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Rejects a container named like the system it belongs to.
pub fn duplicated_system_name(input: &str, answers: &Answers) -> Result<(), ValidationError> {
    match answers.get_str(SYSTEM_NAME_KEY) {
        Some(system) if normalize_name(input) == normalize_name(system) => {
            Err(ValidationError::DuplicatedSystemName {
                name: input.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Rejects names already used by any model element, containers included.
///
/// The name set is computed once, here; the returned validator only does
/// lookups.
pub fn validate_duplicated_elements(workspace: Option<&Workspace>) -> Validator {
    let taken: HashSet<String> = all_system_elements(workspace, ElementFilter::everything())
        .iter()
        .map(|elm| normalize_name(elm.name()))
        .collect();

    validator(move |input, _| {
        if taken.contains(&normalize_name(input)) {
            return Err(ValidationError::DuplicatedElement {
                name: input.to_string(),
            });
        }
        Ok(())
    })
}

/// Rejects keys already used by any view.
pub fn validate_duplicated_views(workspace: Option<&Workspace>) -> Validator {
    let taken: HashSet<String> = workspace
        .map(|ws| ws.views.all().map(|view| normalize_name(&view.key)).collect())
        .unwrap_or_default();

    validator(move |input, _| {
        if taken.contains(&normalize_name(input)) {
            return Err(ValidationError::DuplicatedView {
                name: input.to_string(),
            });
        }
        Ok(())
    })
}

/// Run validators in order and stop at the first failure.
pub fn chain_validators(validators: impl IntoIterator<Item = Validator>) -> Validator {
    let validators: Vec<Validator> = validators.into_iter().collect();
    validator(move |input, answers| {
        validators
            .iter()
            .try_for_each(|check| check(input, answers))
    })
}
