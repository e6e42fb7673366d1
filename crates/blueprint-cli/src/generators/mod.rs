//! Built-in generators.
//!
//! Every action path is relative to the workspace folder, except for the
//! Workspace generator which runs before that folder exists and writes
//! `architecture/` under the destination.

use regex::Regex;

use blueprint_core::{
    domain::{
        GeneratorContext, GeneratorDefinition, Question, SystemSource,
        naming::normalize_name, resolve_system_question, string_empty, validator,
    },
    error::{BlueprintError, BlueprintResult},
};

pub mod constant;
pub mod container;
pub mod system;
pub mod view;
pub mod workspace;

/// Key under which the menu choice is asked, so `--answers` can carry it.
pub const MENU_KEY: &str = "generator";
pub const MENU_MESSAGE: &str = "Create a new element:";

const SYSTEM_MESSAGE: &str = "Software system:";

/// Generators offered once a workspace exists, in menu order.
pub fn element_generators() -> BlueprintResult<Vec<GeneratorDefinition>> {
    Ok(vec![
        constant::definition()?,
        system::definition()?,
        container::definition(),
        view::definition()?,
    ])
}

/// Every generator, Workspace first.
pub fn all() -> BlueprintResult<Vec<GeneratorDefinition>> {
    let mut generators = vec![workspace::definition()];
    generators.extend(element_generators()?);
    Ok(generators)
}

/// Look a generator up by name; case, spacing and punctuation are ignored.
pub fn find(generators: Vec<GeneratorDefinition>, name: &str) -> Option<GeneratorDefinition> {
    let wanted = normalize_name(name);
    generators
        .into_iter()
        .find(|generator| normalize_name(generator.name()) == wanted)
}

/// Line-anchored match on a marker comment such as `# Constants`.
fn marker(comment: &str) -> BlueprintResult<Regex> {
    Regex::new(&format!(r"^\s*{}\s*$", regex::escape(comment))).map_err(|e| {
        BlueprintError::Internal {
            message: format!("marker /{comment}/ does not compile: {e}"),
        }
    })
}

/// "Which system" question, from the parsed model or the workspace folder.
///
/// Without either there is nothing to choose from, so the name is typed in
/// and must not be empty.
fn system_question(ctx: &GeneratorContext) -> Question {
    let source = match (ctx.workspace.as_deref(), ctx.workspace_folder.as_deref()) {
        (Some(workspace), _) => SystemSource::Parsed(workspace),
        (None, Some(folder)) => SystemSource::Path(folder),
        (None, None) => {
            return Question::input(SYSTEM_MESSAGE)
                .with_validator(validator(|input, _| string_empty(input)));
        }
    };
    resolve_system_question(source, SYSTEM_MESSAGE)
}
