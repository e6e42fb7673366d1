//! `!const` declarations at the top of `workspace.dsl`.

use blueprint_core::{
    domain::{Action, GeneratorDefinition, Question, string_empty, validator},
    error::BlueprintResult,
};

use super::marker;

pub fn definition() -> BlueprintResult<GeneratorDefinition> {
    Ok(
        GeneratorDefinition::new("Constant", "Create a new workspace constant")
            .question("constantName", |_, _| {
                Question::input("Constant:").with_validator(validator(|input, _| string_empty(input)))
            })
            .question("constantValue", |_, _| {
                Question::input("Value:")
                    .with_default("New Value")
                    .with_validator(validator(|input, _| string_empty(input)))
            })
            .action(Action::append(
                "workspace.dsl",
                "templates/constant.hbs",
                marker("# Constants")?,
            )),
    )
}
