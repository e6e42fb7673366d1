//! Software systems: one file under `systems/`, an empty containers folder
//! and an `!include` in the model.

use blueprint_core::{
    domain::{
        Action, GeneratorDefinition, Question, chain_validators, string_empty,
        validate_duplicated_elements, validator,
    },
    error::BlueprintResult,
};

use super::marker;

pub fn definition() -> BlueprintResult<GeneratorDefinition> {
    Ok(
        GeneratorDefinition::new("Software System", "Create a new software system")
            .question("systemName", |ctx, _| {
                Question::input("Software system name:").with_validator(chain_validators([
                    validator(|input, _| string_empty(input)),
                    validate_duplicated_elements(ctx.workspace.as_deref()),
                ]))
            })
            .question("systemDescription", |_, _| {
                Question::input("Software system description:").with_default("")
            })
            .action(Action::add(
                "systems/{{kebabCase systemName}}.dsl",
                "templates/system/system.dsl",
            ))
            .action(
                Action::add(
                    "containers/{{kebabCase systemName}}/index.dsl",
                    "templates/system/containers.dsl",
                )
                .skip_if_exists(true),
            )
            .action(Action::append(
                "workspace.dsl",
                "templates/system/include.hbs",
                marker("# Systems")?,
            )),
    )
}
