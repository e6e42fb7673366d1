//! Containers, filed under the folder of the system they belong to.

use blueprint_core::domain::{
    Action, GeneratorDefinition, Question, chain_validators, duplicated_system_name,
    string_empty, validate_duplicated_elements, validator,
};

use super::system_question;

pub fn definition() -> GeneratorDefinition {
    GeneratorDefinition::new("Container", "Create a new container")
        .question("systemName", |ctx, _| system_question(ctx))
        .question("containerName", |ctx, _| {
            Question::input("Container name:").with_validator(chain_validators([
                validator(|input, _| string_empty(input)),
                validator(duplicated_system_name),
                validate_duplicated_elements(ctx.workspace.as_deref()),
            ]))
        })
        .question("containerDescription", |_, _| {
            Question::input("Container description:").with_default("")
        })
        .question("containerTechnology", |_, _| {
            Question::input("Container technology:").with_default("")
        })
        .action(Action::add(
            "containers/{{kebabCase systemName}}/{{kebabCase containerName}}.dsl",
            "templates/container/container.dsl",
        ))
}
