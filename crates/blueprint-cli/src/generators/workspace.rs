//! Greenfield generator: the whole `architecture/` folder.

use blueprint_core::domain::{Action, GeneratorDefinition, Question, string_empty, validator};

pub const NAME: &str = "Workspace";

pub fn definition() -> GeneratorDefinition {
    GeneratorDefinition::new(NAME, "Create a new Structurizr workspace")
        .question("workspaceName", |_, _| {
            Question::input("Workspace name:").with_validator(validator(|input, _| string_empty(input)))
        })
        .question("workspaceDescription", |_, _| {
            Question::input("Workspace description:").with_default("Architecture of the system")
        })
        .action(Action::add_many("", "templates/architecture/**/*").skip_if_exists(true))
}
