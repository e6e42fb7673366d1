//! Views, appended to the `views` block of `workspace.dsl`.

use blueprint_core::{
    domain::{
        Action, Answers, GeneratorDefinition, Question, chain_validators,
        naming::to_pascal_case, string_empty,
        validate_duplicated_views, validator,
    },
    error::BlueprintResult,
};

use super::{marker, system_question};

const SYSTEM_LANDSCAPE: &str = "systemLandscape";
const SYSTEM_CONTEXT: &str = "systemContext";
const CONTAINER: &str = "container";

pub fn definition() -> BlueprintResult<GeneratorDefinition> {
    Ok(GeneratorDefinition::new("View", "Create a new view")
        .question("viewType", |_, _| {
            Question::select(
                "View type:",
                [SYSTEM_LANDSCAPE, SYSTEM_CONTEXT, CONTAINER]
                    .map(String::from)
                    .to_vec(),
            )
        })
        .question("systemName", |ctx, answers| {
            if answers.get_str("viewType") == Some(SYSTEM_LANDSCAPE) {
                Question::resolved("")
            } else {
                system_question(ctx)
            }
        })
        .question("viewKey", |ctx, answers| {
            Question::input("View key:")
                .with_default(default_key(answers))
                .with_validator(chain_validators([
                    validator(|input, _| string_empty(input)),
                    validate_duplicated_views(ctx.workspace.as_deref()),
                ]))
        })
        .action(Action::append(
            "workspace.dsl",
            "templates/view/{{viewType}}.hbs",
            marker("# Views")?,
        )))
}

/// `Landscape`, `PaymentsContext` or `PaymentsContainers`.
fn default_key(answers: &Answers) -> String {
    let system = to_pascal_case(answers.get_str("systemName").unwrap_or_default());
    match answers.get_str("viewType") {
        Some(SYSTEM_CONTEXT) => format!("{system}Context"),
        Some(CONTAINER) => format!("{system}Containers"),
        _ => "Landscape".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_follow_the_view_type() {
        let landscape = Answers::new().with("viewType", SYSTEM_LANDSCAPE);
        assert_eq!(default_key(&landscape), "Landscape");

        let context = Answers::new()
            .with("viewType", SYSTEM_CONTEXT)
            .with("systemName", "internet banking");
        assert_eq!(default_key(&context), "InternetBankingContext");

        let container = Answers::new()
            .with("viewType", CONTAINER)
            .with("systemName", "Payments");
        assert_eq!(default_key(&container), "PaymentsContainers");
    }
}
