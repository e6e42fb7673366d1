//! Source compiler: renders Handlebars sources against the answers.
//!
//! Strict mode is on, so a placeholder naming an answer that was never given
//! is an error instead of an empty string. Output is not HTML-escaped; the
//! targets are DSL files, not web pages.

use handlebars::{Handlebars, handlebars_helper, no_escape};
use serde_json::Value;

use crate::domain::{
    AddAction, AddManyAction, Answers, AppendAction, DomainError,
    naming::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case},
};

handlebars_helper!(kebab_case: |s: str| to_kebab_case(s));
handlebars_helper!(pascal_case: |s: str| to_pascal_case(s));
handlebars_helper!(camel_case: |s: str| to_camel_case(s));
handlebars_helper!(snake_case: |s: str| to_snake_case(s));
handlebars_helper!(upper_case: |s: str| s.to_uppercase());
handlebars_helper!(lower_case: |s: str| s.to_lowercase());

pub struct SourceCompiler {
    registry: Handlebars<'static>,
}

impl SourceCompiler {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);

        registry.register_helper("kebabCase", Box::new(kebab_case));
        registry.register_helper("pascalCase", Box::new(pascal_case));
        registry.register_helper("camelCase", Box::new(camel_case));
        registry.register_helper("snakeCase", Box::new(snake_case));
        registry.register_helper("upperCase", Box::new(upper_case));
        registry.register_helper("lowerCase", Box::new(lower_case));

        Self { registry }
    }

    /// Render an inline source (action option strings).
    pub fn compile(&self, source: &str, answers: &Answers) -> Result<String, DomainError> {
        self.compile_named(source, source, answers)
    }

    /// Render a source, reporting failures under `name` (a template path).
    pub fn compile_named(
        &self,
        name: &str,
        source: &str,
        answers: &Answers,
    ) -> Result<String, DomainError> {
        self.registry
            .render_template(source, answers)
            .map_err(|e| DomainError::TemplateError {
                template: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Render every string inside a structured value, recursively.
    ///
    /// Object keys, numbers, booleans and nulls are left as they are.
    pub fn compile_value(&self, value: &Value, answers: &Answers) -> Result<Value, DomainError> {
        Ok(match value {
            Value::String(s) => Value::String(self.compile(s, answers)?),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.compile_value(item, answers))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), self.compile_value(v, answers)?)))
                    .collect::<Result<_, DomainError>>()?,
            ),
            other => other.clone(),
        })
    }
}

impl Default for SourceCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Action options whose string fields are templates.
///
/// Implementations compile every string field and copy the rest untouched.
pub trait CompileOptions: Sized {
    fn compile_with(&self, compiler: &SourceCompiler, answers: &Answers)
    -> Result<Self, DomainError>;
}

impl CompileOptions for AddAction {
    fn compile_with(
        &self,
        compiler: &SourceCompiler,
        answers: &Answers,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            path: compiler.compile(&self.path, answers)?,
            template_file: compiler.compile(&self.template_file, answers)?,
            skip_if_exists: self.skip_if_exists,
        })
    }
}

impl CompileOptions for AppendAction {
    fn compile_with(
        &self,
        compiler: &SourceCompiler,
        answers: &Answers,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            path: compiler.compile(&self.path, answers)?,
            template_file: compiler.compile(&self.template_file, answers)?,
            pattern: self.pattern.clone(),
        })
    }
}

impl CompileOptions for AddManyAction {
    fn compile_with(
        &self,
        compiler: &SourceCompiler,
        answers: &Answers,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            destination: compiler.compile(&self.destination, answers)?,
            template_files: compiler.compile(&self.template_files, answers)?,
            skip_if_exists: self.skip_if_exists,
        })
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;
    use serde_json::json;

    use super::*;

    fn answers() -> Answers {
        Answers::new()
            .with("constantName", "MaxRetries")
            .with("constantValue", "3")
    }

    #[test]
    fn renders_constant_template() {
        let compiler = SourceCompiler::new();
        let out = compiler
            .compile("Constant: {{constantName}} = {{constantValue}}", &answers())
            .unwrap();
        assert_eq!(out, "Constant: MaxRetries = 3");
    }

    #[test]
    fn missing_answer_is_an_error() {
        let compiler = SourceCompiler::new();
        let err = compiler
            .compile_named("templates/x.hbs", "{{systemName}}", &answers())
            .unwrap_err();
        assert!(matches!(err, DomainError::TemplateError { template, .. } if template == "templates/x.hbs"));
    }

    #[test]
    fn output_is_not_html_escaped() {
        let compiler = SourceCompiler::new();
        let answers = Answers::new().with("value", "\"a\" <b> & c");
        assert_eq!(
            compiler.compile("{{value}}", &answers).unwrap(),
            "\"a\" <b> & c"
        );
    }

    #[test]
    fn case_helpers_are_registered() {
        let compiler = SourceCompiler::new();
        let answers = Answers::new().with("systemName", "Billing Service");
        assert_eq!(
            compiler
                .compile("{{kebabCase systemName}}/{{pascalCase systemName}}", &answers)
                .unwrap(),
            "billing-service/BillingService"
        );
    }

    #[test]
    fn compile_value_only_touches_strings() {
        let compiler = SourceCompiler::new();
        let value = json!({
            "path": "{{constantName}}.dsl",
            "skipIfExists": true,
            "retries": 3,
            "nested": { "items": ["{{constantValue}}", null] }
        });
        let out = compiler.compile_value(&value, &answers()).unwrap();
        assert_eq!(
            out,
            json!({
                "path": "MaxRetries.dsl",
                "skipIfExists": true,
                "retries": 3,
                "nested": { "items": ["3", null] }
            })
        );
    }

    #[test]
    fn append_options_keep_pattern() {
        let compiler = SourceCompiler::new();
        let action = AppendAction {
            path: "{{constantName}}/workspace.dsl".into(),
            template_file: "templates/constant.hbs".into(),
            pattern: Regex::new(r"# \{\{Constants\}\}").unwrap(),
        };
        let compiled = action.compile_with(&compiler, &answers()).unwrap();
        assert_eq!(compiled.path, "MaxRetries/workspace.dsl");
        assert_eq!(compiled.pattern.as_str(), action.pattern.as_str());
    }
}
