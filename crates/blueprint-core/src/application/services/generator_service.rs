//! Generator Service - main application orchestrator.
//!
//! This service coordinates one generator run:
//! 1. Ask every question in declaration order (later ones see earlier answers)
//! 2. Execute every action in declaration order
//! 3. Stop at the first failing action; completed actions stay as they are
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::Prompter,
        services::action_executor::{ActionExecutor, ActionOutcome},
    },
    domain::{Answers, GeneratorContext, GeneratorDefinition, Question},
    error::BlueprintResult,
};

/// Everything one run did, in action order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub generator: String,
    pub dry_run: bool,
    pub outcomes: Vec<ActionOutcome>,
}

impl GenerationReport {
    /// `true` if any action changed anything.
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(ActionOutcome::changed)
    }
}

/// Main generator service.
pub struct GeneratorService {
    executor: ActionExecutor,
    context: GeneratorContext,
}

impl GeneratorService {
    /// Create a new generator service.
    ///
    /// The executor's root and `context.destination` should name the same
    /// directory.
    pub fn new(executor: ActionExecutor, context: GeneratorContext) -> Self {
        Self { executor, context }
    }

    pub fn context(&self) -> &GeneratorContext {
        &self.context
    }

    /// Ask the questions, then run the actions.
    #[instrument(skip_all, fields(generator = %generator.name()))]
    pub async fn run(
        &self,
        generator: &GeneratorDefinition,
        prompter: &dyn Prompter,
    ) -> BlueprintResult<GenerationReport> {
        let answers = self.collect_answers(generator, prompter)?;
        self.execute_actions(generator, &answers).await
    }

    /// Ask every question in order.
    pub fn collect_answers(
        &self,
        generator: &GeneratorDefinition,
        prompter: &dyn Prompter,
    ) -> BlueprintResult<Answers> {
        let mut answers = Answers::new();

        for (key, factory) in generator.questions() {
            let question = factory(&self.context, &answers);
            let value = match question {
                Question::Resolved { value } => value,
                ref asked => prompter.ask(key, asked, &answers)?,
            };
            debug!(key, "Answered");
            answers.insert(key, value);
        }

        Ok(answers)
    }

    /// Execute every action in order, stopping at the first failure.
    pub async fn execute_actions(
        &self,
        generator: &GeneratorDefinition,
        answers: &Answers,
    ) -> BlueprintResult<GenerationReport> {
        let mut outcomes = Vec::with_capacity(generator.actions().len());

        for action in generator.actions() {
            let outcome = self.executor.execute(action, answers).await?;
            outcomes.push(outcome);
        }

        let report = GenerationReport {
            generator: generator.name().to_string(),
            dry_run: self.executor.is_dry_run(),
            outcomes,
        };

        info!(changed = report.changed(), "Generator finished");
        Ok(report)
    }
}
