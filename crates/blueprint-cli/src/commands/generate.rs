//! Implementation of the `blueprint generate` command.
//!
//! Responsibility: locate the workspace, pick a generator, hand both to the
//! core generator service and display the report. No business logic lives
//! here.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info, instrument};

use blueprint_adapters::{LocalFilesystem, LoadedWorkspace, builtin_templates::all_templates, discover};
use blueprint_core::{
    application::{ActionExecutor, GeneratorService, ports::{Filesystem, Prompter}},
    domain::{Answers, GeneratorContext, GeneratorDefinition, Question, TemplateSet},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    generators::{self, MENU_KEY, MENU_MESSAGE, workspace},
    output::OutputManager,
    prompt::select_prompter,
};

/// Execute the `blueprint generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the destination and the template set
/// 2. Look for `workspace.dsl` (and its JSON export) under the destination
/// 3. Greenfield: run the Workspace generator, then the named one if any
/// 4. Otherwise run the named generator, or the one picked from the menu
#[instrument(skip_all, fields(generator = args.name.as_deref().unwrap_or("menu")))]
pub async fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dest = resolve_destination(global.dest.as_deref(), &config)?;
    let template_dir = global
        .templates
        .clone()
        .or_else(|| config.templates.local_path.clone());
    let templates = Arc::new(all_templates(template_dir.as_deref())?);
    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let prompter = select_prompter(args.answers.as_deref())?;

    let session = Session {
        templates,
        filesystem,
        prompter: prompter.as_ref(),
        dry_run: args.dry_run,
        output: &output,
    };

    let requested = args.name.as_deref();
    let loaded = discover(session.filesystem.as_ref(), &dest).await?;
    debug!(dest = %dest.display(), folder = ?loaded.folder, "Destination resolved");

    let loaded = match loaded.folder {
        Some(_) => loaded,
        None => {
            output.warning(&format!(
                "No workspace found in {}, creating one",
                dest.display()
            ))?;
            session.run(&workspace::definition(), loaded, &dest).await?;

            // Only continue when something else was asked for explicitly.
            match requested {
                Some(name) if !is_workspace(name) && !args.dry_run => {
                    discover(session.filesystem.as_ref(), &dest).await?
                }
                _ => return Ok(()),
            }
        }
    };

    let Some(folder) = loaded.folder.clone() else {
        return Ok(());
    };

    output.info(&format!("Architecture folder: {}", folder.display()))?;

    if requested.is_some_and(is_workspace) {
        return Err(CliError::WorkspaceExists { path: folder });
    }

    let generator = match requested {
        Some(name) => named(name)?,
        None => pick_from_menu(session.prompter)?,
    };

    session.run(&generator, loaded, &folder).await
}

/// Everything a single generator run needs besides the workspace.
struct Session<'a> {
    templates: Arc<TemplateSet>,
    filesystem: Arc<dyn Filesystem>,
    prompter: &'a dyn Prompter,
    dry_run: bool,
    output: &'a OutputManager,
}

impl Session<'_> {
    async fn run(
        &self,
        generator: &GeneratorDefinition,
        loaded: LoadedWorkspace,
        root: &Path,
    ) -> CliResult<()> {
        info!(generator = generator.name(), root = %root.display(), "Running generator");
        let executor = ActionExecutor::new(self.templates.clone(), root, self.filesystem.clone())
            .dry_run(self.dry_run);
        let context = GeneratorContext {
            workspace: loaded.model.map(Arc::new),
            workspace_folder: loaded.folder,
            destination: root.to_path_buf(),
        };

        let report = GeneratorService::new(executor, context)
            .run(generator, self.prompter)
            .await?;

        self.output.report(&report, root)?;
        Ok(())
    }
}

/// `--dest`, then `defaults.dest`, then the current directory; made absolute.
fn resolve_destination(flag: Option<&Path>, config: &AppConfig) -> CliResult<PathBuf> {
    let dest = flag
        .map(Path::to_path_buf)
        .or_else(|| config.defaults.dest.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    if dest.is_absolute() {
        return Ok(dest);
    }
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "reading the current directory".into(),
        source: e,
    })?;
    Ok(cwd.join(dest))
}

fn is_workspace(name: &str) -> bool {
    generators::find(vec![workspace::definition()], name).is_some()
}

fn named(name: &str) -> CliResult<GeneratorDefinition> {
    let available = generators::element_generators()?;
    let names = available.iter().map(|g| g.name().to_string()).collect();
    generators::find(available, name).ok_or_else(|| CliError::UnknownGenerator {
        name: name.to_string(),
        available: names,
    })
}

fn pick_from_menu(prompter: &dyn Prompter) -> CliResult<GeneratorDefinition> {
    let available = generators::element_generators()?;
    let choices: Vec<String> = available.iter().map(|g| g.name().to_string()).collect();
    let question = Question::select(MENU_MESSAGE, choices.clone());

    let answer = prompter.ask(MENU_KEY, &question, &Answers::new())?;
    let picked = answer.as_str().unwrap_or_default();

    generators::find(available, picked).ok_or_else(|| CliError::UnknownGenerator {
        name: picked.to_string(),
        available: choices,
    })
}
