//! Queries over the workspace model that drive prompts.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::debug;

use crate::domain::{
    entities::{
        generator::{Answers, Question},
        workspace::{DEPLOYMENT_NODE_TAG, EXTERNAL_TAG, ModelElement, SystemElement, Workspace},
    },
    naming::to_kebab_case,
    validators::ValidationError,
};

/// Folder (relative to the workspace folder) holding one directory per system.
pub const CONTAINERS_DIR: &str = "containers";

/// Filters for [`all_system_elements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementFilter {
    pub include_containers: bool,
    pub include_deployment_nodes: bool,
}

impl Default for ElementFilter {
    fn default() -> Self {
        Self {
            include_containers: true,
            include_deployment_nodes: false,
        }
    }
}

impl ElementFilter {
    /// Every node in the model, containers and deployment nodes included.
    pub const fn everything() -> Self {
        Self {
            include_containers: true,
            include_deployment_nodes: true,
        }
    }
}

/// Flatten people, software systems and deployment nodes (in that order).
///
/// Elements tagged "Deployment Node" are dropped first unless requested; then
/// each system with containers is followed by its containers, annotated with
/// the system's name. `None` means the workspace does not exist yet and
/// yields nothing.
pub fn all_system_elements(
    workspace: Option<&Workspace>,
    filter: ElementFilter,
) -> Vec<SystemElement<'_>> {
    let Some(workspace) = workspace else {
        return Vec::new();
    };
    let model = &workspace.model;

    let nodes = model
        .people
        .iter()
        .map(SystemElement::Person)
        .chain(model.software_systems.iter().map(SystemElement::SoftwareSystem))
        .chain(model.deployment_nodes.iter().map(SystemElement::DeploymentNode))
        .filter(|elm| filter.include_deployment_nodes || !elm.has_tag(DEPLOYMENT_NODE_TAG));

    nodes.fold(Vec::new(), |mut out, elm| {
        out.push(elm);
        if let SystemElement::SoftwareSystem(system) = elm {
            if filter.include_containers {
                out.extend(system.containers.iter().map(|container| {
                    SystemElement::Container {
                        container,
                        system_name: &system.name,
                    }
                }));
            }
        }
        out
    })
}

/// Where [`resolve_system_question`] can learn about existing systems.
#[derive(Debug, Clone, Copy)]
pub enum SystemSource<'a> {
    /// A parsed model: offer its internal systems as choices.
    Parsed(&'a Workspace),
    /// No model, but a folder that may contain `workspace.dsl`.
    Path(&'a Path),
    None,
}

/// Build the "which system does this belong to" question.
///
/// With a parsed workspace this is a selection over every system not tagged
/// "External". With only a path, it is free text validated against
/// `<workspace folder>/containers/<kebab-name>`. With neither, the answer
/// resolves to an empty string so the flow is never blocked.
pub fn resolve_system_question(source: SystemSource<'_>, message: &str) -> Question {
    match source {
        SystemSource::Parsed(workspace) => {
            let choices = workspace
                .model
                .software_systems
                .iter()
                .filter(|system| !system.has_tag(EXTERNAL_TAG))
                .map(|system| system.name.clone())
                .collect();
            Question::select(message, choices)
        }
        SystemSource::Path(path) => {
            let folder = find_workspace_folder(path);
            debug!(folder = ?folder, "Resolving systems from the filesystem");
            Question::input(message).with_validator(Arc::new(
                move |input: &str, _: &Answers| system_exists(folder.as_deref(), input),
            ))
        }
        SystemSource::None => Question::resolved(""),
    }
}

/// Folder containing `workspace.dsl`: `path` itself or its `architecture/`.
pub fn find_workspace_folder(path: &Path) -> Option<PathBuf> {
    [path.to_path_buf(), path.join("architecture")]
        .into_iter()
        .find(|candidate| candidate.join("workspace.dsl").is_file())
}

fn system_exists(folder: Option<&Path>, input: &str) -> Result<(), ValidationError> {
    if let Some(folder) = folder {
        if folder.join(CONTAINERS_DIR).join(to_kebab_case(input)).is_dir() {
            return Ok(());
        }
    }
    Err(ValidationError::SystemNotFound {
        name: input.to_string(),
    })
}
