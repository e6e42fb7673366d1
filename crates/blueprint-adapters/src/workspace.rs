//! Structurizr workspace loading.
//!
//! The DSL itself is never parsed. When the Structurizr tooling has exported
//! the model to `workspace.json` next to `workspace.dsl`, that export is read
//! so generators can offer existing systems and reject duplicates.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use blueprint_core::{
    application::ports::Filesystem,
    domain::{DomainError, Workspace, find_workspace_folder},
    error::BlueprintResult,
};

/// File name of the JSON export read beside `workspace.dsl`.
pub const WORKSPACE_JSON: &str = "workspace.json";

/// Where the workspace lives and, when exported, what it contains.
#[derive(Debug, Clone, Default)]
pub struct LoadedWorkspace {
    /// Folder containing `workspace.dsl`, if any.
    pub folder: Option<PathBuf>,
    pub model: Option<Workspace>,
}

/// Locate the workspace under `root` and load its JSON export if present.
#[instrument(skip(fs), fields(root = %root.display()))]
pub async fn discover(fs: &dyn Filesystem, root: &Path) -> BlueprintResult<LoadedWorkspace> {
    let Some(folder) = find_workspace_folder(root) else {
        debug!("no workspace.dsl found");
        return Ok(LoadedWorkspace::default());
    };

    let model = load_workspace(fs, &folder).await?;
    Ok(LoadedWorkspace {
        folder: Some(folder),
        model,
    })
}

/// Parse `<folder>/workspace.json`.
///
/// `Ok(None)` when the file is absent; `WorkspaceParse` when it is not a
/// Structurizr workspace document.
pub async fn load_workspace(fs: &dyn Filesystem, folder: &Path) -> BlueprintResult<Option<Workspace>> {
    let path = folder.join(WORKSPACE_JSON);
    if !fs.exists(&path).await {
        return Ok(None);
    }

    let raw = fs.read_to_string(&path).await?;
    let workspace: Workspace =
        serde_json::from_str(&raw).map_err(|e| DomainError::WorkspaceParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    debug!(
        systems = workspace.model.software_systems.len(),
        "workspace model loaded"
    );
    Ok(Some(workspace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use blueprint_core::error::BlueprintError;

    const EXPORT: &str = r#"{
        "name": "Big Bank plc",
        "model": {
            "people": [{ "name": "Customer", "tags": "Element,Person" }],
            "softwareSystems": [
                {
                    "name": "Internet Banking",
                    "tags": "Element,Software System",
                    "containers": [{ "name": "API Application" }]
                },
                { "name": "Mainframe", "tags": "Element,Software System,External" }
            ]
        },
        "views": {
            "systemContextViews": [{ "key": "SystemContext" }],
            "configuration": { "styles": {} }
        }
    }"#;

    #[tokio::test]
    async fn loads_export_beside_dsl() {
        let fs = MemoryFilesystem::new().with_file("/ws/architecture/workspace.json", EXPORT);

        let workspace = load_workspace(&fs, Path::new("/ws/architecture"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(workspace.name, "Big Bank plc");
        assert_eq!(workspace.model.software_systems.len(), 2);
        assert_eq!(workspace.model.software_systems[0].containers.len(), 1);
        assert_eq!(workspace.views.all().count(), 1);
    }

    #[tokio::test]
    async fn missing_export_is_not_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(load_workspace(&fs, Path::new("/ws")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_export_is_reported() {
        let fs = MemoryFilesystem::new().with_file("/ws/workspace.json", "{ not json");

        let err = load_workspace(&fs, Path::new("/ws")).await.unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Domain(DomainError::WorkspaceParse { .. })
        ));
    }

    #[tokio::test]
    async fn discover_without_dsl_is_greenfield() {
        let temp = tempfile::TempDir::new().unwrap();
        let loaded = discover(&MemoryFilesystem::new(), temp.path()).await.unwrap();
        assert!(loaded.folder.is_none());
        assert!(loaded.model.is_none());
    }
}
