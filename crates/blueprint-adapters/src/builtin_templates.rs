//! Built-in template discovery.
//!
//! This module provides [`all_templates`], the single entry-point for the
//! template set a run uses. It abstracts over the discovery strategy so
//! callers do not need to know where templates live.
//!
//! # Template resolution order
//!
//! 1. **An explicit directory** (`--templates DIR` or `templates.local_path`
//!    in the config file), loaded with [`FilesystemTemplateLoader`].
//! 2. **The bundled set**, compiled into the binary with `include_str!`.
//!
//! Bundled paths all start with `templates/`, the root `AddMany` strips when
//! it derives destinations:
//!
//! ```text
//! templates/
//! ├── architecture/        ← greenfield workspace (AddMany)
//! │   ├── workspace.dsl
//! │   ├── styles.dsl
//! │   └── docs/01-overview.md
//! ├── constant.hbs
//! ├── system/              ← software system + its include line
//! ├── container/
//! └── view/                ← one block per view kind
//! ```

use std::path::Path;

use tracing::{debug, info, instrument};

use blueprint_core::{
    domain::{DomainError, TemplateSet},
    error::BlueprintResult,
};

use crate::template_loader::FilesystemTemplateLoader;

/// `(path, contents)` for every template shipped with Blueprint.
const BUNDLED: &[(&str, &str)] = &[
    (
        "templates/architecture/workspace.dsl",
        include_str!("../templates/architecture/workspace.dsl"),
    ),
    (
        "templates/architecture/styles.dsl",
        include_str!("../templates/architecture/styles.dsl"),
    ),
    (
        "templates/architecture/docs/01-overview.md",
        include_str!("../templates/architecture/docs/01-overview.md"),
    ),
    ("templates/constant.hbs", include_str!("../templates/constant.hbs")),
    (
        "templates/system/system.dsl",
        include_str!("../templates/system/system.dsl"),
    ),
    (
        "templates/system/containers.dsl",
        include_str!("../templates/system/containers.dsl"),
    ),
    (
        "templates/system/include.hbs",
        include_str!("../templates/system/include.hbs"),
    ),
    (
        "templates/container/container.dsl",
        include_str!("../templates/container/container.dsl"),
    ),
    (
        "templates/view/systemLandscape.hbs",
        include_str!("../templates/view/systemLandscape.hbs"),
    ),
    (
        "templates/view/systemContext.hbs",
        include_str!("../templates/view/systemContext.hbs"),
    ),
    (
        "templates/view/container.hbs",
        include_str!("../templates/view/container.hbs"),
    ),
];

/// The templates compiled into the binary.
pub fn bundled() -> Result<TemplateSet, DomainError> {
    TemplateSet::from_pairs(BUNDLED.iter().copied())
}

/// Load the template set using the resolution order in the module docs.
#[instrument]
pub fn all_templates(local_dir: Option<&Path>) -> BlueprintResult<TemplateSet> {
    if let Some(dir) = local_dir {
        let templates = FilesystemTemplateLoader::new(dir).load_all()?;
        info!(
            path  = %dir.display(),
            count = templates.len(),
            "templates loaded from directory"
        );
        return Ok(templates);
    }

    let templates = bundled()?;
    debug!(count = templates.len(), "using bundled templates");
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use blueprint_core::domain::Answers;
    use blueprint_core::application::SourceCompiler;

    use super::*;

    #[test]
    fn bundled_set_is_valid() {
        let set = bundled().unwrap();
        assert_eq!(set.len(), BUNDLED.len());
        assert!(set.get("templates/architecture/workspace.dsl").is_ok());
    }

    #[test]
    fn workspace_template_has_insertion_points() {
        let set = bundled().unwrap();
        let workspace = set.get("templates/architecture/workspace.dsl").unwrap();
        for marker in ["# Constants", "# Systems", "# Views"] {
            assert!(
                workspace.contents().lines().any(|l| l.trim() == marker),
                "missing {marker}"
            );
        }
    }

    #[test]
    fn constant_template_renders_structurizr_constant() {
        let set = bundled().unwrap();
        let template = set.get("templates/constant.hbs").unwrap();
        let answers = Answers::new()
            .with("constantName", "Max Retries")
            .with("constantValue", "3");
        let out = SourceCompiler::new()
            .compile(template.contents(), &answers)
            .unwrap();
        assert_eq!(out, "    !const MAX_RETRIES \"3\"\n");
    }

    #[test]
    fn explicit_directory_wins() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("constant.hbs"), "X").unwrap();

        let set = all_templates(Some(temp.path())).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("templates/constant.hbs").unwrap().contents(), "X");
    }
}
