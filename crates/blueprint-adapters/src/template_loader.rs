//! Filesystem-based template loader.
//!
//! Walks a directory and turns every regular file under it into a
//! [`TemplateEntry`] whose path is the file's relative path prefixed with
//! `templates/`, so a local directory can stand in for the bundled set:
//!
//! ```text
//! my-templates/                 template path
//! ├── constant.hbs          →   templates/constant.hbs
//! └── architecture/
//!     └── workspace.dsl     →   templates/architecture/workspace.dsl
//! ```
//!
//! Entries are sorted by path so `AddMany` sees a stable order regardless of
//! the order the OS returns directory entries in.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use blueprint_core::{
    application::ApplicationError,
    domain::{TEMPLATE_ROOT, TemplateEntry, TemplateSet},
    error::BlueprintResult,
};

use crate::filesystem::map_io_error;

/// Loads a [`TemplateSet`] from a directory tree.
///
/// # Example
///
/// ```no_run
/// use blueprint_adapters::template_loader::FilesystemTemplateLoader;
///
/// let templates = FilesystemTemplateLoader::new("./my-templates").load_all()?;
/// println!("Loaded {} templates", templates.len());
/// # Ok::<(), blueprint_core::error::BlueprintError>(())
/// ```
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    ///
    /// The directory does not need to exist yet; [`load_all`](Self::load_all)
    /// returns an error if it is missing when called.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Load every file under the directory.
    ///
    /// # Errors
    ///
    /// - `FilesystemError` if the directory is missing, cannot be walked, or a
    ///   file is not valid UTF-8.
    /// - `DuplicateTemplatePath` if two files normalize to the same path.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> BlueprintResult<TemplateSet> {
        if !self.templates_dir.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: self.templates_dir.clone(),
                reason: "templates directory not found".into(),
            }
            .into());
        }

        let mut files = Vec::new();

        for walk_entry in WalkDir::new(&self.templates_dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::FilesystemError {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.templates_dir.clone()),
                reason: format!("directory walk error: {e}"),
            })?;

            if !walk_entry.file_type().is_file() {
                continue; // Directories are implied by file paths; symlinks are skipped.
            }

            let abs_path = walk_entry.path();
            let Ok(rel) = abs_path.strip_prefix(&self.templates_dir) else {
                warn!(path = %abs_path.display(), "outside templates directory, skipping");
                continue;
            };

            let contents =
                fs::read_to_string(abs_path).map_err(|e| map_io_error(abs_path, e, "read template"))?;
            let path = format!("{TEMPLATE_ROOT}/{}", normalize_path(&rel.to_string_lossy()));

            debug!(%path, "loaded template");
            files.push(TemplateEntry::new(path, contents)?);
        }

        debug!(count = files.len(), "finished loading templates");
        Ok(TemplateSet::new(files)?)
    }
}

/// Replace Windows separators with forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::error::BlueprintError;
    use tempfile::TempDir;

    fn make_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel_path, content) in files {
            let full = temp.path().join(rel_path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        temp
    }

    #[test]
    fn missing_dir_is_an_error() {
        let loader = FilesystemTemplateLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_all(),
            Err(BlueprintError::Application(
                ApplicationError::FilesystemError { .. }
            ))
        ));
    }

    #[test]
    fn nested_files_get_template_root_prefix() {
        let temp = make_dir(&[
            ("constant.hbs", "!const {{constantName}}"),
            ("architecture/workspace.dsl", "workspace {}"),
            ("architecture/docs/01-overview.md", "# {{workspaceName}}"),
        ]);

        let set = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        let paths: Vec<&str> = set.iter().map(|e| e.path().as_str()).collect();

        assert_eq!(
            paths,
            [
                "templates/architecture/docs/01-overview.md",
                "templates/architecture/workspace.dsl",
                "templates/constant.hbs",
            ]
        );
        assert_eq!(
            set.get("templates/constant.hbs").unwrap().contents(),
            "!const {{constantName}}"
        );
    }

    #[test]
    fn empty_directory_gives_empty_set() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        let set = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn normalize_path_replaces_backslashes() {
        assert_eq!(normalize_path(r"view\container.hbs"), "view/container.hbs");
    }
}
