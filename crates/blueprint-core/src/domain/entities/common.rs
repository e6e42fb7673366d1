use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A template path guaranteed to be relative, stored with `/` separators.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    ///
    /// Backslashes are folded to `/` so templates loaded on Windows address
    /// the same keys as the bundled set.
    pub fn try_new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = path.as_ref().replace('\\', "/");
        if raw.starts_with('/') || Path::new(&raw).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: raw });
        }
        let trimmed = raw.trim_start_matches("./").to_string();
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Drop a leading root directory (e.g. `templates`), if present.
    ///
    /// `templates/workspace/a.dsl` becomes `workspace/a.dsl`; paths outside
    /// the root are returned unchanged.
    pub fn strip_root(&self, root: &str) -> &str {
        self.0
            .strip_prefix(root)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.0)
    }

    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.0)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
