//! Template set aggregate.
//!
//! ## Model
//!
//! ```text
//! TemplateSet (Aggregate Root, immutable, shared via Arc)
//! └── Vec<TemplateEntry>
//!      ├── path: RelativePath   e.g. "templates/constant.hbs"
//!      └── contents: String     Handlebars source
//! ```
//!
//! The set is built once per process (bundled templates or a directory on
//! disk) and handed to the action executor explicitly. Nothing mutates it
//! afterwards, so concurrent `AddMany` fan-out reads it without locking.

use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Directory every template path lives under. Stripped when `AddMany`
/// derives destination paths.
pub const TEMPLATE_ROOT: &str = "templates";

/// One template source: a relative path and its raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    path: RelativePath,
    contents: String,
}

impl TemplateEntry {
    pub fn new(path: impl AsRef<str>, contents: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            contents: contents.into(),
        })
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Ordered, immutable collection of templates with unique paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    entries: Vec<TemplateEntry>,
}

impl TemplateSet {
    /// Build a set, rejecting duplicate paths.
    pub fn new(entries: Vec<TemplateEntry>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(DomainError::DuplicateTemplatePath {
                    path: entry.path.to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Convenience constructor from `(path, contents)` pairs.
    pub fn from_pairs<I, P, C>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(path, contents)| TemplateEntry::new(path, contents))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Look up a template by exact path.
    pub fn get(&self, path: &str) -> Result<&TemplateEntry, DomainError> {
        let wanted = RelativePath::try_new(path)?;
        self.entries
            .iter()
            .find(|e| e.path == wanted)
            .ok_or_else(|| DomainError::TemplateNotFound {
                path: path.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_paths_are_rejected() {
        let err = TemplateSet::from_pairs([("templates/a.hbs", "one"), ("./templates/a.hbs", "two")])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateTemplatePath {
                path: "templates/a.hbs".into()
            }
        );
    }

    #[test]
    fn get_finds_exact_path() {
        let set = TemplateSet::from_pairs([("templates/constant.hbs", "x")]).unwrap();
        assert_eq!(set.get("templates/constant.hbs").unwrap().contents(), "x");
        assert!(matches!(
            set.get("templates/missing.hbs"),
            Err(DomainError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn preserves_insertion_order() {
        let set = TemplateSet::from_pairs([("templates/b", ""), ("templates/a", "")]).unwrap();
        let paths: Vec<_> = set.iter().map(|e| e.path().as_str()).collect();
        assert_eq!(paths, ["templates/b", "templates/a"]);
    }
}
