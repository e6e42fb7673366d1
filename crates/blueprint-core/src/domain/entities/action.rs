//! Declarative filesystem actions.
//!
//! Generators describe *what* should happen as a list of [`Action`]s; the
//! executor in `application::services` decides *how*. String fields are
//! Handlebars templates compiled against the answers right before execution.
//! Regex patterns, booleans and the template set are never compiled.

use std::fmt;

use regex::Regex;

/// One filesystem effect, tagged by kind.
#[derive(Debug, Clone)]
pub enum Action {
    /// Create (or overwrite) a single file from a template.
    Add(AddAction),
    /// Insert a rendered block after the first line matching a pattern.
    Append(AppendAction),
    /// Create one file per template whose path matches a glob.
    AddMany(AddManyAction),
}

impl Action {
    pub fn add(path: impl Into<String>, template_file: impl Into<String>) -> Self {
        Self::Add(AddAction {
            path: path.into(),
            template_file: template_file.into(),
            skip_if_exists: false,
        })
    }

    pub fn append(
        path: impl Into<String>,
        template_file: impl Into<String>,
        pattern: Regex,
    ) -> Self {
        Self::Append(AppendAction {
            path: path.into(),
            template_file: template_file.into(),
            pattern,
        })
    }

    pub fn add_many(destination: impl Into<String>, template_files: impl Into<String>) -> Self {
        Self::AddMany(AddManyAction {
            destination: destination.into(),
            template_files: template_files.into(),
            skip_if_exists: false,
        })
    }

    /// Set `skip_if_exists` on Add / AddMany. No effect on Append.
    pub fn skip_if_exists(mut self, skip: bool) -> Self {
        match &mut self {
            Self::Add(a) => a.skip_if_exists = skip,
            Self::AddMany(a) => a.skip_if_exists = skip,
            Self::Append(_) => {}
        }
        self
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Add(_) => ActionKind::Add,
            Self::Append(_) => ActionKind::Append,
            Self::AddMany(_) => ActionKind::AddMany,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAction {
    /// Target path relative to the destination root.
    pub path: String,
    /// Exact template path in the template set.
    pub template_file: String,
    pub skip_if_exists: bool,
}

#[derive(Debug, Clone)]
pub struct AppendAction {
    /// Target path relative to the destination root. Must already exist.
    pub path: String,
    pub template_file: String,
    /// Fixed expression from the generator definition, never user input.
    pub pattern: Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddManyAction {
    /// Directory (relative to the destination root) the matched templates land in.
    pub destination: String,
    /// Glob selecting templates, e.g. `templates/workspace/**/*`.
    pub template_files: String,
    pub skip_if_exists: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Add,
    Append,
    AddMany,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Append => write!(f, "append"),
            Self::AddMany => write!(f, "addMany"),
        }
    }
}
