//! Shell-style wildcard matching over template paths.

use glob::{MatchOptions, Pattern};

use crate::domain::{DomainError, RelativePath, TemplateEntry, TemplateSet};

/// `*` and `?` stop at `/`; `**` spans directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled glob selecting templates for `AddMany`.
#[derive(Debug, Clone)]
pub struct TemplateGlob {
    pattern: Pattern,
}

impl TemplateGlob {
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        Pattern::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.msg.to_string(),
            })
    }

    pub fn matches(&self, path: &RelativePath) -> bool {
        self.pattern.matches_with(path.as_str(), MATCH_OPTIONS)
    }

    /// Templates whose path matches, in template-set order.
    pub fn select<'a>(&'a self, templates: &'a TemplateSet) -> impl Iterator<Item = &'a TemplateEntry> {
        templates.iter().filter(move |entry| self.matches(entry.path()))
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> TemplateSet {
        TemplateSet::from_pairs([
            ("templates/constant.hbs", ""),
            ("templates/workspace/workspace.dsl", ""),
            ("templates/workspace/architecture/views.dsl", ""),
            ("templates/workspace/architecture/styles.dsl", ""),
            ("templates/system/system.dsl", ""),
        ])
        .unwrap()
    }

    fn selected(pattern: &str) -> Vec<String> {
        let set = set();
        let glob = TemplateGlob::new(pattern).unwrap();
        glob.select(&set).map(|e| e.path().to_string()).collect()
    }

    #[test]
    fn double_star_spans_directories() {
        assert_eq!(
            selected("templates/workspace/**/*"),
            [
                "templates/workspace/workspace.dsl",
                "templates/workspace/architecture/views.dsl",
                "templates/workspace/architecture/styles.dsl",
            ]
        );
    }

    #[test]
    fn single_star_stays_in_one_directory() {
        assert_eq!(selected("templates/*.hbs"), ["templates/constant.hbs"]);
        assert_eq!(
            selected("templates/workspace/*"),
            ["templates/workspace/workspace.dsl"]
        );
    }

    #[test]
    fn character_classes_and_question_mark() {
        assert_eq!(
            selected("templates/workspace/architecture/[sv]*.dsl"),
            [
                "templates/workspace/architecture/views.dsl",
                "templates/workspace/architecture/styles.dsl",
            ]
        );
        assert_eq!(selected("templates/system/syste?.dsl"), ["templates/system/system.dsl"]);
    }

    #[test]
    fn no_partial_matches() {
        assert!(selected("templates/constant").is_empty());
        assert!(selected("constant.hbs").is_empty());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(matches!(
            TemplateGlob::new("templates/[a"),
            Err(DomainError::InvalidPattern { .. })
        ));
    }
}
