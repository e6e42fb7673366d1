//! Action Executor - performs one declarative action at a time.
//!
//! Every action follows the same shape:
//! 1. Compile the action's string options against the answers
//! 2. Resolve and compile the template contents
//! 3. Perform one filesystem effect under the destination root
//! 4. Report whether anything changed

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::try_join_all;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        compiler::{CompileOptions, SourceCompiler},
        matcher::TemplateGlob,
        ports::Filesystem,
    },
    domain::{
        Action, ActionKind, AddAction, AddManyAction, Answers, AppendAction, DomainError,
        TEMPLATE_ROOT, TemplateEntry, TemplateSet,
    },
    error::BlueprintResult,
};

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Created or overwritten.
    Written,
    /// Block inserted after the insertion point.
    Appended,
    /// Already existed and `skip_if_exists` was set.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub status: ChangeStatus,
}

impl FileChange {
    fn new(path: PathBuf, status: ChangeStatus) -> Self {
        Self { path, status }
    }

    pub fn changed(&self) -> bool {
        self.status != ChangeStatus::Skipped
    }
}

/// Result of one action: its kind and every file it touched (or skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub files: Vec<FileChange>,
}

impl ActionOutcome {
    /// `true` if at least one file changed.
    pub fn changed(&self) -> bool {
        self.files.iter().any(FileChange::changed)
    }
}

/// Executes actions against a template set and a destination root.
pub struct ActionExecutor {
    templates: Arc<TemplateSet>,
    root: PathBuf,
    filesystem: Arc<dyn Filesystem>,
    compiler: SourceCompiler,
    dry_run: bool,
}

impl ActionExecutor {
    pub fn new(
        templates: Arc<TemplateSet>,
        root: impl Into<PathBuf>,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            root: root.into(),
            filesystem,
            compiler: SourceCompiler::new(),
            dry_run: false,
        }
    }

    /// Resolve and compile everything but never write.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Execute one action.
    #[instrument(skip_all, fields(kind = %action.kind()))]
    pub async fn execute(&self, action: &Action, answers: &Answers) -> BlueprintResult<ActionOutcome> {
        let files = match action {
            Action::Add(add) => vec![self.add(add, answers).await?],
            Action::Append(append) => vec![self.append(append, answers).await?],
            Action::AddMany(many) => self.add_many(many, answers).await?,
        };

        Ok(ActionOutcome {
            kind: action.kind(),
            files,
        })
    }

    async fn add(&self, action: &AddAction, answers: &Answers) -> BlueprintResult<FileChange> {
        let action = action.compile_with(&self.compiler, answers)?;
        let entry = self.templates.get(&action.template_file)?;
        let target = self.root.join(&action.path);

        self.write_entry(entry, target, action.skip_if_exists, answers)
            .await
    }

    /// Render `entry` and write it to `target`. Paths are taken as given.
    async fn write_entry(
        &self,
        entry: &TemplateEntry,
        target: PathBuf,
        skip_if_exists: bool,
        answers: &Answers,
    ) -> BlueprintResult<FileChange> {
        let contents = self.render_entry(entry, answers)?;

        if skip_if_exists && self.filesystem.exists(&target).await {
            warn!(path = %target.display(), "Exists, skipping");
            return Ok(FileChange::new(target, ChangeStatus::Skipped));
        }

        if !self.dry_run {
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent).await?;
            }
            self.filesystem.write_file(&target, &contents).await?;
        }

        info!(path = %target.display(), dry_run = self.dry_run, "Wrote file");
        Ok(FileChange::new(target, ChangeStatus::Written))
    }

    async fn append(&self, action: &AppendAction, answers: &Answers) -> BlueprintResult<FileChange> {
        let action = action.compile_with(&self.compiler, answers)?;
        let block = self.render_entry(self.templates.get(&action.template_file)?, answers)?;
        let target = self.root.join(&action.path);

        let original = self.filesystem.read_to_string(&target).await?;
        let updated = insert_after_match(&original, &action.pattern, &block).ok_or_else(|| {
            DomainError::InsertionPointNotFound {
                path: target.display().to_string(),
                pattern: action.pattern.as_str().to_string(),
            }
        })?;

        if !self.dry_run {
            self.filesystem.write_file(&target, &updated).await?;
        }

        info!(path = %target.display(), dry_run = self.dry_run, "Appended block");
        Ok(FileChange::new(target, ChangeStatus::Appended))
    }

    async fn add_many(
        &self,
        action: &AddManyAction,
        answers: &Answers,
    ) -> BlueprintResult<Vec<FileChange>> {
        let action = action.compile_with(&self.compiler, answers)?;
        let glob = TemplateGlob::new(&action.template_files)?;

        // The destination is compiled once, above. Only the template-relative
        // part of each target may still carry placeholders.
        let mut derived = Vec::new();
        for entry in glob.select(&self.templates) {
            let relative = self
                .compiler
                .compile(entry.path().strip_root(TEMPLATE_ROOT), answers)?;
            derived.push((entry, self.root.join(&action.destination).join(relative)));
        }

        debug!(pattern = glob.as_str(), matched = derived.len(), "Expanding templates");

        // Destinations are disjoint, so the writes can interleave freely.
        try_join_all(derived.into_iter().map(|(entry, target)| {
            self.write_entry(entry, target, action.skip_if_exists, answers)
        }))
        .await
    }

    fn render_entry(&self, entry: &TemplateEntry, answers: &Answers) -> BlueprintResult<String> {
        Ok(self
            .compiler
            .compile_named(entry.path().as_str(), entry.contents(), answers)?)
    }
}

/// Insert `block` as new line(s) right after the first line matching
/// `pattern`. Returns `None` when no line matches.
///
/// One trailing newline of `block` is dropped so the inserted lines do not
/// leave a blank line behind; every other byte of `original` is kept.
pub fn insert_after_match(original: &str, pattern: &Regex, block: &str) -> Option<String> {
    let lines: Vec<&str> = original.split('\n').collect();
    let at = lines
        .iter()
        .position(|&line| pattern.is_match(line.strip_suffix('\r').unwrap_or(line)))?;

    let block = block.strip_suffix('\n').unwrap_or(block);

    let mut out = Vec::with_capacity(lines.len() + 1);
    out.extend_from_slice(&lines[..=at]);
    out.push(block);
    out.extend_from_slice(&lines[at + 1..]);
    Some(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::{application::ApplicationError, error::BlueprintError};

    /// Minimal in-memory filesystem; records writes for assertions.
    #[derive(Default)]
    struct FakeFs {
        files: Mutex<HashMap<PathBuf, String>>,
        writes: Mutex<usize>,
    }

    impl FakeFs {
        fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.to_string());
            self
        }

        fn read(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl Filesystem for FakeFs {
        async fn create_dir_all(&self, _path: &Path) -> BlueprintResult<()> {
            Ok(())
        }

        async fn read_to_string(&self, path: &Path) -> BlueprintResult<String> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        async fn write_file(&self, path: &Path, content: &str) -> BlueprintResult<()> {
            *self.writes.lock().unwrap() += 1;
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        async fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    fn templates() -> Arc<TemplateSet> {
        Arc::new(
            TemplateSet::from_pairs([
                ("templates/constant.hbs", "Constant: {{constantName}} = {{constantValue}}\n"),
                ("templates/workspace/workspace.dsl", "workspace \"{{workspaceName}}\" {\n}\n"),
                ("templates/workspace/architecture/views.dsl", "views {}\n"),
                ("templates/workspace/{{kebabCase workspaceName}}.md", "# {{workspaceName}}\n"),
                ("templates/other/readme.md", "other\n"),
            ])
            .unwrap(),
        )
    }

    fn answers() -> Answers {
        Answers::new()
            .with("constantName", "MaxRetries")
            .with("constantValue", "3")
            .with("workspaceName", "Big Bank")
    }

    fn executor(fs: Arc<FakeFs>) -> ActionExecutor {
        ActionExecutor::new(templates(), "/ws", fs)
    }

    // ── Add ──────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn add_writes_compiled_template() {
        let fs = Arc::new(FakeFs::default());
        let outcome = executor(fs.clone())
            .execute(&Action::add("{{constantName}}.txt", "templates/constant.hbs"), &answers())
            .await
            .unwrap();

        assert!(outcome.changed());
        assert_eq!(outcome.files[0].path, PathBuf::from("/ws/MaxRetries.txt"));
        assert_eq!(
            fs.read("/ws/MaxRetries.txt").as_deref(),
            Some("Constant: MaxRetries = 3\n")
        );
    }

    #[tokio::test]
    async fn add_with_skip_if_exists_is_idempotent() {
        let fs = Arc::new(FakeFs::default());
        let exec = executor(fs.clone());
        let action = Action::add("out.txt", "templates/constant.hbs").skip_if_exists(true);

        let first = exec.execute(&action, &answers()).await.unwrap();
        let after_first = fs.read("/ws/out.txt");

        let second = exec
            .execute(&action, &answers().with("constantValue", "4"))
            .await
            .unwrap();

        assert!(first.changed());
        assert!(!second.changed());
        assert_eq!(second.files[0].status, ChangeStatus::Skipped);
        assert_eq!(fs.read("/ws/out.txt"), after_first);
        assert_eq!(fs.writes(), 1);
    }

    #[tokio::test]
    async fn add_without_skip_overwrites() {
        let fs = Arc::new(FakeFs::default().with_file("/ws/out.txt", "old content"));
        let outcome = executor(fs.clone())
            .execute(&Action::add("out.txt", "templates/constant.hbs"), &answers())
            .await
            .unwrap();

        assert!(outcome.changed());
        assert_eq!(fs.read("/ws/out.txt").as_deref(), Some("Constant: MaxRetries = 3\n"));
    }

    #[tokio::test]
    async fn add_unknown_template_fails() {
        let fs = Arc::new(FakeFs::default());
        let err = executor(fs)
            .execute(&Action::add("out.txt", "templates/nope.hbs"), &answers())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Domain(DomainError::TemplateNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn add_with_missing_answer_fails() {
        let fs = Arc::new(FakeFs::default());
        let err = executor(fs.clone())
            .execute(&Action::add("out.txt", "templates/constant.hbs"), &Answers::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Domain(DomainError::TemplateError { .. })
        ));
        assert_eq!(fs.writes(), 0);
    }

    #[tokio::test]
    async fn dry_run_reports_without_writing() {
        let fs = Arc::new(FakeFs::default());
        let outcome = executor(fs.clone())
            .dry_run(true)
            .execute(&Action::add("out.txt", "templates/constant.hbs"), &answers())
            .await
            .unwrap();

        assert!(outcome.changed());
        assert_eq!(fs.writes(), 0);
    }

    // ── Append ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn append_inserts_after_first_match() {
        let dsl = "workspace {\n    # Constants\n    model {\n    # Constants\n    }\n}\n";
        let fs = Arc::new(FakeFs::default().with_file("/ws/architecture/workspace.dsl", dsl));
        let action = Action::append(
            "architecture/workspace.dsl",
            "templates/constant.hbs",
            Regex::new("# Constants").unwrap(),
        );

        let outcome = executor(fs.clone()).execute(&action, &answers()).await.unwrap();

        assert!(outcome.changed());
        assert_eq!(
            fs.read("/ws/architecture/workspace.dsl").as_deref(),
            Some(
                "workspace {\n    # Constants\nConstant: MaxRetries = 3\n    model {\n    # Constants\n    }\n}\n"
            )
        );
    }

    #[tokio::test]
    async fn append_without_insertion_point_fails() {
        let fs = Arc::new(FakeFs::default().with_file("/ws/workspace.dsl", "workspace {\n}\n"));
        let action = Action::append(
            "workspace.dsl",
            "templates/constant.hbs",
            Regex::new("# Constants").unwrap(),
        );

        let err = executor(fs.clone()).execute(&action, &answers()).await.unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Domain(DomainError::InsertionPointNotFound { .. })
        ));
        assert_eq!(fs.writes(), 0);
    }

    #[tokio::test]
    async fn append_to_missing_file_fails() {
        let fs = Arc::new(FakeFs::default());
        let action = Action::append(
            "workspace.dsl",
            "templates/constant.hbs",
            Regex::new("# Constants").unwrap(),
        );
        let err = executor(fs).execute(&action, &answers()).await.unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    // ── AddMany ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn add_many_strips_template_root_and_prepends_destination() {
        let fs = Arc::new(FakeFs::default());
        let action = Action::add_many("{{kebabCase workspaceName}}", "templates/workspace/**/*");

        let outcome = executor(fs.clone()).execute(&action, &answers()).await.unwrap();

        let mut paths: Vec<_> = outcome.files.iter().map(|f| f.path.clone()).collect();
        paths.sort();
        assert_eq!(
            paths,
            [
                PathBuf::from("/ws/big-bank/workspace/architecture/views.dsl"),
                PathBuf::from("/ws/big-bank/workspace/big-bank.md"),
                PathBuf::from("/ws/big-bank/workspace/workspace.dsl"),
            ]
        );
        assert_eq!(
            fs.read("/ws/big-bank/workspace/workspace.dsl").as_deref(),
            Some("workspace \"Big Bank\" {\n}\n")
        );
        assert!(fs.read("/ws/big-bank/other/readme.md").is_none());
    }

    #[tokio::test]
    async fn add_many_reports_change_if_any_file_changed() {
        let fs = Arc::new(FakeFs::default().with_file("/ws/out/workspace/workspace.dsl", "kept"));
        let action =
            Action::add_many("out", "templates/workspace/**/*").skip_if_exists(true);

        let outcome = executor(fs.clone()).execute(&action, &answers()).await.unwrap();
        assert!(outcome.changed());
        assert_eq!(fs.read("/ws/out/workspace/workspace.dsl").as_deref(), Some("kept"));

        let again = executor(fs).execute(&action, &answers()).await.unwrap();
        assert!(!again.changed());
    }

    #[tokio::test]
    async fn add_many_renders_answers_in_destination_once() {
        let fs = Arc::new(FakeFs::default());
        let action = Action::add_many("{{team}}", "templates/other/*");
        let answers = answers().with("team", "team{{y}}");

        let outcome = executor(fs.clone()).execute(&action, &answers).await.unwrap();

        assert_eq!(
            outcome.files[0].path,
            PathBuf::from("/ws/team{{y}}/other/readme.md")
        );
        assert_eq!(fs.read("/ws/team{{y}}/other/readme.md").as_deref(), Some("other\n"));
    }

    #[tokio::test]
    async fn add_many_with_no_match_reports_no_change() {
        let fs = Arc::new(FakeFs::default());
        let outcome = executor(fs)
            .execute(&Action::add_many("out", "templates/none/**/*"), &answers())
            .await
            .unwrap();
        assert!(outcome.files.is_empty());
        assert!(!outcome.changed());
    }

    // ── insert_after_match ───────────────────────────────────────────────────

    #[test]
    fn insert_keeps_surrounding_lines() {
        let pattern = Regex::new("^# Marker$").unwrap();
        let out = insert_after_match("a\nb\n# Marker\nc", &pattern, "x\ny\n").unwrap();
        assert_eq!(out, "a\nb\n# Marker\nx\ny\nc");
    }

    #[test]
    fn insert_handles_crlf_lines() {
        let pattern = Regex::new("^# Marker$").unwrap();
        let out = insert_after_match("# Marker\r\nrest\r\n", &pattern, "x").unwrap();
        assert_eq!(out, "# Marker\r\nx\nrest\r\n");
    }

    #[test]
    fn insert_after_last_line() {
        let pattern = Regex::new("end").unwrap();
        assert_eq!(insert_after_match("end", &pattern, "x").unwrap(), "end\nx");
        assert!(insert_after_match("", &pattern, "x").is_none());
    }
}
