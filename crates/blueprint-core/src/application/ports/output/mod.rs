//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `blueprint-adapters` and `blueprint-cli` crates provide implementations.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Answers, Question};
use crate::error::BlueprintResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `blueprint_adapters::filesystem::LocalFilesystem` (production)
/// - `blueprint_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Async so `AddMany` can fan out one write per matched template.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    async fn create_dir_all(&self, path: &Path) -> BlueprintResult<()>;

    /// Read a whole file as UTF-8.
    async fn read_to_string(&self, path: &Path) -> BlueprintResult<String>;

    /// Write content to a file, replacing what was there.
    async fn write_file(&self, path: &Path, content: &str) -> BlueprintResult<()>;

    /// Check if path exists.
    async fn exists(&self, path: &Path) -> bool;
}

/// Port for asking the user a question.
///
/// Implemented by:
/// - `blueprint_cli::prompt::TerminalPrompter` (interactive, dialoguer)
/// - `blueprint_adapters::PresetPrompter` (answers supplied up front)
///
/// Only `Input` and `Select` questions reach the prompter; `Resolved` ones
/// are answered by the service. Implementations own the validate/re-ask
/// loop: a validator failure must not escape unless nobody can be re-asked.
///
/// `ask` is synchronous and may block on user input. It is called from inside
/// `GeneratorService::run`, so an implementation that waits on a terminal must
/// release its async worker while it reads (the terminal prompter uses
/// `tokio::task::block_in_place`).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&self, key: &str, question: &Question, answers: &Answers) -> BlueprintResult<Value>;
}
