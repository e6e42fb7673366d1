//! Application layer for Blueprint.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, ActionExecutor)
//! - **Compiler**: Handlebars rendering of templates and action options
//! - **Matcher**: Glob selection of templates for `AddMany`
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules (validators, workspace queries) live in `crate::domain`.

pub mod compiler;
pub mod error;
pub mod matcher;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ActionExecutor, ActionOutcome, ChangeStatus, FileChange, GenerationReport, GeneratorService,
};

pub use compiler::{CompileOptions, SourceCompiler};
pub use matcher::TemplateGlob;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter};

pub use error::ApplicationError;
