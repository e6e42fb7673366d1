//! Blueprint Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Blueprint
//! scaffolding tool for Structurizr DSL workspaces, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          blueprint-cli (CLI)            │
//! │  (Generators, TerminalPrompter, clap)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GeneratorService, ActionExecutor)    │
//! │   SourceCompiler, TemplateGlob          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Filesystem, Prompter)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    blueprint-adapters (Infrastructure)  │
//! │ (LocalFilesystem, builtin templates...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Action, Workspace, Question, validators)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blueprint_core::prelude::*;
//! # async fn run(
//! #     templates: TemplateSet,
//! #     filesystem: Arc<dyn Filesystem>,
//! #     prompter: &dyn Prompter,
//! #     generator: GeneratorDefinition,
//! # ) -> BlueprintResult<()> {
//! let executor = ActionExecutor::new(Arc::new(templates), "./docs", filesystem);
//! let context = GeneratorContext {
//!     destination: "./docs".into(),
//!     ..Default::default()
//! };
//! let report = GeneratorService::new(executor, context)
//!     .run(&generator, prompter)
//!     .await?;
//! assert!(report.changed());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ActionExecutor, GenerationReport, GeneratorService,
        ports::{Filesystem, Prompter},
    };
    pub use crate::domain::{
        Action, Answers, GeneratorContext, GeneratorDefinition, Question, TemplateSet, Workspace,
    };
    pub use crate::error::{BlueprintError, BlueprintResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
