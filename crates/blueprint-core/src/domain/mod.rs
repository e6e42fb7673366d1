// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Blueprint.
//!
//! This module contains the declarative model and pure logic: templates,
//! actions, generator definitions, the Structurizr workspace model, the
//! queries over it and the validators built on those queries.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No writes**: Nothing here touches the destination tree; the only I/O is
//!   the directory probe behind the free-text system question
//! - **Immutable values**: template sets and generator definitions are built
//!   once and shared
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod validators;
pub mod workspace_query;

// Re-exports for convenience
pub use entities::{
    action::{Action, ActionKind, AddAction, AddManyAction, AppendAction},
    common::RelativePath,
    generator::{
        Answers, GeneratorContext, GeneratorDefinition, Question, QuestionFactory, Validator,
    },
    template::{TEMPLATE_ROOT, TemplateEntry, TemplateSet},
    workspace::{
        Container, DeploymentNode, ModelElement, Person, SoftwareSystem, SystemElement, View,
        ViewCategory, Views, Workspace,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use validators::{
    ValidationError, chain_validators, duplicated_system_name, string_empty,
    validate_duplicated_elements, validate_duplicated_views, validator,
};

pub use workspace_query::{
    ElementFilter, SystemSource, all_system_elements, find_workspace_folder,
    resolve_system_question,
};
