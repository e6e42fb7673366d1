//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "run a generator" or "execute an action".

pub mod action_executor;
pub mod generator_service;

pub use action_executor::{
    ActionExecutor, ActionOutcome, ChangeStatus, FileChange, insert_after_match,
};
pub use generator_service::{GenerationReport, GeneratorService};
