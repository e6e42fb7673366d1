pub mod action;
pub mod common;
pub mod generator;
pub mod template;
pub mod workspace;

pub use super::error::DomainError;
