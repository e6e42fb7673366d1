//! Infrastructure adapters for Blueprint.
//!
//! This crate implements the ports defined in `blueprint-core::application::ports`.
//! It contains the I/O the core stays free of: the local filesystem, the
//! bundled and on-disk template sets, workspace JSON loading and the
//! non-interactive prompter.

pub mod builtin_templates;
pub mod filesystem;
pub mod prompt;
pub mod template_loader;
pub mod workspace;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::PresetPrompter;
pub use template_loader::FilesystemTemplateLoader;
pub use workspace::{LoadedWorkspace, discover, load_workspace};
