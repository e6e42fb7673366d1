//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "blueprint",
    bin_name = "blueprint",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a Structurizr DSL scaffolding in seconds",
    long_about = "Blueprint asks a few questions and writes or extends a \
                  Structurizr DSL workspace: constants, software systems, \
                  containers and views.",
    after_help = "EXAMPLES:\n\
        \x20 blueprint                              # new workspace or element menu\n\
        \x20 blueprint --dest docs generate Constant\n\
        \x20 blueprint generate container --answers answers.json --dry-run\n\
        \x20 blueprint completions bash > /usr/share/bash-completion/completions/blueprint",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a generator against the target folder.
    #[command(
        visible_alias = "g",
        about = "Run a generator",
        after_help = "EXAMPLES:\n\
            \x20 blueprint generate                    # pick from a menu\n\
            \x20 blueprint generate \"Software System\"\n\
            \x20 blueprint generate view --answers view.json"
    )]
    Generate(GenerateArgs),

    /// List the built-in generators.
    #[command(
        visible_alias = "ls",
        about = "List available generators",
        after_help = "EXAMPLES:\n\
            \x20 blueprint list\n\
            \x20 blueprint list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 blueprint completions bash > ~/.local/share/bash-completion/completions/blueprint\n\
            \x20 blueprint completions zsh  > ~/.zfunc/_blueprint\n\
            \x20 blueprint completions fish > ~/.config/fish/completions/blueprint.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Blueprint configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 blueprint config get defaults.dest\n\
            \x20 blueprint config list\n\
            \x20 blueprint config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `blueprint generate`.
#[derive(Debug, Args, Default)]
pub struct GenerateArgs {
    /// Generator to run (case and spacing are ignored).
    #[arg(value_name = "NAME", help = "Generator name, e.g. Constant or \"Software System\"")]
    pub name: Option<String>,

    /// Answer every question from a JSON object instead of prompting.
    #[arg(
        short = 'a',
        long = "answers",
        value_name = "FILE",
        help = "JSON file with answers (non-interactive)"
    )]
    pub answers: Option<PathBuf>,

    /// Preview what would be written without touching any file.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `blueprint list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `blueprint completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `blueprint config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.dest`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
