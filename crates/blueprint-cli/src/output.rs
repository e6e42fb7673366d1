//! Output management and formatting.

use std::{
    io::{self, IsTerminal},
    path::Path,
};

use blueprint_core::application::{ChangeStatus, GenerationReport};
use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag, then `output.format` from config; Auto resolves to Human on a
        // TTY and Plain when piped or redirected.
        let requested = match args.output_format {
            OutputFormat::Auto => {
                <OutputFormat as clap::ValueEnum>::from_str(&config.output.format, true)
                    .unwrap_or_default()
            }
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if !self.supports_color() {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if !self.supports_color() {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if !self.supports_color() {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if !self.supports_color() {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One line per file the run touched, paths shown relative to `root`.
    ///
    /// JSON format prints a single object on stdout instead.
    pub fn report(&self, report: &GenerationReport, root: &Path) -> io::Result<()> {
        let files = report.outcomes.iter().flat_map(|outcome| outcome.files.iter());

        if self.format() == OutputFormat::Json {
            let files: Vec<_> = files
                .map(|file| {
                    serde_json::json!({
                        "path": display_path(&file.path, root),
                        "status": status_label(file.status),
                    })
                })
                .collect();
            let body = serde_json::json!({
                "generator": report.generator,
                "dryRun": report.dry_run,
                "files": files,
            });
            return self.term.write_line(&body.to_string());
        }

        let prefix = if report.dry_run { "would be " } else { "" };
        for file in files {
            let line = format!(
                "{prefix}{} {}",
                status_label(file.status),
                display_path(&file.path, root)
            );
            match file.status {
                ChangeStatus::Skipped => self.info(&line)?,
                ChangeStatus::Written | ChangeStatus::Appended => self.success(&line)?,
            }
        }

        if !report.changed() {
            self.info("Nothing to do")?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn status_label(status: ChangeStatus) -> &'static str {
    match status {
        ChangeStatus::Written => "written",
        ChangeStatus::Appended => "appended",
        ChangeStatus::Skipped => "skipped",
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

// ── tests ─────────────────────────────────────────────────────────────────────
