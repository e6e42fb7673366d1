//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `BLUEPRINT_*` environment variables, `__` between sections
//!    (`BLUEPRINT_DEFAULTS__DEST=docs`); `.env` is loaded first by `main`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for flags left off the command line.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Target architecture folder when `--dest` is not given.
    pub dest: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory replacing the bundled templates.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Layer defaults, the config file and the environment.
    ///
    /// A file passed with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        Self::builder(&path, config_file.is_some())?
            .add_source(
                Environment::with_prefix("BLUEPRINT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .with_context(|| format!("loading configuration from {}", path.display()))
    }

    fn builder(
        path: &Path,
        required: bool,
    ) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Config::try_from(&Self::default()).context("serialising defaults")?;
        Ok(Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required)))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.blueprint.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "blueprint", "blueprint")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".blueprint.toml"))
    }
}
