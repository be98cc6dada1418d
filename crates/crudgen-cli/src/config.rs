//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CRUDGEN_<SECTION>__<KEY>`, e.g.
//!    `CRUDGEN_DEFAULTS__ON_EXISTING=skip`
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CRUDGEN";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for `crudgen new`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Parent directory resource folders are created in.
    pub output_dir: PathBuf,
    /// Existing-entry policy: `abort`, `skip`, or `overwrite`.
    pub on_existing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain`, or `json`; `--output-format` wins when given.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                output_dir: PathBuf::from("."),
                on_existing: "abort".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file, and the
    /// environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it, the default location is read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Self::builder(file)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to merge configuration sources")?
            .try_deserialize()
            .context("invalid configuration")
    }

    fn builder(
        file: File<config::FileSourceFile, config::FileFormat>,
    ) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults =
            Config::try_from(&Self::default()).context("failed to encode default config")?;
        Ok(Config::builder().add_source(defaults).add_source(file))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudgen.toml"))
    }
}
