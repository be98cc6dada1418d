//! `crudgen config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `crudgen config get`.
const KEYS: [&str; 4] = [
    "defaults.output_dir",
    "defaults.on_existing",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
///
/// `active_file` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    active_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = active_file.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.output_dir" => Ok(config.defaults.output_dir.display().to_string()),
        "defaults.on_existing" => Ok(config.defaults.on_existing.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
