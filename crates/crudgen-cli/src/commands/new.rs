//! Implementation of the `crudgen new` command.
//!
//! Responsibility: resolve the name, directory, and policy from flags and
//! config, call the core scaffold service, and display the report. No
//! business logic lives here.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crudgen_adapters::LocalFilesystem;
use crudgen_core::{
    application::ScaffoldService,
    domain::{Action, CreationOutcome, ExistingPolicy, ScaffoldReport},
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Prompt shown when no name is given on the command line.
const NAME_PROMPT: &str = "Enter a name";

/// Execute the `crudgen new` command.
///
/// Dispatch sequence:
/// 1. Take the name from the argument, or prompt for it
/// 2. Resolve the parent directory and existing-entry policy
/// 3. Scaffold (or preview with `--dry-run`) via `ScaffoldService`
/// 4. Print one line per outcome and a summary, or the report as JSON
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resource name
    let name = match args.name {
        Some(name) => name,
        None => prompt_for_name()?,
    };

    // 2. Parent directory and policy
    let parent = args
        .output
        .unwrap_or_else(|| config.defaults.output_dir.clone());
    let policy = resolve_policy(args.on_existing.map(Into::into), &config)?;

    debug!(
        resource = %name,
        parent = %parent.display(),
        policy = %policy,
        "Options resolved"
    );

    // 3. Scaffold
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = if args.dry_run {
        service.preview(&name, &parent, policy)?
    } else {
        service.run(&name, &parent, policy)?
    };

    // 4. Report
    show_report(&report, args.dry_run, &output)
}

// ── Option resolution ─────────────────────────────────────────────────────────

/// The flag wins; otherwise `defaults.on_existing` from config.
fn resolve_policy(flag: Option<ExistingPolicy>, config: &AppConfig) -> CliResult<ExistingPolicy> {
    if let Some(policy) = flag {
        return Ok(policy);
    }
    config
        .defaults
        .on_existing
        .parse::<ExistingPolicy>()
        .map_err(|e| CliError::ConfigError {
            message: format!("defaults.on_existing: {e}"),
            source: Some(Box::new(e)),
        })
}

// ── Name prompt ───────────────────────────────────────────────────────────────

fn prompt_for_name() -> CliResult<String> {
    if io::stdin().is_terminal() {
        prompt_interactive()
    } else {
        read_name(io::stdin().lock())
    }
}

#[cfg(feature = "interactive")]
fn prompt_interactive() -> CliResult<String> {
    use dialoguer::{Error as DialoguerError, Input};

    match Input::<String>::new().with_prompt(NAME_PROMPT).interact_text() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Err(CliError::Cancelled)
        }
        Err(err) => Err(CliError::InvalidInput {
            message: format!("failed to read resource name: {err}"),
            source: Some(Box::new(err)),
        }),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_interactive() -> CliResult<String> {
    read_name(io::stdin().lock())
}

/// Line-based prompt for piped input: one line, trailing newline stripped.
fn read_name(mut input: impl BufRead) -> CliResult<String> {
    eprint!("{NAME_PROMPT}: ");
    io::stderr()
        .flush()
        .with_cli_context(|| "failed to flush stderr")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_cli_context(|| "failed to read resource name")?;
    if read == 0 {
        return Err(CliError::Cancelled);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonReport<'a> {
    dry_run: bool,
    root: &'a Path,
    created: usize,
    already_existed: usize,
    overwritten: usize,
    outcomes: &'a [CreationOutcome],
}

fn show_report(report: &ScaffoldReport, dry_run: bool, out: &OutputManager) -> CliResult<()> {
    match out.format() {
        OutputFormat::Json => {
            out.json(&JsonReport {
                dry_run,
                root: report.root(),
                created: report.created(),
                already_existed: report.skipped(),
                overwritten: report.overwritten(),
                outcomes: report.outcomes(),
            })?;
        }
        OutputFormat::Human => {
            if dry_run {
                out.header("Dry run, nothing was written:")?;
            }
            for outcome in report.outcomes() {
                let line = outcome.to_string();
                match outcome.action {
                    Action::Created => out.success(&line)?,
                    Action::AlreadyExists => out.info(&line)?,
                    Action::Overwritten => out.warning(&line)?,
                }
            }
            out.print("")?;
            out.success(&summary(report))?;
            if !dry_run && report.created() > 0 {
                out.print(&format!(
                    "  Register the handlers from {}",
                    report.root().display()
                ))?;
            }
        }
        // Plain: exactly one line per outcome, for scripts and pipes.
        _ => {
            for outcome in report.outcomes() {
                out.print(&outcome.to_string())?;
            }
            out.print(&summary(report))?;
        }
    }
    Ok(())
}

fn summary(report: &ScaffoldReport) -> String {
    format!(
        "{}: {} created, {} already existed, {} overwritten",
        report.root().display(),
        report.created(),
        report.skipped(),
        report.overwritten()
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_policy_wins_over_config() {
        let mut config = AppConfig::default();
        config.defaults.on_existing = "skip".into();

        let policy = resolve_policy(Some(ExistingPolicy::Overwrite), &config).unwrap();
        assert_eq!(policy, ExistingPolicy::Overwrite);
    }

    #[test]
    fn config_policy_is_used_without_flag() {
        let mut config = AppConfig::default();
        config.defaults.on_existing = "keep".into();

        assert_eq!(resolve_policy(None, &config).unwrap(), ExistingPolicy::Skip);
        assert_eq!(
            resolve_policy(None, &AppConfig::default()).unwrap(),
            ExistingPolicy::Abort
        );
    }

    #[test]
    fn bad_config_policy_is_a_configuration_error() {
        let mut config = AppConfig::default();
        config.defaults.on_existing = "sometimes".into();

        let err = resolve_policy(None, &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn read_name_strips_line_ending() {
        let name = read_name(io::Cursor::new("Rate\r\n")).unwrap();
        assert_eq!(name, "Rate");
    }

    #[test]
    fn read_name_keeps_inner_content() {
        // Validation happens in the core, not here.
        let name = read_name(io::Cursor::new(" Rate \n")).unwrap();
        assert_eq!(name, " Rate ");
    }

    #[test]
    fn closed_input_cancels() {
        let err = read_name(io::Cursor::new("")).unwrap_err();
        assert!(matches!(err, CliError::Cancelled));
    }

    #[test]
    fn summary_counts_actions() {
        let report = ScaffoldReport::new(Path::new("out/Rate"));
        assert_eq!(
            summary(&report),
            format!(
                "{}: 0 created, 0 already existed, 0 overwritten",
                Path::new("out/Rate").display()
            )
        );
    }
}
