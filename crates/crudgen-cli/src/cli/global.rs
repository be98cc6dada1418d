//! Flags accepted by every `crudgen` subcommand.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more (-v created entries, -vv rendered sizes, -vvv filesystem calls)
    ///
    /// Without this flag only warnings and errors reach stderr. `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are written to stdout
    #[arg(long, global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise
    #[default]
    Auto,
    /// Coloured outcome lines with a summary
    Human,
    /// One outcome per line, no colour
    Plain,
    /// A single JSON document
    Json,
}
