//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crudgen_core::domain::{ArtifactKind, ExistingPolicy};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CRUD route handler scaffolding",
    long_about = "crudgen creates the get/delete/update/add handler folders \
                  for a resource, with Fastify route modules and JSON body \
                  schemas ready to register.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen new Rate\n\
        \x20 crudgen new Rate -o src/app/routes --on-existing skip\n\
        \x20 crudgen plan Rate --format list\n\
        \x20 crudgen render Rate update-handler\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold the handler folders for a resource.
    #[command(
        visible_alias = "n",
        about = "Scaffold CRUD handlers for a resource",
        after_help = "EXAMPLES:\n\
            \x20 crudgen new Rate\n\
            \x20 crudgen new          # prompts for the name\n\
            \x20 crudgen new Rate --dry-run\n\
            \x20 crudgen new Rate --on-existing overwrite"
    )]
    New(NewArgs),

    /// Show the folders and files a resource would get.
    #[command(
        visible_alias = "p",
        about = "Show the layout without writing anything",
        after_help = "EXAMPLES:\n\
            \x20 crudgen plan Rate\n\
            \x20 crudgen plan Rate --format json"
    )]
    Plan(PlanArgs),

    /// Print one generated file to stdout.
    #[command(
        about = "Render a single artifact to stdout",
        after_help = "EXAMPLES:\n\
            \x20 crudgen render Rate add-handler\n\
            \x20 crudgen render Rate update-schema > updateRate.schema.mjs"
    )]
    Render(RenderArgs),

    /// Initialise a crudgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudgen init                       # default location\n\
            \x20 crudgen --config ./crudgen.toml init\n\
            \x20 crudgen init --force               # replace an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the crudgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get defaults.on_existing\n\
            \x20 crudgen config list\n\
            \x20 crudgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Resource name.  Used verbatim in folder names, export names, and the
    /// route URL, so only ASCII letters, digits, and `_` are accepted.
    #[arg(value_name = "NAME", help = "Resource name (prompted for when omitted)")]
    pub name: Option<String>,

    /// Directory the resource folder is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: defaults.output_dir, else the current directory)"
    )]
    pub output: Option<PathBuf>,

    /// What to do with entries that already exist.
    #[arg(
        long = "on-existing",
        value_name = "POLICY",
        value_enum,
        help = "What to do when an entry already exists"
    )]
    pub on_existing: Option<OnExisting>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Existing-entry policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnExisting {
    /// Stop at the first entry that already exists.
    #[value(alias = "fail")]
    Abort,
    /// Keep existing entries and create only the missing ones.
    #[value(alias = "keep")]
    Skip,
    /// Re-render existing files (destructive).
    #[value(alias = "force")]
    Overwrite,
}

impl From<OnExisting> for ExistingPolicy {
    fn from(value: OnExisting) -> Self {
        match value {
            OnExisting::Abort => ExistingPolicy::Abort,
            OnExisting::Skip => ExistingPolicy::Skip,
            OnExisting::Overwrite => ExistingPolicy::Overwrite,
        }
    }
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Resource name.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Indented tree.
    Tree,
    /// One relative path per line.
    List,
    /// JSON object.
    Json,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Resource name.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// Which artifact to render.
    #[arg(value_name = "KIND", value_enum, help = "Artifact kind")]
    pub kind: Artifact,
}

/// Artifact kinds as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Artifact {
    AddHandler,
    AddSchema,
    GetHandler,
    DeleteHandler,
    UpdateHandler,
    UpdateSchema,
}

impl From<Artifact> for ArtifactKind {
    fn from(value: Artifact) -> Self {
        match value {
            Artifact::AddHandler => ArtifactKind::AddHandler,
            Artifact::AddSchema => ArtifactKind::AddSchema,
            Artifact::GetHandler => ArtifactKind::GetHandler,
            Artifact::DeleteHandler => ArtifactKind::DeleteHandler,
            Artifact::UpdateHandler => ArtifactKind::UpdateHandler,
            Artifact::UpdateSchema => ArtifactKind::UpdateSchema,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
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

/// Subcommands for `crudgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.on_existing`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
