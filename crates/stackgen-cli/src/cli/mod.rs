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
    name    = "stackgen",
    bin_name = "stackgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Deployment skeletons for HTTP storage services",
    long_about = "Stackgen materializes a ready-to-run Docker deployment \
                  skeleton: compose file, env file, build recipe, dependency \
                  manifest, and an application entry point from a template.",
    after_help = "EXAMPLES:\n\
        \x20 stackgen new ./my-deploy --template default:simple\n\
        \x20 stackgen new ./my-deploy --db-port 27018 --http-port 9090 --yes\n\
        \x20 stackgen new ./my-deploy --template ./custom-app.py\n\
        \x20 stackgen list\n\
        \x20 stackgen completions bash > /usr/share/bash-completion/completions/stackgen",
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
    /// Generate a new deployment skeleton.
    #[command(
        visible_alias = "n",
        about = "Generate a new deployment skeleton",
        after_help = "EXAMPLES:\n\
            \x20 stackgen new ./my-deploy\n\
            \x20 stackgen new ./my-deploy --template default:multiple --yes\n\
            \x20 stackgen new ./my-deploy --db-user ops --db-pass secret --api-key k123"
    )]
    New(NewArgs),

    /// List the bundled templates.
    #[command(
        visible_alias = "ls",
        about = "List bundled templates",
        after_help = "EXAMPLES:\n\
            \x20 stackgen list\n\
            \x20 stackgen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen\n\
            \x20 stackgen completions zsh  > ~/.zfunc/_stackgen\n\
            \x20 stackgen completions fish > ~/.config/fish/completions/stackgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Target directory. Created if missing; must be empty if it exists.
    #[arg(value_name = "TARGET", help = "Target directory for the skeleton")]
    pub target: PathBuf,

    /// Application template: a builtin id or a path to a file.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Builtin id (default:simple, default:multiple) or a file path"
    )]
    pub template: Option<String>,

    /// Published database port.
    #[arg(long = "db-port", value_name = "PORT", help = "Database port to publish")]
    pub db_port: Option<u16>,

    /// Published HTTP port.
    #[arg(long = "http-port", value_name = "PORT", help = "HTTP port to publish")]
    pub http_port: Option<u16>,

    /// Database root user.
    #[arg(long = "db-user", value_name = "USER", help = "Database user")]
    pub db_user: Option<String>,

    /// Database root password.
    #[arg(long = "db-pass", value_name = "PASSWORD", help = "Database password")]
    pub db_pass: Option<String>,

    /// API key seeded into the environment file.
    #[arg(long = "api-key", value_name = "KEY", help = "Server API key")]
    pub api_key: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen list`.
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
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackgen completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
