//! Flags shared by every subcommand, flattened into the top-level parser.

use std::path::PathBuf;

use clap::Args;

/// Flags accepted anywhere on the command line.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity counter. Zero means warnings only; each
    /// repetition lowers the threshold by one level.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal; skips the confirmation prompt too.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour. Also triggered by the `NO_COLOR` environment
    /// variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit configuration file. When absent the per-user default
    /// location is probed and silently skipped if missing.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How to render stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick `human` on a TTY, `plain` otherwise.
    #[default]
    Auto,
    /// Colored, symbol-prefixed lines.
    Human,
    /// Unstyled text.
    Plain,
    /// JSON where a command supports it.
    Json,
}
