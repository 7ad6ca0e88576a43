//! Tracing subscriber setup.
//!
//! [`init_logging`] runs once at startup, in the binary only. The core
//! and adapters crates emit events but never install subscribers, so
//! library consumers keep full control of their own logging.
//!
//! `--quiet` pins the threshold to ERROR; otherwise each `-v` lowers it
//! one step from the WARN default (INFO, DEBUG, TRACE). A set `RUST_LOG`
//! wins over both.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Fails if one is already registered.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    // Colour only when stderr is a real terminal and not opted out.
    let ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(verbosity_filter(args))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Build the level filter: `RUST_LOG` verbatim if set, otherwise the same
/// level for all three workspace crates derived from the CLI flags.
fn verbosity_filter(args: &GlobalArgs) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_str(args);
        EnvFilter::new(format!(
            "stackgen={level},stackgen_core={level},stackgen_adapters={level}"
        ))
    })
}

fn level_str(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(level_str(&args(0, false)), "warn");
    }

    #[test]
    fn each_v_steps_down_one_level() {
        assert_eq!(level_str(&args(1, false)), "info");
        assert_eq!(level_str(&args(2, false)), "debug");
        assert_eq!(level_str(&args(3, false)), "trace");
        assert_eq!(level_str(&args(9, false)), "trace");
    }

    #[test]
    fn quiet_wins_over_any_verbosity() {
        assert_eq!(level_str(&args(0, true)), "error");
        assert_eq!(level_str(&args(3, true)), "error");
    }
}
