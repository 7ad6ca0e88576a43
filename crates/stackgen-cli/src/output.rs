//! Terminal output.
//!
//! Every user-facing line goes through [`OutputManager`] so that quiet
//! mode and colour handling are decided in exactly one place. Diagnostics
//! go through `tracing` to stderr and are not affected by any of this.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Visual class of a status line.
#[derive(Clone, Copy)]
enum Tone {
    Success,
    Info,
    Error,
}

impl Tone {
    const fn symbol(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}", // ✓
            Tone::Info => "\u{2139}",    // ℹ
            Tone::Error => "\u{2717}",   // ✗
        }
    }

    fn paint(self, msg: &str) -> String {
        let symbol = self.symbol();
        match self {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
            Tone::Error => format!("{} {}", symbol.red().bold(), msg.red()),
        }
    }
}

/// Writes user-facing lines to stdout.
pub struct OutputManager {
    term: Term,
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    /// `Auto` resolves to `Human` on a TTY and `Plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            term: Term::stdout(),
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
        }
    }

    fn emit(&self, tone: Tone, msg: &str, always: bool) -> io::Result<()> {
        if self.quiet && !always {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{} {msg}", tone.symbol())
        } else {
            tone.paint(msg)
        };
        self.term.write_line(&line)
    }

    /// Plain line with no status symbol; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Bold header line; suppressed in quiet mode.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg, false)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Info, msg, false)
    }

    /// Errors bypass quiet mode; they must always reach the user.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Error, msg, true)
    }

    /// The resolved (never `Auto`) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
