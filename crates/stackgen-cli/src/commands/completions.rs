//! Implementation of the `stackgen completions` command.

use clap::CommandFactory;
use clap_complete::{Shell as CompleteShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Execute the `stackgen completions` command: write the script to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
        Shell::PowerShell => CompleteShell::PowerShell,
        Shell::Elvish => CompleteShell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "stackgen", &mut std::io::stdout());
    Ok(())
}
