//! Implementation of the `plinth completions` command.

use std::io;
use std::process::ExitCode;

use clap::CommandFactory;
use clap_complete::generate;

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<ExitCode> {
    let shell = match args.shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "plinth", &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
