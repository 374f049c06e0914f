//! `stk completions` — shell completion scripts.

use clap::{Args, Command};
use clap_complete::{Shell, generate};
use std::io;

/// Arguments for `stk completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute `stk completions`.
pub fn run_completions(shell: Shell, command: &mut Command) -> anyhow::Result<()> {
    let name = command.get_name().to_string();
    generate(shell, command, name, &mut io::stdout());
    Ok(())
}
